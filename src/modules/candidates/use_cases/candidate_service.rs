use crate::modules::candidates::core::candidate::Candidate;
use crate::shared::application::entity_service::EntityService;

pub type CandidateService<TCandidates, TFiles> = EntityService<Candidate, TCandidates, TFiles>;
