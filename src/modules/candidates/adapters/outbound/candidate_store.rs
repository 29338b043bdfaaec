use crate::modules::candidates::core::candidate::Candidate;
use crate::modules::candidates::core::fixtures::candidate_fixtures;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use chrono::Utc;

pub type CandidateStore = InMemoryEntityStore<Candidate>;

/// A candidate store holding the six sample rows, ids 1..=6.
pub fn seeded_candidate_store() -> CandidateStore {
    CandidateStore::with_fixtures(candidate_fixtures(Utc::now()))
}
