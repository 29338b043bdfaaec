use crate::modules::vacancies::core::vacancy::Vacancy;
use crate::shared::application::entity_service::EntityService;

pub type VacancyService<TVacancies, TFiles> = EntityService<Vacancy, TVacancies, TFiles>;
