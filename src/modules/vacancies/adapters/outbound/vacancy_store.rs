use crate::modules::vacancies::core::fixtures::vacancy_fixtures;
use crate::modules::vacancies::core::vacancy::Vacancy;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;
use chrono::Utc;

pub type VacancyStore = InMemoryEntityStore<Vacancy>;

pub fn seeded_vacancy_store() -> VacancyStore {
    VacancyStore::with_fixtures(vacancy_fixtures(Utc::now()))
}
