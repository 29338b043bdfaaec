use crate::modules::candidates::adapters::outbound::candidate_store::{
    CandidateStore, seeded_candidate_store,
};
use crate::modules::candidates::core::candidate::Candidate;
use crate::modules::candidates::use_cases::candidate_service::CandidateService;
use crate::modules::cities::adapters::outbound::city_store::{CityStore, seeded_city_store};
use crate::modules::cities::core::city::City;
use crate::modules::cities::use_cases::city_service::CityService;
use crate::modules::files::adapters::outbound::file_store::FileStore;
use crate::modules::files::use_cases::file_service::FileService;
use crate::modules::vacancies::adapters::outbound::vacancy_store::{
    VacancyStore, seeded_vacancy_store,
};
use crate::modules::vacancies::core::vacancy::Vacancy;
use crate::modules::vacancies::use_cases::vacancy_service::VacancyService;
use crate::shared::core::errors::ApplicationError;
use crate::shell::config::Config;
use serde::Serialize;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub candidates: Arc<CandidateService<CandidateStore, FileStore>>,
    pub vacancies: Arc<VacancyService<VacancyStore, FileStore>>,
    pub cities: Arc<CityService<CityStore>>,
    pub files: Arc<FileService<FileStore>>,
}

/// Everything on the board at one point in time, ordered by id.
#[derive(Debug, Serialize)]
pub struct BoardSnapshot {
    pub cities: Vec<City>,
    pub candidates: Vec<Candidate>,
    pub vacancies: Vec<Vacancy>,
}

impl AppState {
    pub async fn build(config: &Config) -> Result<Self, ApplicationError> {
        let (candidate_store, vacancy_store) = if config.seed_fixtures {
            (seeded_candidate_store(), seeded_vacancy_store())
        } else {
            (CandidateStore::new(), VacancyStore::new())
        };

        let files = Arc::new(FileService::open(Arc::new(FileStore::new()), &config.files_dir).await?);
        let state = Self {
            candidates: Arc::new(CandidateService::new(Arc::new(candidate_store), files.clone())),
            vacancies: Arc::new(VacancyService::new(Arc::new(vacancy_store), files.clone())),
            cities: Arc::new(CityService::new(Arc::new(seeded_city_store()))),
            files,
        };
        tracing::info!(
            files_dir = %config.files_dir.display(),
            seeded = config.seed_fixtures,
            "app state ready"
        );
        Ok(state)
    }

    pub async fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            cities: self.cities.find_all().await,
            candidates: self.candidates.find_all().await,
            vacancies: self.vacancies.find_all().await,
        }
    }
}
