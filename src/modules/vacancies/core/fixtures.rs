// Sample vacancies loaded into a fresh store.

use crate::modules::vacancies::core::vacancy::Vacancy;
use chrono::{DateTime, Utc};

const SAMPLES: [(&str, &str, bool); 6] = [
    ("Intern Java Developer", "100$", false),
    ("Junior Java Developer", "500$", true),
    ("Junior+ Java Developer", "700$", true),
    ("Middle Java Developer", "1000$", false),
    ("Middle+ Java Developer", "120$", false),
    ("Senior Java Developer", "2000$", true),
];

pub fn vacancy_fixtures(created_at: DateTime<Utc>) -> Vec<Vacancy> {
    SAMPLES
        .iter()
        .map(|&(title, description, visible)| Vacancy::new(title, description, created_at, visible))
        .collect()
}
