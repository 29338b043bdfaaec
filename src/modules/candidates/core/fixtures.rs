// Sample candidates loaded into a fresh store.

use crate::modules::candidates::core::candidate::Candidate;
use chrono::{DateTime, Utc};

const SAMPLES: [(&str, &str); 6] = [
    ("Вася Иванов", "Intern"),
    ("Алеша Смирнов", "Junior"),
    ("Миша Петров", "Junior+"),
    ("Семён Титов", "Middle"),
    ("Рома Никитин", "Middle+"),
    ("Вова Ларин", "Senior"),
];

/// City ids cycle through the seeded city directory (1..=3).
pub fn candidate_fixtures(created_at: DateTime<Utc>) -> Vec<Candidate> {
    SAMPLES
        .iter()
        .zip((1..=3).cycle())
        .map(|(&(name, description), city_id)| Candidate::new(name, description, created_at, city_id))
        .collect()
}
