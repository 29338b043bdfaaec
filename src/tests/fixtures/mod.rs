// Builders shared by unit tests. Compiled only under `cfg(test)`.

pub mod candidate;
pub mod vacancy;

use chrono::{DateTime, Utc};

pub fn fixed_creation_date() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(1_700_000_000_000).unwrap()
}
