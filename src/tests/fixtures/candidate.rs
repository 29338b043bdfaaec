use super::fixed_creation_date;
use crate::modules::candidates::core::candidate::Candidate;
use crate::shared::core::entity::EntityId;

pub struct CandidateBuilder {
    inner: Candidate,
}

impl Default for CandidateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Candidate> for CandidateBuilder {
    fn from(inner: Candidate) -> Self {
        Self { inner }
    }
}

impl CandidateBuilder {
    pub fn new() -> Self {
        Self {
            inner: Candidate::new("Anna Fixed", "Middle", fixed_creation_date(), 1),
        }
    }

    pub fn id(mut self, v: EntityId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn city_id(mut self, v: EntityId) -> Self {
        self.inner.city_id = v;
        self
    }

    pub fn file_id(mut self, v: Option<EntityId>) -> Self {
        self.inner.file_id = v;
        self
    }

    pub fn build(self) -> Candidate {
        self.inner
    }
}

#[cfg(test)]
mod candidate_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn setters_override_fields_and_build_returns_inner() {
        let candidate = CandidateBuilder::new()
            .id(3)
            .name("Bob")
            .description("Senior")
            .city_id(2)
            .file_id(Some(8))
            .build();

        assert_eq!(candidate.id, 3);
        assert_eq!(candidate.name, "Bob");
        assert_eq!(candidate.description, "Senior");
        assert_eq!(candidate.city_id, 2);
        assert_eq!(candidate.file_id, Some(8));
        assert_eq!(candidate.creation_date, fixed_creation_date());
    }
}
