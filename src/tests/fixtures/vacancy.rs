use super::fixed_creation_date;
use crate::modules::vacancies::core::vacancy::Vacancy;
use crate::shared::core::entity::EntityId;

pub struct VacancyBuilder {
    inner: Vacancy,
}

impl Default for VacancyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl VacancyBuilder {
    pub fn new() -> Self {
        Self {
            inner: Vacancy::new("Rust Developer", "3000$", fixed_creation_date(), true),
        }
    }

    pub fn id(mut self, v: EntityId) -> Self {
        self.inner.id = v;
        self
    }

    pub fn title(mut self, v: impl Into<String>) -> Self {
        self.inner.title = v.into();
        self
    }

    pub fn description(mut self, v: impl Into<String>) -> Self {
        self.inner.description = v.into();
        self
    }

    pub fn visible(mut self, v: bool) -> Self {
        self.inner.visible = v;
        self
    }

    pub fn city_id(mut self, v: Option<EntityId>) -> Self {
        self.inner.city_id = v;
        self
    }

    pub fn build(self) -> Vacancy {
        self.inner
    }
}
