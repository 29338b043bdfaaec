use crate::shared::core::entity::{Entity, EntityId, HasAttachment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vacancy {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub visible: bool,
    pub city_id: Option<EntityId>,
    pub file_id: Option<EntityId>,
}

impl Vacancy {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        creation_date: DateTime<Utc>,
        visible: bool,
    ) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            creation_date,
            visible,
            city_id: None,
            file_id: None,
        }
    }

    pub fn in_city(self, city_id: EntityId) -> Self {
        Self {
            city_id: Some(city_id),
            ..self
        }
    }
}

impl Entity for Vacancy {
    const KIND: &'static str = "vacancy";

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }
}

impl HasAttachment for Vacancy {
    fn file_id(&self) -> Option<EntityId> {
        self.file_id
    }

    fn set_file_id(&mut self, file_id: Option<EntityId>) {
        self.file_id = file_id;
    }
}
