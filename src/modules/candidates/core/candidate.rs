use crate::shared::core::entity::{Entity, EntityId, HasAttachment};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub creation_date: DateTime<Utc>,
    pub city_id: EntityId,
    pub file_id: Option<EntityId>,
}

impl Candidate {
    /// A candidate that has not been stored yet.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        creation_date: DateTime<Utc>,
        city_id: EntityId,
    ) -> Self {
        Self {
            id: 0,
            name: name.into(),
            description: description.into(),
            creation_date,
            city_id,
            file_id: None,
        }
    }
}

impl Entity for Candidate {
    const KIND: &'static str = "candidate";

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }
}

impl HasAttachment for Candidate {
    fn file_id(&self) -> Option<EntityId> {
        self.file_id
    }

    fn set_file_id(&mut self, file_id: Option<EntityId>) {
        self.file_id = file_id;
    }
}
