use crate::shared::core::entity::{Entity, EntityId};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata of an uploaded file. The bytes live at `path`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: EntityId,
    pub name: String,
    pub path: PathBuf,
}

impl StoredFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            path: path.into(),
        }
    }
}

impl Entity for StoredFile {
    const KIND: &'static str = "file";

    fn id(&self) -> EntityId {
        self.id
    }

    fn with_id(self, id: EntityId) -> Self {
        Self { id, ..self }
    }
}

/// Upload as it arrives from a form: original name plus raw bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileDto {
    pub name: String,
    pub content: Vec<u8>,
}

impl FileDto {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// An upload without bytes, i.e. the form was submitted without a file.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
