// Keeps uploaded files: bytes on disk, metadata in a file repository.
//
// Responsibilities
// - Write each upload under a fresh, collision free name inside the storage directory.
// - Read bytes back by file id.
// - Remove both the metadata row and the bytes on delete.

use crate::modules::files::core::file::{FileDto, StoredFile};
use crate::shared::core::entity::EntityId;
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::entity_store::EntityRepository;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use uuid::Uuid;

pub struct FileService<TFiles>
where
    TFiles: EntityRepository<StoredFile> + 'static,
{
    files: Arc<TFiles>,
    storage_dir: PathBuf,
}

impl<TFiles> FileService<TFiles>
where
    TFiles: EntityRepository<StoredFile> + 'static,
{
    /// Creates the storage directory when it does not exist yet.
    pub async fn open(
        files: Arc<TFiles>,
        storage_dir: impl Into<PathBuf>,
    ) -> Result<Self, ApplicationError> {
        let storage_dir = storage_dir.into();
        tokio::fs::create_dir_all(&storage_dir).await?;
        Ok(Self { files, storage_dir })
    }

    pub fn storage_dir(&self) -> &Path {
        &self.storage_dir
    }

    pub async fn save(&self, file: FileDto) -> Result<StoredFile, ApplicationError> {
        let path = self.new_file_path(&file.name);
        tokio::fs::write(&path, &file.content).await?;
        let stored = self.files.save(StoredFile::new(file.name, path)).await;
        tracing::debug!(file_id = stored.id, path = %stored.path.display(), "file stored");
        Ok(stored)
    }

    pub async fn get_by_id(&self, id: EntityId) -> Result<Option<FileDto>, ApplicationError> {
        let Some(stored) = self.files.find_by_id(id).await else {
            return Ok(None);
        };
        let content = tokio::fs::read(&stored.path).await?;
        Ok(Some(FileDto::new(stored.name, content)))
    }

    pub async fn delete_by_id(&self, id: EntityId) -> Result<bool, ApplicationError> {
        let Some(stored) = self.files.find_by_id(id).await else {
            return Ok(false);
        };
        match tokio::fs::remove_file(&stored.path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(file_id = id, path = %stored.path.display(), "file already gone from disk");
            }
            Err(e) => return Err(e.into()),
        }
        Ok(self.files.delete_by_id(id).await)
    }

    fn new_file_path(&self, name: &str) -> PathBuf {
        // Only the last component of the client supplied name is kept.
        let base = Path::new(name)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.storage_dir.join(format!("{}{}", Uuid::now_v7(), base))
    }
}
