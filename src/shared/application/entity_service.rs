// Service over one entity kind whose records may carry an uploaded file.
//
// Responsibilities
// - Store the upload before the record so the record can point at it.
// - Swap files on update and drop the file of a deleted record.
// - Pass plain lookups straight through to the entity repository.

use crate::modules::files::core::file::{FileDto, StoredFile};
use crate::modules::files::use_cases::file_service::FileService;
use crate::shared::core::entity::{Entity, EntityId, HasAttachment};
use crate::shared::core::errors::ApplicationError;
use crate::shared::infrastructure::entity_store::EntityRepository;
use std::marker::PhantomData;
use std::sync::Arc;

pub struct EntityService<T, TEntities, TFiles>
where
    T: Entity + HasAttachment,
    TEntities: EntityRepository<T> + 'static,
    TFiles: EntityRepository<StoredFile> + 'static,
{
    entities: Arc<TEntities>,
    files: Arc<FileService<TFiles>>,
    _kind: PhantomData<fn() -> T>,
}

impl<T, TEntities, TFiles> EntityService<T, TEntities, TFiles>
where
    T: Entity + HasAttachment,
    TEntities: EntityRepository<T> + 'static,
    TFiles: EntityRepository<StoredFile> + 'static,
{
    pub fn new(entities: Arc<TEntities>, files: Arc<FileService<TFiles>>) -> Self {
        Self {
            entities,
            files,
            _kind: PhantomData,
        }
    }

    pub async fn save(&self, mut entity: T, file: FileDto) -> Result<T, ApplicationError> {
        if !file.is_empty() {
            let stored = self.files.save(file).await?;
            entity.set_file_id(Some(stored.id));
        }
        let saved = self.entities.save(entity).await;
        tracing::info!(kind = T::KIND, id = saved.id(), "created");
        Ok(saved)
    }

    /// The stored record owns its `file_id`: the caller's value is ignored.
    /// An empty upload keeps the current file, a non-empty one replaces it.
    pub async fn update(&self, mut entity: T, file: FileDto) -> Result<bool, ApplicationError> {
        let id = entity.id();
        if file.is_empty() {
            let previous = self
                .entities
                .replace_with(id, move |current: &T| {
                    entity.set_file_id(current.file_id());
                    entity
                })
                .await;
            return Ok(previous.is_some());
        }

        let stored = self.files.save(file).await?;
        entity.set_file_id(Some(stored.id));
        let Some(previous) = self.entities.replace_with(id, move |_: &T| entity).await else {
            tracing::warn!(kind = T::KIND, id, "update of unknown record, discarding upload");
            self.discard_file(stored.id).await;
            return Ok(false);
        };
        if let Some(old_file_id) = previous.file_id() {
            self.discard_file(old_file_id).await;
        }
        tracing::info!(kind = T::KIND, id, file_id = stored.id, "updated with new file");
        Ok(true)
    }

    pub async fn delete_by_id(&self, id: EntityId) -> bool {
        let Some(removed) = self.entities.take_by_id(id).await else {
            return false;
        };
        if let Some(file_id) = removed.file_id() {
            self.discard_file(file_id).await;
        }
        tracing::info!(kind = T::KIND, id, "deleted");
        true
    }

    pub async fn find_by_id(&self, id: EntityId) -> Option<T> {
        self.entities.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Vec<T> {
        self.entities.find_all().await
    }

    /// Runs after the record change has committed, so a failure only leaves
    /// an unreferenced file behind.
    async fn discard_file(&self, file_id: EntityId) {
        if let Err(e) = self.files.delete_by_id(file_id).await {
            tracing::warn!(kind = T::KIND, file_id, error = %e, "could not remove file");
        }
    }
}
