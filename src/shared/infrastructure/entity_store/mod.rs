// Port for per-kind record tables.
//
// Purpose
// - Describe what services need from a table of records, without deciding where the rows live.
//
// Boundaries
// - Absence is not an error: callers get `false` or `None` back.

pub mod in_memory;

use crate::shared::core::entity::{Entity, EntityId};
use async_trait::async_trait;

#[async_trait]
pub trait EntityRepository<T: Entity>: Send + Sync {
    /// Assigns the next id and stores the entity under it.
    async fn save(&self, entity: T) -> T;

    /// Removes the row and hands back the snapshot that was removed.
    async fn take_by_id(&self, id: EntityId) -> Option<T>;

    /// Swaps the row `id` for `replace(current)` in one step, keeping the
    /// stored id, and returns the snapshot that was replaced.
    /// `replace` must be pure.
    async fn replace_with<F>(&self, id: EntityId, replace: F) -> Option<T>
    where
        F: FnOnce(&T) -> T + Send;

    async fn find_by_id(&self, id: EntityId) -> Option<T>;

    async fn find_all(&self) -> Vec<T>;

    async fn delete_by_id(&self, id: EntityId) -> bool {
        self.take_by_id(id).await.is_some()
    }

    /// Replaces the row with `entity.id()`, keeping the stored id.
    async fn update(&self, entity: T) -> bool {
        let id = entity.id();
        self.replace_with(id, move |_: &T| entity).await.is_some()
    }
}
