// In memory implementation of the EntityRepository port.
//
// Responsibilities
// - Issue ids from an atomic counter, starting at 1 and never reused.
// - Keep one snapshot per id behind an async read/write lock.

use crate::shared::core::entity::{Entity, EntityId};
use crate::shared::infrastructure::entity_store::EntityRepository;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

pub struct InMemoryEntityStore<T: Entity> {
    last_id: AtomicI32,
    rows: RwLock<BTreeMap<EntityId, T>>,
}

impl<T: Entity> Default for InMemoryEntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> InMemoryEntityStore<T> {
    pub fn new() -> Self {
        Self {
            last_id: AtomicI32::new(0),
            rows: RwLock::new(BTreeMap::new()),
        }
    }

    /// Builds a store pre-filled with `fixtures`. Their ids are ignored and
    /// replaced by 1, 2, 3... in iteration order.
    pub fn with_fixtures(fixtures: impl IntoIterator<Item = T>) -> Self {
        let mut rows = BTreeMap::new();
        let mut last_id = 0;
        for fixture in fixtures {
            last_id += 1;
            rows.insert(last_id, fixture.with_id(last_id));
        }
        Self {
            last_id: AtomicI32::new(last_id),
            rows: RwLock::new(rows),
        }
    }

    /// # Panics
    ///
    /// When the positive `EntityId` range is used up. Ids are never reused,
    /// so there is no way to continue.
    fn next_id(&self) -> EntityId {
        match self
            .last_id
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| last.checked_add(1))
        {
            Ok(last) => last + 1,
            Err(last) => panic!("{} id space exhausted after id {last}", T::KIND),
        }
    }
}

#[async_trait::async_trait]
impl<T: Entity> EntityRepository<T> for InMemoryEntityStore<T> {
    async fn save(&self, entity: T) -> T {
        let id = self.next_id();
        let entity = entity.with_id(id);
        self.rows.write().await.insert(id, entity.clone());
        tracing::debug!(kind = T::KIND, id, "saved");
        entity
    }

    async fn take_by_id(&self, id: EntityId) -> Option<T> {
        self.rows.write().await.remove(&id)
    }

    async fn replace_with<F>(&self, id: EntityId, replace: F) -> Option<T>
    where
        F: FnOnce(&T) -> T + Send,
    {
        let mut guard = self.rows.write().await;
        let current = guard.get_mut(&id)?;
        let next = replace(&*current).with_id(id);
        Some(std::mem::replace(current, next))
    }

    async fn find_by_id(&self, id: EntityId) -> Option<T> {
        self.rows.read().await.get(&id).cloned()
    }

    async fn find_all(&self) -> Vec<T> {
        self.rows.read().await.values().cloned().collect()
    }
}
