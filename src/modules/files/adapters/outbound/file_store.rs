use crate::modules::files::core::file::StoredFile;
use crate::shared::infrastructure::entity_store::in_memory::InMemoryEntityStore;

pub type FileStore = InMemoryEntityStore<StoredFile>;
