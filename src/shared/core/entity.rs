// Identity of stored records.
//
// Purpose
// - Let a single store implementation serve every entity kind.
//
// Responsibilities
// - Expose the store-assigned id and rebuild a snapshot around a new id.
// - Expose the optional file attached to a record.

pub type EntityId = i32;

/// A record with store-assigned identity.
///
/// `with_id` must be pure: it is used to build the replacement snapshot
/// while the store holds its write guard.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Human readable kind, used in log lines.
    const KIND: &'static str;

    fn id(&self) -> EntityId;

    fn with_id(self, id: EntityId) -> Self;
}

/// Records that may carry an uploaded file.
pub trait HasAttachment {
    fn file_id(&self) -> Option<EntityId>;

    fn set_file_id(&mut self, file_id: Option<EntityId>);
}
