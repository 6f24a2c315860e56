//! Record Store
//!
//! A key-value document table addressed by the composite key
//! `(owner identifier, record identifier)`. Documents are JSON objects.

mod errors;
mod keys;
mod memory;
mod postgres;

use async_trait::async_trait;
use mockall::automock;
use serde_json::{Map, Value};

pub use errors::StoreError;
pub use keys::*;
pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

use crate::identity::models::OwnerId;

/// Stored document: a JSON object of attribute name to value.
pub type Item = Map<String, Value>;

#[automock]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Writes the item under the key, replacing any existing document.
    async fn put(&self, key: RecordKey, item: Item) -> Result<(), StoreError>;

    /// Point lookup by composite key.
    async fn get(&self, key: RecordKey) -> Result<Option<Item>, StoreError>;

    /// Every document in the owner's partition, in no particular order.
    async fn query_by_owner(&self, owner: OwnerId) -> Result<Vec<Item>, StoreError>;

    /// Merges `fields` into the document and returns the result.
    ///
    /// When the key is absent a new document holding only the key attributes
    /// and `fields` is created.
    async fn update(&self, key: RecordKey, fields: Item) -> Result<Item, StoreError>;

    /// Removes the document. Deleting an absent key succeeds.
    async fn delete(&self, key: RecordKey) -> Result<(), StoreError>;
}
