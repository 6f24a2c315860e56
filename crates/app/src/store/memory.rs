//! In-memory record store.

use std::sync::Arc;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use tokio::sync::RwLock;

use crate::{
    identity::models::OwnerId,
    store::{Item, RecordId, RecordKey, RecordStore, StoreError},
};

/// Record store backed by a process-local map. Contents are lost on restart.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    partitions: Arc<RwLock<FxHashMap<OwnerId, FxHashMap<RecordId, Item>>>>,
}

impl MemoryRecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn put(&self, key: RecordKey, item: Item) -> Result<(), StoreError> {
        self.partitions
            .write()
            .await
            .entry(key.owner)
            .or_default()
            .insert(key.record, item);

        Ok(())
    }

    async fn get(&self, key: RecordKey) -> Result<Option<Item>, StoreError> {
        let partitions = self.partitions.read().await;

        Ok(partitions
            .get(&key.owner)
            .and_then(|partition| partition.get(&key.record))
            .cloned())
    }

    async fn query_by_owner(&self, owner: OwnerId) -> Result<Vec<Item>, StoreError> {
        let partitions = self.partitions.read().await;

        Ok(partitions
            .get(&owner)
            .map(|partition| partition.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn update(&self, key: RecordKey, fields: Item) -> Result<Item, StoreError> {
        let mut partitions = self.partitions.write().await;
        let attributes = key.attributes();

        let item = partitions
            .entry(key.owner)
            .or_default()
            .entry(key.record)
            .or_insert(attributes);

        item.extend(fields);

        Ok(item.clone())
    }

    async fn delete(&self, key: RecordKey) -> Result<(), StoreError> {
        let mut partitions = self.partitions.write().await;

        if let Some(partition) = partitions.get_mut(&key.owner) {
            partition.remove(&key.record);
        }

        Ok(())
    }
}
