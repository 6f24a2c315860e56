//! Test context for service-level tests.

use std::sync::Arc;

use crate::{
    domain::jobs::StoreJobsService, identity::models::OwnerId, store::MemoryRecordStore,
};

pub(crate) struct TestContext {
    pub(crate) owner: OwnerId,
    pub(crate) jobs: StoreJobsService,
}

impl TestContext {
    /// A jobs service over an empty in-memory store.
    pub(crate) fn new() -> Self {
        Self {
            owner: OwnerId::from("test-owner"),
            jobs: StoreJobsService::new(Arc::new(MemoryRecordStore::new())),
        }
    }
}
