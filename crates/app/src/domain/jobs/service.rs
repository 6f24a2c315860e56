//! Jobs service.

use std::sync::Arc;

use async_trait::async_trait;
use jiff::Timestamp;
use mockall::automock;

use crate::{
    domain::jobs::{
        data::{JobUpdate, NewJob},
        errors::JobsServiceError,
        records::{JobRecord, format_timestamp},
    },
    identity::models::OwnerId,
    store::{RecordId, RecordKey, RecordStore},
};

/// Jobs service over a shared record store handle.
#[derive(Clone)]
pub struct StoreJobsService {
    store: Arc<dyn RecordStore>,
}

impl StoreJobsService {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl JobsService for StoreJobsService {
    async fn create_job(&self, owner: OwnerId, job: NewJob) -> Result<JobRecord, JobsServiceError> {
        let key = RecordKey::new(owner, RecordId::generate());
        let record = JobRecord::create(&key, &job.fields, &format_timestamp(Timestamp::now()));

        self.store.put(key, record.as_item().clone()).await?;

        Ok(record)
    }

    async fn get_job(
        &self,
        owner: OwnerId,
        record: RecordId,
    ) -> Result<JobRecord, JobsServiceError> {
        self.store
            .get(RecordKey::new(owner, record))
            .await?
            .map(JobRecord::from)
            .ok_or(JobsServiceError::NotFound)
    }

    async fn list_jobs(&self, owner: OwnerId) -> Result<Vec<JobRecord>, JobsServiceError> {
        let items = self.store.query_by_owner(owner).await?;

        Ok(items.into_iter().map(JobRecord::from).collect())
    }

    async fn update_job(
        &self,
        owner: OwnerId,
        record: RecordId,
        update: JobUpdate,
    ) -> Result<JobRecord, JobsServiceError> {
        if update.is_empty() {
            return Err(JobsServiceError::NoValidFields);
        }

        let fields = update.into_attributes(&format_timestamp(Timestamp::now()));

        // An absent key is created by the store with only these fields.
        let item = self
            .store
            .update(RecordKey::new(owner, record), fields)
            .await?;

        Ok(item.into())
    }

    async fn delete_job(&self, owner: OwnerId, record: RecordId) -> Result<(), JobsServiceError> {
        self.store.delete(RecordKey::new(owner, record)).await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait JobsService: Send + Sync {
    /// Creates a job record, filling defaults for every field not supplied.
    async fn create_job(&self, owner: OwnerId, job: NewJob) -> Result<JobRecord, JobsServiceError>;

    /// Retrieve a single job record.
    async fn get_job(&self, owner: OwnerId, record: RecordId)
    -> Result<JobRecord, JobsServiceError>;

    /// Retrieves every job record belonging to the owner.
    async fn list_jobs(&self, owner: OwnerId) -> Result<Vec<JobRecord>, JobsServiceError>;

    /// Applies a partial update and returns the resulting record.
    async fn update_job(
        &self,
        owner: OwnerId,
        record: RecordId,
        update: JobUpdate,
    ) -> Result<JobRecord, JobsServiceError>;

    /// Deletes a job record. Succeeds whether or not it existed.
    async fn delete_job(&self, owner: OwnerId, record: RecordId) -> Result<(), JobsServiceError>;
}
