//! App Context

use std::sync::Arc;

use sqlx::migrate::MigrateError;
use thiserror::Error;

use crate::{
    database,
    domain::jobs::{JobsService, StoreJobsService},
    identity::OwnerResolver,
    store::{MemoryRecordStore, PgRecordStore, RecordStore},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] MigrateError),
}

/// Process-wide application services, built once at startup.
#[derive(Clone)]
pub struct AppContext {
    pub jobs: Arc<dyn JobsService>,
    pub owners: Arc<dyn OwnerResolver>,
}

impl AppContext {
    #[must_use]
    pub fn new(store: Arc<dyn RecordStore>, owners: Arc<dyn OwnerResolver>) -> Self {
        Self {
            jobs: Arc::new(StoreJobsService::new(store)),
            owners,
        }
    }

    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection or applying
    /// migrations fails.
    pub async fn from_database_url(
        url: &str,
        run_migrations: bool,
        owners: Arc<dyn OwnerResolver>,
    ) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        if run_migrations {
            database::migrate(&pool)
                .await
                .map_err(AppInitError::Migrations)?;
        }

        Ok(Self::new(Arc::new(PgRecordStore::new(pool)), owners))
    }

    /// Build application context over a process-local store.
    #[must_use]
    pub fn in_memory(owners: Arc<dyn OwnerResolver>) -> Self {
        Self::new(Arc::new(MemoryRecordStore::new()), owners)
    }
}
