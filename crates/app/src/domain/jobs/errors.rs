//! Jobs service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum JobsServiceError {
    #[error("no valid fields to update")]
    NoValidFields,

    #[error("job not found")]
    NotFound,

    #[error("storage error")]
    Store(#[from] StoreError),
}
