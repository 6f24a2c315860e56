//! Identity errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("caller could not be identified")]
    Unauthenticated,
}
