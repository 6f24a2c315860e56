//! Job Applications

pub mod data;
pub mod errors;
pub mod records;
pub mod service;

pub use errors::JobsServiceError;
pub use service::*;
