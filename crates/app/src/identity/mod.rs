//! Owner Identity

pub mod errors;
pub mod models;
mod resolver;

pub use errors::IdentityError;
pub use resolver::*;
