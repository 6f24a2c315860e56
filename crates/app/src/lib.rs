//! Job application tracker domain and persistence.

pub mod context;
pub mod database;
pub mod domain;
pub mod identity;
pub mod store;

#[cfg(test)]
mod test;
