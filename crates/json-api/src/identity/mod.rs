//! Caller identity

pub(crate) mod middleware;
