//! Job Tracker Domain Concerns

pub mod jobs;
