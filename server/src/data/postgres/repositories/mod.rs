//! PostgreSQL repositories
//!
//! Types (JobRecord, JobDraft) should be imported from `crate::data::types`.

pub mod job;

pub use job::{create_job, search_jobs};
