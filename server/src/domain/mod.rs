//! Domain services
//!
//! - `jobs` - Job search and creation on top of the transactional store

pub mod jobs;

pub use jobs::{JobCreationService, JobSearchService, JobServiceError};
