//! Job search and creation services
//!
//! Both services hold an explicit handle to the transactional store and
//! obtain the backend repository per call.

mod create;
mod error;
mod search;

pub use create::JobCreationService;
pub use error::JobServiceError;
pub use search::JobSearchService;
