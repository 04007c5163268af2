use thiserror::Error;

use crate::data::DataError;
use crate::data::filters::FilterError;

/// Failure of a job service call
#[derive(Error, Debug)]
pub enum JobServiceError {
    /// Caller-supplied filters were rejected before touching the store
    #[error(transparent)]
    Validation(#[from] FilterError),

    #[error(transparent)]
    Storage(#[from] DataError),
}
