//! Shared data types for the job board

mod enums;
mod jobs;
mod values;

pub use enums::JobType;
pub use jobs::{DEADLINE_FORMAT, InvalidJobRow, JOB_COLUMNS, JobDraft, JobRecord, JobTuple};
pub use values::SqlValue;
