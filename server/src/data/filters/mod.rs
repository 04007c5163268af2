//! Job filter query construction
//!
//! Turns a sparse set of optional filter parameters into a parameterized,
//! dialect-independent [`QueryPlan`]. Validation failures are reported as
//! [`FilterError`] before any store access.
//!
//! ## Usage
//!
//! ```
//! use jobboard_server::data::filters::{FilterQueryBuilder, JobFilterRequest};
//! use jobboard_server::data::sql::Backend;
//!
//! let filters = JobFilterRequest {
//!     title_query: Some("dev".to_string()),
//!     min_salary: Some(20),
//!     ..Default::default()
//! };
//! let plan = FilterQueryBuilder::build(&filters).unwrap();
//! let sql = plan.to_select_sql(Backend::Sqlite.dialect(), "id, title");
//! assert!(sql.contains("salary_range >= ?"));
//! ```

mod builder;
mod error;
mod types;

pub use builder::{FilterQueryBuilder, MONTHS_PER_YEAR};
pub use error::FilterError;
pub use types::{JobColumn, JobFilterRequest, OrderClause, Predicate, PredicateOp, QueryPlan};
