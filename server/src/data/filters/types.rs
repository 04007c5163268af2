//! Filter request and query plan types

use crate::data::sql::SqlDialect;
use crate::data::types::SqlValue;

/// Optional filters for listing jobs. Every unset field means "no constraint".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobFilterRequest {
    /// Case-insensitive substring of the title
    pub title_query: Option<String>,
    /// Case-insensitive substring of the location
    pub location: Option<String>,
    /// Raw job type label, validated by the builder
    pub job_type: Option<String>,
    /// Lower salary bound in thousands per month
    pub min_salary: Option<i64>,
    /// Upper salary bound in thousands per month
    pub max_salary: Option<i64>,
}

/// Columns a predicate may reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobColumn {
    Title,
    Location,
    JobType,
    SalaryRange,
}

impl JobColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Location => "location",
            Self::JobType => "job_type",
            Self::SalaryRange => "salary_range",
        }
    }

    /// Column holding the Unicode-lowercased copy of a text column.
    /// Non-text columns have no folded copy and map to themselves.
    pub fn folded_as_str(&self) -> &'static str {
        match self {
            Self::Title => "title_folded",
            Self::Location => "location_folded",
            Self::JobType | Self::SalaryRange => self.as_str(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredicateOp {
    ContainsIgnoreCase,
    Equals,
    AtLeast,
    AtMost,
}

/// A single WHERE condition consuming exactly one bound parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Predicate {
    pub column: JobColumn,
    pub op: PredicateOp,
}

impl Predicate {
    /// Render with the placeholder for the given 1-based parameter index
    pub fn to_sql(&self, dialect: &dyn SqlDialect, index: usize) -> String {
        let col = self.column.as_str();
        match self.op {
            PredicateOp::ContainsIgnoreCase => {
                dialect.like_ignore_case(col, self.column.folded_as_str(), index)
            }
            PredicateOp::Equals => format!("{} = {}", col, dialect.placeholder(index)),
            PredicateOp::AtLeast => format!("{} >= {}", col, dialect.placeholder(index)),
            PredicateOp::AtMost => format!("{} <= {}", col, dialect.placeholder(index)),
        }
    }
}

/// Result ordering. Only newest-first exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderClause {
    #[default]
    NewestFirst,
}

impl OrderClause {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::NewestFirst => "created_at DESC, id DESC",
        }
    }
}

/// Parameterized, dialect-independent job query
///
/// Predicates and parameters are kept in lockstep: predicate `i` binds
/// parameter `i`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPlan {
    predicates: Vec<Predicate>,
    params: Vec<SqlValue>,
    order: OrderClause,
}

impl QueryPlan {
    pub(super) fn push(&mut self, column: JobColumn, op: PredicateOp, value: SqlValue) {
        self.predicates.push(Predicate { column, op });
        self.params.push(value);
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn params(&self) -> &[SqlValue] {
        &self.params
    }

    pub fn order(&self) -> OrderClause {
        self.order
    }

    pub fn is_unfiltered(&self) -> bool {
        self.predicates.is_empty()
    }

    /// WHERE clause body. Always starts with a true base predicate.
    pub fn where_clause(&self, dialect: &dyn SqlDialect) -> String {
        let mut sql = String::from("1=1");
        for (i, predicate) in self.predicates.iter().enumerate() {
            sql.push_str(" AND ");
            sql.push_str(&predicate.to_sql(dialect, i + 1));
        }
        sql
    }

    /// Full SELECT against the `jobs` table
    pub fn to_select_sql(&self, dialect: &dyn SqlDialect, columns: &str) -> String {
        format!(
            "SELECT {} FROM jobs WHERE {} ORDER BY {}",
            columns,
            self.where_clause(dialect),
            self.order.as_sql()
        )
    }
}
