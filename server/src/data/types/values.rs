//! Bound SQL parameter values

/// A value bound to a positional placeholder in a rendered query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Int(i64),
}
