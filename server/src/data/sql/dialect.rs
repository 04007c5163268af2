//! SQL dialect trait for multi-database support

/// SQL dialect trait for generating database-specific SQL
///
/// Only the pieces of syntax that differ between the supported stores live
/// here; everything else in a rendered query is plain ANSI SQL.
pub trait SqlDialect: Send + Sync {
    /// Get the dialect name
    fn name(&self) -> &'static str;

    /// Generate a parameter placeholder for the given index (1-based)
    ///
    /// - SQLite: Always returns "?"
    /// - PostgreSQL: Returns "$1", "$2", etc.
    fn placeholder(&self, index: usize) -> String;

    /// Case-insensitive LIKE against an escaped, lowercased pattern
    ///
    /// `folded_col` holds the same text as `col` lowercased with Unicode
    /// rules at write time. The bound pattern comes from `contains_pattern`,
    /// so the backslash escape character is declared explicitly.
    fn like_ignore_case(&self, col: &str, folded_col: &str, index: usize) -> String;
}
