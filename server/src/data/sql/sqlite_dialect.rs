//! SQLite SQL dialect implementation

use super::SqlDialect;

/// SQLite SQL dialect
///
/// SQLite's `LOWER()` and `LIKE` only fold ASCII letters, so case-insensitive
/// matching reads the `*_folded` columns written by the repository.
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    fn like_ignore_case(&self, _col: &str, folded_col: &str, index: usize) -> String {
        format!("{} LIKE {} ESCAPE '\\'", folded_col, self.placeholder(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        let dialect = SqliteDialect;
        assert_eq!(dialect.placeholder(1), "?");
        assert_eq!(dialect.placeholder(5), "?");
    }

    #[test]
    fn test_like_ignore_case_reads_folded_column() {
        let dialect = SqliteDialect;
        assert_eq!(
            dialect.like_ignore_case("title", "title_folded", 1),
            r"title_folded LIKE ? ESCAPE '\'"
        );
    }
}
