//! PostgreSQL SQL dialect implementation

use super::SqlDialect;

/// PostgreSQL SQL dialect
pub struct PostgresDialect;

impl SqlDialect for PostgresDialect {
    fn name(&self) -> &'static str {
        "postgres"
    }

    fn placeholder(&self, index: usize) -> String {
        format!("${}", index)
    }

    fn like_ignore_case(&self, col: &str, _folded_col: &str, index: usize) -> String {
        format!("{} ILIKE {} ESCAPE '\\'", col, self.placeholder(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder() {
        let dialect = PostgresDialect;
        assert_eq!(dialect.placeholder(1), "$1");
        assert_eq!(dialect.placeholder(12), "$12");
    }

    #[test]
    fn test_like_ignore_case_uses_ilike() {
        let dialect = PostgresDialect;
        assert_eq!(
            dialect.like_ignore_case("location", "location_folded", 3),
            r"location ILIKE $3 ESCAPE '\'"
        );
    }
}
