//! Filter query builder
//!
//! Validation runs in a fixed order (job type, min salary, max salary, range)
//! and the first failure wins. No predicate is emitted until every check has
//! passed, so a plan is either fully valid or not produced at all.
//!
//! Containment patterns are lowercased with Unicode rules. Dialects compare
//! them against a column folded the same way (see `SqlDialect::like_ignore_case`).

use super::error::FilterError;
use super::types::{JobColumn, JobFilterRequest, PredicateOp, QueryPlan};
use crate::data::types::{JobType, SqlValue};
use crate::utils::sql::contains_pattern;
use crate::utils::string::non_blank;

/// Salary filters are given per month; `salary_range` is stored per year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Builds a [`QueryPlan`] from a [`JobFilterRequest`]
pub struct FilterQueryBuilder;

impl FilterQueryBuilder {
    /// Validate the filters and produce a parameterized plan.
    ///
    /// Pure and idempotent. Predicate order: title, location, job type, min
    /// salary, max salary.
    pub fn build(filters: &JobFilterRequest) -> Result<QueryPlan, FilterError> {
        let job_type = match non_blank(filters.job_type.as_deref()) {
            // Rejected values are reported untrimmed
            Some(trimmed) => Some(JobType::parse(trimmed).ok_or_else(|| {
                FilterError::InvalidEnumValue {
                    field: "job_type",
                    value: filters.job_type.clone().unwrap_or_default(),
                }
            })?),
            None => None,
        };

        if let Some(min) = filters.min_salary
            && min < 0
        {
            return Err(FilterError::NegativeValue { field: "minSalary" });
        }
        if let Some(max) = filters.max_salary
            && max < 0
        {
            return Err(FilterError::NegativeValue { field: "maxSalary" });
        }
        // Compared in the caller's units; the annual conversion is monotonic.
        if let (Some(min), Some(max)) = (filters.min_salary, filters.max_salary)
            && min > max
        {
            return Err(FilterError::InvalidRange { min, max });
        }

        let mut plan = QueryPlan::default();

        if let Some(title) = non_blank(filters.title_query.as_deref()) {
            plan.push(
                JobColumn::Title,
                PredicateOp::ContainsIgnoreCase,
                SqlValue::Text(contains_pattern(&title.to_lowercase())),
            );
        }
        if let Some(location) = non_blank(filters.location.as_deref()) {
            plan.push(
                JobColumn::Location,
                PredicateOp::ContainsIgnoreCase,
                SqlValue::Text(contains_pattern(&location.to_lowercase())),
            );
        }
        if let Some(job_type) = job_type {
            plan.push(
                JobColumn::JobType,
                PredicateOp::Equals,
                SqlValue::Text(job_type.as_str().to_string()),
            );
        }
        if let Some(min) = filters.min_salary {
            plan.push(
                JobColumn::SalaryRange,
                PredicateOp::AtLeast,
                SqlValue::Int(monthly_to_annual(min)),
            );
        }
        if let Some(max) = filters.max_salary {
            plan.push(
                JobColumn::SalaryRange,
                PredicateOp::AtMost,
                SqlValue::Int(monthly_to_annual(max)),
            );
        }

        Ok(plan)
    }
}

fn monthly_to_annual(monthly: i64) -> i64 {
    monthly.saturating_mul(MONTHS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filters::{OrderClause, Predicate};

    fn text(s: &str) -> SqlValue {
        SqlValue::Text(s.to_string())
    }

    #[test]
    fn test_empty_filters_select_everything() {
        let plan = FilterQueryBuilder::build(&JobFilterRequest::default()).unwrap();
        assert!(plan.is_unfiltered());
        assert!(plan.params().is_empty());
        assert_eq!(plan.order(), OrderClause::NewestFirst);
    }

    #[test]
    fn test_title_and_salary_bounds() {
        let filters = JobFilterRequest {
            title_query: Some("dev".to_string()),
            min_salary: Some(20),
            max_salary: Some(80),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();

        assert_eq!(
            plan.predicates(),
            &[
                Predicate {
                    column: JobColumn::Title,
                    op: PredicateOp::ContainsIgnoreCase
                },
                Predicate {
                    column: JobColumn::SalaryRange,
                    op: PredicateOp::AtLeast
                },
                Predicate {
                    column: JobColumn::SalaryRange,
                    op: PredicateOp::AtMost
                },
            ]
        );
        assert_eq!(
            plan.params(),
            &[text("%dev%"), SqlValue::Int(240), SqlValue::Int(960)]
        );
    }

    #[test]
    fn test_predicate_order_with_all_filters() {
        let filters = JobFilterRequest {
            title_query: Some("engineer".to_string()),
            location: Some("Berlin".to_string()),
            job_type: Some("Full-time".to_string()),
            min_salary: Some(1),
            max_salary: Some(2),
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        let columns: Vec<JobColumn> = plan.predicates().iter().map(|p| p.column).collect();
        assert_eq!(
            columns,
            vec![
                JobColumn::Title,
                JobColumn::Location,
                JobColumn::JobType,
                JobColumn::SalaryRange,
                JobColumn::SalaryRange,
            ]
        );
        assert_eq!(plan.params()[1], text("%berlin%"));
        assert_eq!(plan.params()[2], text("Full-time"));
    }

    #[test]
    fn test_every_job_type_accepted() {
        for job_type in JobType::ALL {
            let filters = JobFilterRequest {
                job_type: Some(job_type.as_str().to_string()),
                ..Default::default()
            };
            let plan = FilterQueryBuilder::build(&filters).unwrap();
            assert_eq!(plan.predicates()[0].op, PredicateOp::Equals);
            assert_eq!(plan.params(), &[text(job_type.as_str())]);
        }
    }

    #[test]
    fn test_unknown_job_type_rejected() {
        let filters = JobFilterRequest {
            job_type: Some("Freelance".to_string()),
            ..Default::default()
        };
        assert_eq!(
            FilterQueryBuilder::build(&filters),
            Err(FilterError::InvalidEnumValue {
                field: "job_type",
                value: "Freelance".to_string()
            })
        );
    }

    #[test]
    fn test_unknown_job_type_reported_as_supplied() {
        let filters = JobFilterRequest {
            job_type: Some(" Freelance ".to_string()),
            ..Default::default()
        };
        assert_eq!(
            FilterQueryBuilder::build(&filters),
            Err(FilterError::InvalidEnumValue {
                field: "job_type",
                value: " Freelance ".to_string()
            })
        );
    }

    #[test]
    fn test_padded_job_type_accepted() {
        let filters = JobFilterRequest {
            job_type: Some(" Contract ".to_string()),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        assert_eq!(plan.params(), &[text("Contract")]);
    }

    #[test]
    fn test_text_patterns_are_unicode_lowercased() {
        let filters = JobFilterRequest {
            title_query: Some("ÉLECTRIQUE".to_string()),
            location: Some("ZÜRICH".to_string()),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        assert_eq!(plan.params(), &[text("%électrique%"), text("%zürich%")]);
    }

    #[test]
    fn test_job_type_is_case_sensitive() {
        let filters = JobFilterRequest {
            job_type: Some("full-time".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            FilterQueryBuilder::build(&filters),
            Err(FilterError::InvalidEnumValue { .. })
        ));
    }

    #[test]
    fn test_min_greater_than_max_rejected() {
        let filters = JobFilterRequest {
            min_salary: Some(50),
            max_salary: Some(30),
            ..Default::default()
        };
        assert_eq!(
            FilterQueryBuilder::build(&filters),
            Err(FilterError::InvalidRange { min: 50, max: 30 })
        );
    }

    #[test]
    fn test_equal_bounds_accepted() {
        let filters = JobFilterRequest {
            min_salary: Some(40),
            max_salary: Some(40),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        assert_eq!(plan.params(), &[SqlValue::Int(480), SqlValue::Int(480)]);
    }

    #[test]
    fn test_zero_bound_is_a_constraint() {
        let filters = JobFilterRequest {
            min_salary: Some(0),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        assert_eq!(plan.params(), &[SqlValue::Int(0)]);
    }

    #[test]
    fn test_negative_bounds_rejected() {
        let min = JobFilterRequest {
            min_salary: Some(-1),
            ..Default::default()
        };
        assert_eq!(
            FilterQueryBuilder::build(&min),
            Err(FilterError::NegativeValue { field: "minSalary" })
        );

        let max = JobFilterRequest {
            max_salary: Some(-5),
            ..Default::default()
        };
        assert_eq!(
            FilterQueryBuilder::build(&max),
            Err(FilterError::NegativeValue { field: "maxSalary" })
        );
    }

    #[test]
    fn test_validation_order() {
        // Job type is checked before salaries.
        let filters = JobFilterRequest {
            job_type: Some("Gig".to_string()),
            min_salary: Some(-1),
            max_salary: Some(-2),
            ..Default::default()
        };
        assert!(matches!(
            FilterQueryBuilder::build(&filters),
            Err(FilterError::InvalidEnumValue { .. })
        ));

        // Negative max wins over the range check.
        let filters = JobFilterRequest {
            min_salary: Some(10),
            max_salary: Some(-2),
            ..Default::default()
        };
        assert_eq!(
            FilterQueryBuilder::build(&filters),
            Err(FilterError::NegativeValue { field: "maxSalary" })
        );
    }

    #[test]
    fn test_blank_text_fields_are_unset() {
        let filters = JobFilterRequest {
            title_query: Some("   ".to_string()),
            location: Some(String::new()),
            job_type: Some(" ".to_string()),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        assert!(plan.is_unfiltered());
    }

    #[test]
    fn test_text_is_trimmed_and_escaped() {
        let filters = JobFilterRequest {
            title_query: Some("  100%_remote ".to_string()),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        assert_eq!(plan.params(), &[text("%100\\%\\_remote%")]);
    }

    #[test]
    fn test_salary_conversion_saturates() {
        let filters = JobFilterRequest {
            max_salary: Some(i64::MAX),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        assert_eq!(plan.params(), &[SqlValue::Int(i64::MAX)]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let filters = JobFilterRequest {
            title_query: Some("dev".to_string()),
            location: Some("Remote".to_string()),
            job_type: Some("Contract".to_string()),
            min_salary: Some(10),
            max_salary: Some(90),
        };
        let first = FilterQueryBuilder::build(&filters).unwrap();
        let second = FilterQueryBuilder::build(&filters).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_user_values_never_reach_sql_text() {
        let filters = JobFilterRequest {
            title_query: Some("'; DROP TABLE jobs; --".to_string()),
            ..Default::default()
        };
        let plan = FilterQueryBuilder::build(&filters).unwrap();
        let sql = plan.to_select_sql(crate::data::sql::Backend::Sqlite.dialect(), "id");
        assert!(!sql.contains("DROP"));
    }
}
