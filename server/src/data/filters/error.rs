//! Filter validation errors

use thiserror::Error;

/// A filter parameter that failed validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("Invalid value '{value}' for {field}: expected one of Full-time, Part-time, Contract, Internship")]
    InvalidEnumValue { field: &'static str, value: String },

    #[error("{field} cannot be negative")]
    NegativeValue { field: &'static str },

    #[error("minSalary ({min}) cannot be greater than maxSalary ({max})")]
    InvalidRange { min: i64, max: i64 },
}

impl FilterError {
    /// Machine-readable error code returned to API clients
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEnumValue { .. } => "INVALID_ENUM_VALUE",
            Self::NegativeValue { .. } => "NEGATIVE_VALUE",
            Self::InvalidRange { .. } => "INVALID_RANGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        let err = FilterError::InvalidEnumValue {
            field: "job_type",
            value: "Freelance".to_string(),
        };
        assert_eq!(err.code(), "INVALID_ENUM_VALUE");
        assert_eq!(
            FilterError::NegativeValue { field: "minSalary" }.code(),
            "NEGATIVE_VALUE"
        );
        assert_eq!(
            FilterError::InvalidRange { min: 50, max: 30 }.code(),
            "INVALID_RANGE"
        );
    }

    #[test]
    fn test_messages_name_the_field() {
        let err = FilterError::InvalidEnumValue {
            field: "job_type",
            value: "Freelance".to_string(),
        };
        assert!(err.to_string().contains("job_type"));
        assert!(err.to_string().contains("Freelance"));
        assert_eq!(
            FilterError::NegativeValue { field: "maxSalary" }.to_string(),
            "maxSalary cannot be negative"
        );
        assert_eq!(
            FilterError::InvalidRange { min: 50, max: 30 }.to_string(),
            "minSalary (50) cannot be greater than maxSalary (30)"
        );
    }
}
