use thiserror::Error;

/// Errors that can occur when building an alarm policy from raw configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Alarm configuration must be a map")]
    NotAnObject,
    #[error("Malformed alarm configuration: {0}")]
    Malformed(String),
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Invalid field '{field}': expected {expected}")]
    InvalidField {
        field: &'static str,
        expected: &'static str,
    },
    #[error("Filter must list at least one resource name")]
    EmptyFilter,
    #[error("Flat and per-direction thresholds cannot be mixed")]
    AmbiguousShape,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::MissingField("evaluationPeriods").to_string(),
            "Missing required field: evaluationPeriods"
        );
        assert_eq!(
            ConfigError::InvalidField {
                field: "period",
                expected: "a non-negative integer",
            }
            .to_string(),
            "Invalid field 'period': expected a non-negative integer"
        );
        assert_eq!(
            ConfigError::EmptyFilter.to_string(),
            "Filter must list at least one resource name"
        );
    }
}
