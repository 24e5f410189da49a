use thiserror::Error;

use crate::policy::ConfigError;
use crate::template::TemplateError;

/// Errors that abort alarm generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlarmsError {
    #[error("Invalid alarm configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid template: {0}")]
    Template(#[from] TemplateError),
}

/// Result type alias for alarm generation.
pub type Result<T> = std::result::Result<T, AlarmsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alarms_error_display() {
        let error: AlarmsError = ConfigError::MissingField("period").into();
        assert_eq!(
            error.to_string(),
            "Invalid alarm configuration: Missing required field: period"
        );

        let error: AlarmsError = TemplateError::InvalidSection {
            path: "custom".to_string(),
        }
        .into();
        assert_eq!(
            error.to_string(),
            "Invalid template: Template section 'custom' must be a map"
        );
    }
}
