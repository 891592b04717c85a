use thiserror::Error;

#[derive(Error, Debug)]
pub enum SolidError {
    /// A placeholder capability on an abstract form was invoked directly.
    #[error("{type_name}::{capability} is not implemented")]
    NotImplemented {
        type_name: &'static str,
        capability: &'static str,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unknown principle: {value}")]
    UnknownPrincipleError { value: String },

    #[error("Unknown variant: {value}")]
    UnknownVariantError { value: String },
}

impl SolidError {
    pub fn not_implemented(type_name: &'static str, capability: &'static str) -> Self {
        Self::NotImplemented {
            type_name,
            capability,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SolidError::NotImplemented {
                type_name,
                capability,
            } => format!("'{}' cannot {}: capability not implemented", type_name, capability),
            SolidError::IoError(e) => format!("Could not read or write a file: {}", e),
            SolidError::SerializationError(e) => format!("Could not serialize output: {}", e),
            SolidError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            SolidError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}' ({})", value, field, reason),
            SolidError::UnknownPrincipleError { value } => {
                format!("'{}' is not one of srp, ocp, lsp, isp, dip", value)
            }
            SolidError::UnknownVariantError { value } => {
                format!("'{}' is not one of violation, compliant", value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SolidError::NotImplemented { .. } => {
                "Call the capability on a concrete variant instead of the abstract form"
            }
            SolidError::IoError(_) => "Check that the file exists and is readable",
            SolidError::SerializationError(_) => "Try the text output format",
            SolidError::ConfigValidationError { .. }
            | SolidError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and try again"
            }
            SolidError::UnknownPrincipleError { .. } | SolidError::UnknownVariantError { .. } => {
                "Run with --list to see the available principles"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SolidError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_implemented_message() {
        let err = SolidError::not_implemented("Shape", "draw");
        assert_eq!(err.to_string(), "Shape::draw is not implemented");
        assert!(err.user_friendly_message().contains("capability not implemented"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SolidError = io.into();
        assert!(matches!(err, SolidError::IoError(_)));
        assert_eq!(err.recovery_suggestion(), "Check that the file exists and is readable");
    }
}
