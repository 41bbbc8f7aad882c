//! Error types for serialization and configuration

use thiserror::Error;

/// Errors raised while reading from a parse node or writing to a serialization writer.
///
/// Model code never wraps these; whatever a node or writer returns is handed
/// back to the caller unchanged.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Unknown {type_name} value: {value}")]
    UnknownEnumValue {
        type_name: &'static str,
        value: String,
    },

    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    #[error("Invalid {kind} value {value:?}: {reason}")]
    InvalidFormat {
        kind: &'static str,
        value: String,
        reason: String,
    },

    #[error("Malformed payload: {reason}")]
    MalformedPayload { reason: String },

    #[error("Write failed: {reason}")]
    Write { reason: String },
}

impl SerializationError {
    pub fn unknown_enum_value(type_name: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownEnumValue {
            type_name,
            value: value.into(),
        }
    }

    pub fn type_mismatch(expected: &'static str, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected,
            found: found.into(),
        }
    }

    pub fn invalid_format(
        kind: &'static str,
        value: impl Into<String>,
        reason: impl ToString,
    ) -> Self {
        Self::InvalidFormat {
            kind,
            value: value.into(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(reason: impl ToString) -> Self {
        Self::MalformedPayload {
            reason: reason.to_string(),
        }
    }

    pub fn write(reason: impl ToString) -> Self {
        Self::Write {
            reason: reason.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Result type alias for serialization operations.
pub type SerializationResult<T> = Result<T, SerializationError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_enum_value_display_names_type_and_token() {
        let err = SerializationError::unknown_enum_value("MacOSSystemExtensionType", "bogus");
        assert_eq!(format!("{}", err), "Unknown MacOSSystemExtensionType value: bogus");
    }

    #[test]
    fn test_type_mismatch_display() {
        let err = SerializationError::type_mismatch("int32", "string");
        let msg = format!("{}", err);
        assert!(msg.contains("int32"));
        assert!(msg.contains("string"));
    }

    #[test]
    fn test_invalid_format_display() {
        let err = SerializationError::invalid_format("duration", "PXT", "unexpected designator");
        let msg = format!("{}", err);
        assert!(msg.contains("duration"));
        assert!(msg.contains("PXT"));
        assert!(msg.contains("unexpected designator"));
    }

    #[test]
    fn test_config_error_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "BETASDK_UNKNOWN_ENUM_POLICY".to_string(),
            value: "maybe".to_string(),
            reason: "expected reject or fallback".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("BETASDK_UNKNOWN_ENUM_POLICY"));
        assert!(msg.contains("maybe"));
    }
}
