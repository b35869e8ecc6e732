//! Error types for the GuardDuty model layer and the gdmodel CLI

use thiserror::Error;

/// Result type alias for model and catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type
#[derive(Debug, Error)]
pub enum Error {
    /// A value was rejected by an enumeration lookup or a map builder
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown shape: {0}. Run `gdmodel shape list` to see available shapes.")]
    UnknownShape(String),

    #[error("Unknown enumeration: {0}. Run `gdmodel enum list` to see available enumerations.")]
    UnknownEnum(String),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = Error::InvalidArgument("'BOGUS' is not a valid FilterAction".to_string());
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid argument"));
        assert!(msg.contains("BOGUS"));
    }

    #[test]
    fn test_unknown_shape_points_at_listing() {
        let err = Error::UnknownShape("CreateWidgetResult".to_string());
        let msg = err.to_string();
        assert!(msg.contains("CreateWidgetResult"));
        assert!(msg.contains("gdmodel shape list"));
    }

    #[test]
    fn test_unknown_enum_points_at_listing() {
        let err = Error::UnknownEnum("WidgetFormat".to_string());
        assert!(err.to_string().contains("gdmodel enum list"));
    }

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound("/tmp/missing.yaml".to_string());
        assert!(err.to_string().contains("/tmp/missing.yaml"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::ParseError("unexpected key".to_string());
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_config_error_save() {
        let err = ConfigError::SaveError("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn test_error_from_config_error() {
        let cfg_err = ConfigError::Invalid("bad format".to_string());
        let err: Error = cfg_err.into();

        match err {
            Error::Config(ConfigError::Invalid(msg)) => assert_eq!(msg, "bad format"),
            _ => panic!("Expected Error::Config(ConfigError::Invalid)"),
        }
    }

    #[test]
    fn test_error_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
