use thiserror::Error;

#[derive(Error, Debug)]
pub enum SaludadorError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Configuration,
}

impl SaludadorError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SaludadorError::IoError(_) => ErrorCategory::Io,
            SaludadorError::ConfigParseError { .. }
            | SaludadorError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SaludadorError::IoError(e) => format!("Could not read the config file: {}", e),
            SaludadorError::ConfigParseError { message } => {
                format!("The config file is not valid TOML: {}", message)
            }
            SaludadorError::InvalidConfigValueError { field, value, .. } => {
                format!("Config field '{}' has an invalid value '{}'", field, value)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SaludadorError::IoError(_) => {
                "Check that the path passed to --config exists and is readable".to_string()
            }
            SaludadorError::ConfigParseError { .. } => {
                "Fix the TOML syntax; every key under [greeting] and [output] is optional"
                    .to_string()
            }
            SaludadorError::InvalidConfigValueError { reason, .. } => reason.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SaludadorError>;
