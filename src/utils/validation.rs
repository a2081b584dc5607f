use crate::domain::model::Language;
use crate::utils::error::{Result, SaludadorError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_language_code(field_name: &str, code: &str) -> Result<Language> {
    code.parse::<Language>()
        .map_err(|_| SaludadorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: code.to_string(),
            reason: format!(
                "Supported languages: {}",
                Language::ALL
                    .iter()
                    .map(|lang| lang.code())
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        })
}

pub fn validate_no_control_chars(field_name: &str, value: &str) -> Result<()> {
    if value.chars().any(|c| c.is_control()) {
        return Err(SaludadorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.escape_debug().to_string(),
            reason: "Value cannot contain control characters".to_string(),
        });
    }
    Ok(())
}
