use crate::domain::model::Language;
use crate::utils::error::{Result, SaludadorError};
use crate::utils::validation::{validate_language_code, validate_no_control_chars, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Defaults file passed with `--config`. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    #[serde(default)]
    pub greeting: GreetingSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GreetingSection {
    pub name: Option<String>,
    pub language: Option<String>,
    pub include_time: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    pub stats: Option<bool>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Reading config file: {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| SaludadorError::ConfigParseError {
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${GREETING_NAME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| {
                tracing::warn!("Environment variable {} is not set", var_name);
                format!("${{{}}}", var_name)
            })
        })
        .into_owned()
    }

    /// Parsed language; `None` when the file leaves it unset or it is invalid.
    pub fn language(&self) -> Option<Language> {
        self.greeting
            .language
            .as_deref()
            .and_then(|code| code.parse().ok())
    }

    pub fn name(&self) -> Option<&str> {
        self.greeting.name.as_deref()
    }

    pub fn include_time(&self) -> bool {
        self.greeting.include_time.unwrap_or(false)
    }

    pub fn stats_enabled(&self) -> bool {
        self.output.stats.unwrap_or(false)
    }

    pub fn json_enabled(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(code) = &self.greeting.language {
            validate_language_code("greeting.language", code)?;
        }
        if let Some(name) = &self.greeting.name {
            validate_no_control_chars("greeting.name", name)?;
        }
        Ok(())
    }
}
