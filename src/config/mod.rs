pub mod toml_config;

#[cfg(feature = "cli")]
use crate::domain::model::{GreetingRequest, Language, DEFAULT_NAME};
#[cfg(feature = "cli")]
use clap::{ArgAction, Parser};
#[cfg(feature = "cli")]
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
const USAGE_EXAMPLES: &str = "\
Examples:
  saludar Juan
  saludar María --language en
  saludar Pedro --language fr --include-time
  saludar Luigi --language it
  saludar --stats \"Hola Mundo\"";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "saludar")]
#[command(version, about = "A small command-line greeter")]
#[command(disable_version_flag = true, after_help = USAGE_EXAMPLES)]
pub struct CliConfig {
    /// Name to greet [default: World]
    pub name: Option<String>,

    /// Greeting language [default: es]
    #[arg(short = 'i', long, value_enum)]
    pub language: Option<Language>,

    /// Append the current local time
    #[arg(long)]
    pub include_time: bool,

    /// Print statistics about the generated greeting
    #[arg(short, long)]
    pub stats: bool,

    /// Print statistics as JSON (with --stats)
    #[arg(long)]
    pub json: bool,

    /// TOML file with default values
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long, action = ArgAction::Version)]
    pub version: Option<bool>,
}

/// What to print after the greeting itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputOptions {
    pub stats: bool,
    pub json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 合併命令列參數與設定檔：命令列優先，其次設定檔，最後預設值
    pub fn resolve(&self, file: Option<&TomlConfig>) -> (GreetingRequest, OutputOptions) {
        let name = self
            .name
            .clone()
            .or_else(|| file.and_then(|f| f.name().map(str::to_string)))
            .unwrap_or_else(|| DEFAULT_NAME.to_string());

        let language = self
            .language
            .or_else(|| file.and_then(TomlConfig::language))
            .unwrap_or_default();

        let include_time = self.include_time || file.is_some_and(TomlConfig::include_time);

        let request = GreetingRequest {
            name,
            language,
            include_time,
        };
        let output = OutputOptions {
            stats: self.stats || file.is_some_and(TomlConfig::stats_enabled),
            json: self.json || file.is_some_and(TomlConfig::json_enabled),
        };

        (request, output)
    }
}
