pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, OutputOptions};
pub use config::toml_config::TomlConfig;

pub use core::greeter::{custom_greet, custom_greet_with_clock, greet, simple_greet};
pub use core::stats::analyze;
pub use domain::model::{GreetingRequest, GreetingStats, Language, DEFAULT_NAME};
pub use domain::ports::{Clock, SystemClock};
pub use utils::error::{Result, SaludadorError};
