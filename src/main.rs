use clap::Parser;
use saludador::utils::{logger, validation::Validate};
use saludador::{analyze, greet, CliConfig, SystemClock, TomlConfig};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);
    tracing::debug!("CLI config: {:?}", config);

    // 載入設定檔（若有指定）
    let file_config = match config.config.as_deref() {
        Some(path) => match TomlConfig::from_file(path).and_then(|c| c.validate().map(|_| c)) {
            Ok(file_config) => Some(file_config),
            Err(e) => {
                tracing::error!(
                    "Failed to load config file '{}': {} (Category: {:?})",
                    path,
                    e,
                    e.category()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let (request, output) = config.resolve(file_config.as_ref());
    tracing::debug!("Greeting request: {:?}", request);

    let message = greet(&request, &SystemClock);
    println!("{}", message);

    if output.stats {
        let stats = analyze(&message);
        if output.json {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        } else {
            println!();
            println!("{}", stats);
        }
    }

    Ok(())
}
