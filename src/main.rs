use clap::Parser;
use vroom::utils::logger;
use vroom::{run_cli, CliConfig, OutputFormat};

fn main() {
    let config = CliConfig::parse();

    match config.output {
        OutputFormat::Json => logger::init_json_logger(config.verbose),
        OutputFormat::Text => logger::init_cli_logger(config.verbose),
    }

    tracing::info!("Starting vroom");
    tracing::debug!("CLI config: {:?}", config);

    match run_cli(&config) {
        Ok(rendered) => println!("{}", rendered),
        Err(e) => {
            tracing::error!("❌ vroom failed: {} (Severity: {:?})", e, e.severity());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    }
}
