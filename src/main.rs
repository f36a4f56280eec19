use clap::Parser;
use unitconv::utils::logger;
use unitconv::{CliConfig, ReplEngine, StdConsole};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let console = StdConsole::new();
    let mut engine = ReplEngine::new(console);

    if let Err(e) = engine.run() {
        tracing::error!("❌ Session failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    Ok(())
}
