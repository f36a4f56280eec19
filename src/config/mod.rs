pub mod cli;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "unitconv")]
#[command(about = "An interactive converter for distance, weight and volume units")]
pub struct CliConfig {
    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
