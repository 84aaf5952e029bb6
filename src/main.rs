use anyhow::Result;
use clap::Parser;
use pricemap::cli::{Cli, Commands};
use pricemap::commands::{self, AnalyzeConfig, PresetsConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            input,
            format,
            output,
            top,
            config,
        } => commands::handle_analyze(AnalyzeConfig {
            input,
            format,
            output,
            top,
            config,
        }),
        Commands::Presets {
            price,
            tokens,
            format,
        } => commands::handle_presets(PresetsConfig {
            price,
            tokens,
            format,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}
