use crate::io::output::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pricemap")]
#[command(about = "Pricing position and plan value analyzer", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Analyze a market snapshot and emit derived pricing metrics
    Analyze {
        /// Snapshot JSON file to analyze
        input: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// List only the top N points by value score
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,

        /// Configuration file (defaults to .pricemap.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Resolve percentage preset tokens against a base price
    Presets {
        /// Base price the presets apply to
        #[arg(long)]
        price: f64,

        /// Preset tokens to resolve (defaults to the configured set)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        tokens: Option<Vec<String>>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
