use crate::config;
use crate::io::output::OutputFormat;
use crate::pricing::presets::quote_table;
use anyhow::Result;
use colored::*;

pub struct PresetsConfig {
    pub price: f64,
    pub tokens: Option<Vec<String>>,
    pub format: OutputFormat,
}

/// Resolve preset tokens against a base price without a snapshot, the quick
/// path for checking what a simulation form would prefill.
pub fn handle_presets(cfg: PresetsConfig) -> Result<()> {
    let tokens = cfg
        .tokens
        .unwrap_or_else(|| config::get_config().simulation.presets.clone());
    let quotes = quote_table(&tokens, cfg.price);

    match cfg.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&quotes)?);
        }
        OutputFormat::Markdown => {
            println!("| Preset | Target price |");
            println!("|--------|--------------|");
            for quote in &quotes {
                match quote.target {
                    Some(target) => println!("| {} | {:.2} |", quote.token, target),
                    None => println!("| {} | n/a |", quote.token),
                }
            }
        }
        OutputFormat::Terminal => {
            println!("Presets for base price {:.2}:", cfg.price);
            for quote in &quotes {
                match quote.target {
                    Some(target) => {
                        println!("  {} -> {}", quote.token, format!("{target:.2}").green())
                    }
                    None => println!("  {} -> {}", quote.token, "n/a".dimmed()),
                }
            }
        }
    }

    Ok(())
}
