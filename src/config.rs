use crate::errors::ConfigError;
use crate::io::output::OutputFormat;
use crate::pricing::presets::DEFAULT_PRESETS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

pub const CONFIG_FILE: &str = ".pricemap.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PricemapConfig {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Format used when the CLI is not given an explicit --format
    #[serde(default = "default_format")]
    pub default_format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Preset tokens resolved against each user plan's current price
    #[serde(default = "default_presets")]
    pub presets: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            presets: default_presets(),
        }
    }
}

fn default_format() -> OutputFormat {
    OutputFormat::Terminal
}

fn default_presets() -> Vec<String> {
    DEFAULT_PRESETS.iter().map(|s| s.to_string()).collect()
}

pub fn load_config(path: &Path) -> Result<PricemapConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

static CONFIG: OnceLock<PricemapConfig> = OnceLock::new();

/// Process-wide configuration, loaded once from `.pricemap.toml` in the
/// working directory. A missing file means defaults; a broken file is
/// reported and then ignored.
pub fn get_config() -> &'static PricemapConfig {
    CONFIG.get_or_init(|| {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return PricemapConfig::default();
        }
        match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("{err}; falling back to defaults");
                PricemapConfig::default()
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_sections_missing() {
        let config: PricemapConfig = toml::from_str("").unwrap();

        assert_eq!(config.output.default_format, OutputFormat::Terminal);
        assert_eq!(config.simulation.presets, default_presets());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: PricemapConfig = toml::from_str(
            r#"
            [simulation]
            presets = ["+50%"]
            "#,
        )
        .unwrap();

        assert_eq!(config.simulation.presets, vec!["+50%".to_string()]);
        assert_eq!(config.output.default_format, OutputFormat::Terminal);
    }

    #[test]
    fn test_format_parses_from_toml() {
        let config: PricemapConfig = toml::from_str(
            r#"
            [output]
            default_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.output.default_format, OutputFormat::Json);
    }
}
