use crate::config;
use crate::ingest;
use crate::io::output::{create_writer, OutputFormat};
use crate::positioning;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

pub struct AnalyzeConfig {
    pub input: PathBuf,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub top: Option<usize>,
    pub config: Option<PathBuf>,
}

pub fn handle_analyze(cfg: AnalyzeConfig) -> Result<()> {
    let settings = match &cfg.config {
        Some(path) => config::load_config(path)?,
        None => config::get_config().clone(),
    };

    let snapshot = ingest::load_snapshot(&cfg.input)?;
    log::info!(
        "loaded snapshot: {} user plan(s), {} competitor(s)",
        snapshot.plans.len(),
        snapshot.competitors.len()
    );

    let report = positioning::build_report(&snapshot, &settings.simulation.presets);

    let format = cfg.format.unwrap_or(settings.output.default_format);
    let destination: Box<dyn Write> = match &cfg.output {
        Some(path) => Box::new(
            File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?,
        ),
        None => Box::new(std::io::stdout()),
    };

    create_writer(format, destination, cfg.top).write_report(&report)
}
