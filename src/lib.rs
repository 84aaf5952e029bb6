// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod errors;
pub mod ingest;
pub mod io;
pub mod positioning;
pub mod pricing;

// Re-export commonly used types
pub use crate::core::{
    Competitor, MarketSnapshot, MarketSummary, Plan, PlanPoint, PlanPresets, PresetQuote,
    PricingReport, ValueScore,
};

pub use crate::core::metrics::{
    calculate_average_price, count_estimated, find_max_price, find_min_price,
};

pub use crate::pricing::currency::symbol_for;
pub use crate::pricing::presets::{quote_table, resolve_preset, DEFAULT_PRESETS};
pub use crate::pricing::{estimate_value_score, median};

pub use crate::ingest::{load_snapshot, parse_snapshot};
pub use crate::positioning::{build_plan_points, build_report};

pub use crate::io::output::{create_writer, OutputFormat, OutputWriter};

pub use crate::errors::{ConfigError, SnapshotError};
