pub mod metrics;

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// A subscription plan in canonical form. Field-name variants in raw
/// snapshot JSON are resolved by the ingest layer before this type exists.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub price: f64,
    pub features_count: u32,
    pub units_count: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Competitor {
    pub name: String,
    pub plans: Vec<Plan>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub company: Option<String>,
    pub currency: String,
    pub plans: Vec<Plan>,
    pub competitors: Vec<Competitor>,
}

/// A plan's 0-100 value score, used for chart-axis placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueScore {
    pub score: f64,
    /// True when the score comes from the positional heuristic rather than
    /// real feature/unit counts.
    pub is_estimated: bool,
}

/// One point on the price-positioning chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanPoint {
    pub name: String,
    pub price: f64,
    pub is_user: bool,
    /// Owning competitor for non-user points.
    pub competitor: Option<String>,
    pub currency_symbol: String,
    pub features_count: u32,
    pub units_count: u32,
    /// Enumeration order within the point's peer group (user plans and
    /// competitor plans are counted separately, each from 0).
    pub position_index: usize,
    pub value_score: ValueScore,
}

/// A resolved percentage preset. `target` is `None` when the token is
/// malformed or the base price leaves nothing to resolve against.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PresetQuote {
    pub token: String,
    pub target: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlanPresets {
    pub plan: String,
    pub current_price: f64,
    pub quotes: Vec<PresetQuote>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MarketSummary {
    pub total_points: usize,
    pub user_plan_count: usize,
    pub competitor_plan_count: usize,
    /// Plans dropped for lacking a positive price.
    pub excluded_count: usize,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub average_price: Option<f64>,
    /// Points whose value score is a positional estimate.
    pub estimated_count: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PricingReport {
    pub company: Option<String>,
    pub generated_at: DateTime<Utc>,
    pub currency: String,
    pub currency_symbol: String,
    /// Market-center reference line; `None` when no plan charted.
    pub median_price: Option<f64>,
    pub points: Vector<PlanPoint>,
    pub summary: MarketSummary,
    pub presets: Vec<PlanPresets>,
}
