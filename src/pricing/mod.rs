//! Derived pricing metrics.
//!
//! Every operation here is a pure function over already-loaded plan data:
//! no I/O, no caching, no error paths. Invalid input degrades to sentinel
//! values rather than panics, so callers can feed these straight into chart
//! and form rendering.

pub mod currency;
pub mod presets;

use crate::core::ValueScore;

/// Points per real feature when feature/unit data exists.
const FEATURE_WEIGHT: f64 = 8.0;
/// Points per real unit dimension when feature/unit data exists.
const UNIT_WEIGHT: f64 = 12.0;
/// Floor added on top of measured signal.
const SIGNAL_FLOOR: f64 = 20.0;

/// Baseline for plans with no feature/unit signal.
const HEURISTIC_BASE: f64 = 40.0;
/// Spread step between consecutive unscored peers.
const HEURISTIC_STEP: f64 = 10.0;
/// Unscored peers cycle through this many distinct baselines.
const HEURISTIC_CYCLE: usize = 5;
/// Extra points an unscored user-owned plan gets over competitors.
const USER_PLAN_BONUS: f64 = 10.0;

const MAX_SCORE: f64 = 100.0;

/// Estimate a plan's 0-100 value score.
///
/// Plans with real feature/unit counts are scored from those counts alone.
/// Plans without any signal get a synthetic score spread by their
/// `position_index` among peers, so chart points do not all stack at one
/// value; such scores are flagged `is_estimated`.
///
/// Plans without a positive price are excluded before scoring, so price is
/// not an input here.
pub fn estimate_value_score(
    features_count: u32,
    units_count: u32,
    is_user_plan: bool,
    position_index: usize,
) -> ValueScore {
    if features_count > 0 || units_count > 0 {
        let raw = f64::from(features_count) * FEATURE_WEIGHT
            + f64::from(units_count) * UNIT_WEIGHT
            + SIGNAL_FLOOR;
        ValueScore {
            score: raw.min(MAX_SCORE),
            is_estimated: false,
        }
    } else {
        let base = HEURISTIC_BASE + (position_index % HEURISTIC_CYCLE) as f64 * HEURISTIC_STEP;
        let bonus = if is_user_plan { USER_PLAN_BONUS } else { 0.0 };
        ValueScore {
            score: (base + bonus).min(MAX_SCORE),
            is_estimated: true,
        }
    }
}

/// Median of a price list, for the market-center reference line.
///
/// Input order does not matter. Empty input means no reference line.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 1 {
        Some(sorted[mid])
    } else {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    }
}
