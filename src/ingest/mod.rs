//! Snapshot loading and normalization.
//!
//! Raw snapshot JSON tolerates the field-name variants upstream exporters
//! produce: `price` vs `price_amount`, `name` vs `plan_name`, feature and
//! unit lists given either as arrays or as bare counts. All of that is
//! resolved here, once, into canonical records; nothing downstream carries
//! fallback chains.

use crate::core::{Competitor, MarketSnapshot, Plan};
use crate::errors::SnapshotError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Deserialize)]
struct RawSnapshot {
    company: Option<String>,
    currency: Option<String>,
    #[serde(default)]
    plans: Vec<RawPlan>,
    #[serde(default)]
    competitors: Vec<RawCompetitor>,
}

#[derive(Debug, Deserialize)]
struct RawPlan {
    name: Option<String>,
    plan_name: Option<String>,
    price: Option<f64>,
    price_amount: Option<f64>,
    features: Option<CountOrList>,
    features_count: Option<u32>,
    units: Option<CountOrList>,
    units_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct RawCompetitor {
    #[serde(alias = "company_name")]
    name: Option<String>,
    #[serde(default)]
    plans: Vec<RawPlan>,
}

/// Feature/unit data arrives either as the list itself or as a count.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountOrList {
    Count(u32),
    List(Vec<serde_json::Value>),
}

impl CountOrList {
    fn count(&self) -> u32 {
        match self {
            CountOrList::Count(n) => *n,
            CountOrList::List(items) => items.len() as u32,
        }
    }
}

impl RawPlan {
    fn normalize(self, ordinal: usize) -> Plan {
        Plan {
            name: self
                .name
                .or(self.plan_name)
                .unwrap_or_else(|| format!("Plan {}", ordinal + 1)),
            price: self.price.or(self.price_amount).unwrap_or(0.0),
            features_count: self
                .features
                .map(|f| f.count())
                .or(self.features_count)
                .unwrap_or(0),
            units_count: self
                .units
                .map(|u| u.count())
                .or(self.units_count)
                .unwrap_or(0),
        }
    }
}

fn normalize_plans(raw: Vec<RawPlan>) -> Vec<Plan> {
    raw.into_iter()
        .enumerate()
        .map(|(i, plan)| plan.normalize(i))
        .collect()
}

fn normalize(raw: RawSnapshot) -> MarketSnapshot {
    MarketSnapshot {
        company: raw.company,
        currency: raw
            .currency
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        plans: normalize_plans(raw.plans),
        competitors: raw
            .competitors
            .into_iter()
            .enumerate()
            .map(|(i, competitor)| Competitor {
                name: competitor
                    .name
                    .unwrap_or_else(|| format!("Competitor {}", i + 1)),
                plans: normalize_plans(competitor.plans),
            })
            .collect(),
    }
}

/// Parse snapshot JSON into canonical form.
pub fn parse_snapshot(json: &str) -> Result<MarketSnapshot, serde_json::Error> {
    let raw: RawSnapshot = serde_json::from_str(json)?;
    Ok(normalize(raw))
}

/// Load and normalize a snapshot file.
pub fn load_snapshot(path: &Path) -> Result<MarketSnapshot, SnapshotError> {
    let raw = fs::read_to_string(path).map_err(|source| SnapshotError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_snapshot(&raw).map_err(|source| SnapshotError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
