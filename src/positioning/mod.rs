//! Price-positioning chart data.
//!
//! Turns a market snapshot into the derived dataset a positioning chart
//! renders: one scored point per chartable plan, the median reference
//! price, aggregate stats, and preset quote tables for the user's plans.
//! Everything is recomputed from the snapshot on every call; callers own
//! any memoization.

use crate::core::metrics::{
    calculate_average_price, count_estimated, find_max_price, find_min_price,
};
use crate::core::{MarketSnapshot, MarketSummary, Plan, PlanPoint, PricingReport};
use crate::pricing::currency::symbol_for;
use crate::pricing::presets::plan_presets;
use crate::pricing::{estimate_value_score, median};
use chrono::Utc;
use im::Vector;

fn chartable(plans: &[Plan]) -> impl Iterator<Item = &Plan> {
    // Zero and negative prices never chart.
    plans.iter().filter(|p| p.price > 0.0)
}

fn to_point(
    plan: &Plan,
    position_index: usize,
    is_user: bool,
    competitor: Option<String>,
    currency_symbol: &str,
) -> PlanPoint {
    PlanPoint {
        name: plan.name.clone(),
        price: plan.price,
        is_user,
        competitor,
        currency_symbol: currency_symbol.to_string(),
        features_count: plan.features_count,
        units_count: plan.units_count,
        position_index,
        value_score: estimate_value_score(
            plan.features_count,
            plan.units_count,
            is_user,
            position_index,
        ),
    }
}

/// Derive chart points from a snapshot: user plans first, then competitor
/// plans in declaration order. Position indices restart at 0 for each peer
/// group and count only plans that survive the price filter.
pub fn build_plan_points(snapshot: &MarketSnapshot) -> Vec<PlanPoint> {
    let symbol = symbol_for(&snapshot.currency);
    let mut points = Vec::new();

    for (index, plan) in chartable(&snapshot.plans).enumerate() {
        points.push(to_point(plan, index, true, None, symbol));
    }

    let competitor_plans = snapshot
        .competitors
        .iter()
        .flat_map(|c| chartable(&c.plans).map(move |p| (c.name.clone(), p)));
    for (index, (competitor, plan)) in competitor_plans.enumerate() {
        points.push(to_point(plan, index, false, Some(competitor), symbol));
    }

    points
}

fn summarize(points: &[PlanPoint], excluded_count: usize) -> MarketSummary {
    MarketSummary {
        total_points: points.len(),
        user_plan_count: points.iter().filter(|p| p.is_user).count(),
        competitor_plan_count: points.iter().filter(|p| !p.is_user).count(),
        excluded_count,
        min_price: find_min_price(points),
        max_price: find_max_price(points),
        average_price: calculate_average_price(points),
        estimated_count: count_estimated(points),
    }
}

fn total_plan_count(snapshot: &MarketSnapshot) -> usize {
    snapshot.plans.len()
        + snapshot
            .competitors
            .iter()
            .map(|c| c.plans.len())
            .sum::<usize>()
}

/// Assemble the full derived dataset for one snapshot.
pub fn build_report(snapshot: &MarketSnapshot, preset_tokens: &[String]) -> PricingReport {
    let points = build_plan_points(snapshot);

    let excluded_count = total_plan_count(snapshot) - points.len();
    if excluded_count > 0 {
        log::warn!("dropped {excluded_count} plan(s) without a positive price");
    }
    if points.is_empty() {
        log::warn!("snapshot yields no chartable plans");
    }

    let prices: Vec<f64> = points.iter().map(|p| p.price).collect();
    let summary = summarize(&points, excluded_count);
    let presets = chartable(&snapshot.plans)
        .map(|plan| plan_presets(plan, preset_tokens))
        .collect();

    PricingReport {
        company: snapshot.company.clone(),
        generated_at: Utc::now(),
        currency: snapshot.currency.clone(),
        currency_symbol: symbol_for(&snapshot.currency).to_string(),
        median_price: median(&prices),
        points: points.into_iter().collect::<Vector<_>>(),
        summary,
        presets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Competitor, MarketSnapshot, Plan};

    fn plan(name: &str, price: f64, features: u32, units: u32) -> Plan {
        Plan {
            name: name.to_string(),
            price,
            features_count: features,
            units_count: units,
        }
    }

    fn snapshot(plans: Vec<Plan>, competitors: Vec<Competitor>) -> MarketSnapshot {
        MarketSnapshot {
            company: Some("Acme".to_string()),
            currency: "USD".to_string(),
            plans,
            competitors,
        }
    }

    #[test]
    fn test_zero_price_plans_never_chart() {
        let snap = snapshot(
            vec![plan("Free", 0.0, 4, 0), plan("Pro", 29.0, 6, 1)],
            vec![],
        );

        let points = build_plan_points(&snap);
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].name, "Pro");
    }

    #[test]
    fn test_position_indices_skip_filtered_plans() {
        let snap = snapshot(
            vec![
                plan("Free", 0.0, 0, 0),
                plan("Basic", 10.0, 0, 0),
                plan("Pro", 20.0, 0, 0),
            ],
            vec![],
        );

        let points = build_plan_points(&snap);
        assert_eq!(points[0].position_index, 0, "Dropped plan leaves no hole");
        assert_eq!(points[1].position_index, 1);
    }

    #[test]
    fn test_peer_groups_enumerate_separately() {
        let snap = snapshot(
            vec![plan("Basic", 10.0, 0, 0), plan("Pro", 20.0, 0, 0)],
            vec![
                Competitor {
                    name: "Rival".to_string(),
                    plans: vec![plan("R1", 15.0, 0, 0)],
                },
                Competitor {
                    name: "Other".to_string(),
                    plans: vec![plan("O1", 25.0, 0, 0), plan("O2", 35.0, 0, 0)],
                },
            ],
        );

        let points = build_plan_points(&snap);
        let user: Vec<usize> = points
            .iter()
            .filter(|p| p.is_user)
            .map(|p| p.position_index)
            .collect();
        let rivals: Vec<usize> = points
            .iter()
            .filter(|p| !p.is_user)
            .map(|p| p.position_index)
            .collect();

        assert_eq!(user, vec![0, 1]);
        assert_eq!(
            rivals,
            vec![0, 1, 2],
            "Competitor plans share one counter across competitors"
        );
        assert_eq!(points[3].competitor.as_deref(), Some("Other"));
    }

    #[test]
    fn test_report_end_to_end() {
        let snap = snapshot(
            vec![plan("Yours", 100.0, 2, 0)],
            vec![
                Competitor {
                    name: "Rival".to_string(),
                    plans: vec![plan("Cheap", 80.0, 0, 0)],
                },
                Competitor {
                    name: "Other".to_string(),
                    plans: vec![plan("Premium", 120.0, 1, 0)],
                },
            ],
        );

        let tokens: Vec<String> = vec!["+10%".into(), "-5%".into()];
        let report = build_report(&snap, &tokens);

        assert_eq!(report.median_price, Some(100.0));
        assert_eq!(report.summary.total_points, 3);
        assert_eq!(report.summary.user_plan_count, 1);
        assert_eq!(report.summary.competitor_plan_count, 2);
        assert_eq!(report.summary.excluded_count, 0);
        assert_eq!(report.summary.estimated_count, 1);

        let yours = &report.points[0];
        assert_eq!(yours.value_score.score, 36.0, "2 features score 2*8 + 20");
        assert!(!yours.value_score.is_estimated);

        assert_eq!(report.presets.len(), 1, "Presets cover user plans only");
        assert_eq!(report.presets[0].quotes[0].target, Some(110.0));
        assert_eq!(report.presets[0].quotes[1].target, Some(95.0));
    }

    #[test]
    fn test_empty_snapshot_is_a_report_not_an_error() {
        let report = build_report(&snapshot(vec![], vec![]), &[]);

        assert_eq!(report.median_price, None);
        assert!(report.points.is_empty());
        assert_eq!(report.summary.average_price, None);
        assert_eq!(report.summary.min_price, None);
    }

    #[test]
    fn test_currency_symbol_flows_from_snapshot() {
        let mut snap = snapshot(vec![plan("Basic", 10.0, 1, 0)], vec![]);
        snap.currency = "GBP".to_string();

        let report = build_report(&snap, &[]);
        assert_eq!(report.currency_symbol, "£");
        assert_eq!(report.points[0].currency_symbol, "£");
    }
}
