//! Percentage price presets.
//!
//! Simulation forms offer quick-select deltas like `+10%` against a plan's
//! current price. A token that does not match the grammar, or a base price
//! there is nothing to resolve against, yields a disabled preset (`None`),
//! never an error.

use crate::core::{Plan, PlanPresets, PresetQuote};
use regex::Regex;
use std::sync::OnceLock;

/// Default quick-select deltas offered by simulation forms.
pub const DEFAULT_PRESETS: [&str; 6] = ["-20%", "-10%", "-5%", "+5%", "+10%", "+20%"];

fn preset_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^([+-])(\d+)%$").unwrap())
}

fn parse_token(token: &str) -> Option<(f64, f64)> {
    let caps = preset_pattern().captures(token)?;
    let sign = if &caps[1] == "+" { 1.0 } else { -1.0 };
    let pct: f64 = caps[2].parse().ok()?;
    Some((sign, pct))
}

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Resolve a preset token against a base price, rounded to cents.
///
/// Returns `None` for tokens outside the `[+-]<digits>%` grammar and for
/// bases without a positive finite price.
pub fn resolve_preset(token: &str, current_price: f64) -> Option<f64> {
    if !current_price.is_finite() || current_price <= 0.0 {
        return None;
    }

    let (sign, pct) = parse_token(token)?;
    Some(round_to_cents(current_price * (1.0 + sign * pct / 100.0)))
}

/// Resolve a whole token list against one base price, preserving order.
/// Malformed tokens stay in the table as disabled rows.
pub fn quote_table(tokens: &[String], current_price: f64) -> Vec<PresetQuote> {
    tokens
        .iter()
        .map(|token| {
            if parse_token(token).is_none() {
                log::warn!("ignoring malformed preset token {token:?}");
            }
            PresetQuote {
                token: token.clone(),
                target: resolve_preset(token, current_price),
            }
        })
        .collect()
}

pub fn plan_presets(plan: &Plan, tokens: &[String]) -> PlanPresets {
    PlanPresets {
        plan: plan.name.clone(),
        current_price: plan.price,
        quotes: quote_table(tokens, plan.price),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_positive_delta() {
        assert_eq!(resolve_preset("+10%", 100.0), Some(110.0));
    }

    #[test]
    fn test_resolve_negative_delta() {
        assert_eq!(resolve_preset("-25%", 80.0), Some(60.0));
    }

    #[test]
    fn test_malformed_token_disables_preset() {
        assert_eq!(resolve_preset("abc", 100.0), None);
        assert_eq!(resolve_preset("10%", 100.0), None, "Sign is mandatory");
        assert_eq!(resolve_preset("+10", 100.0), None, "Percent sign is mandatory");
        assert_eq!(resolve_preset("+10.5%", 100.0), None, "Only whole percentages");
        assert_eq!(resolve_preset("", 100.0), None);
    }

    #[test]
    fn test_zero_base_disables_preset() {
        assert_eq!(resolve_preset("+10%", 0.0), None);
        assert_eq!(resolve_preset("+10%", -5.0), None);
        assert_eq!(resolve_preset("+10%", f64::NAN), None);
    }

    #[test]
    fn test_rounds_to_cents() {
        assert_eq!(resolve_preset("+15%", 33.0), Some(37.95));
        assert_eq!(resolve_preset("+7%", 10.0), Some(10.7));
        assert_eq!(resolve_preset("-3%", 9.99), Some(9.69));
    }

    #[test]
    fn test_quote_table_preserves_order_and_disabled_rows() {
        let tokens: Vec<String> = vec!["-10%".into(), "bogus".into(), "+20%".into()];
        let quotes = quote_table(&tokens, 50.0);

        assert_eq!(quotes.len(), 3);
        assert_eq!(quotes[0].target, Some(45.0));
        assert_eq!(quotes[1].target, None, "Malformed token stays as a disabled row");
        assert_eq!(quotes[2].target, Some(60.0));
    }

    #[test]
    fn test_default_presets_all_resolve() {
        for token in DEFAULT_PRESETS {
            assert!(
                resolve_preset(token, 100.0).is_some(),
                "Default preset {token} must resolve"
            );
        }
    }
}
