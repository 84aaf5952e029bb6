use crate::core::PlanPoint;

pub fn calculate_average_price(points: &[PlanPoint]) -> Option<f64> {
    if points.is_empty() {
        return None;
    }

    let total: f64 = points.iter().map(|p| p.price).sum();
    Some(total / points.len() as f64)
}

pub fn find_min_price(points: &[PlanPoint]) -> Option<f64> {
    points.iter().map(|p| p.price).min_by(f64::total_cmp)
}

pub fn find_max_price(points: &[PlanPoint]) -> Option<f64> {
    points.iter().map(|p| p.price).max_by(f64::total_cmp)
}

pub fn count_estimated(points: &[PlanPoint]) -> usize {
    points
        .iter()
        .filter(|p| p.value_score.is_estimated)
        .count()
}

/// Points ordered by value score, highest first. Ties keep chart order.
pub fn sort_by_value_score(mut points: Vec<PlanPoint>) -> Vec<PlanPoint> {
    points.sort_by(|a, b| b.value_score.score.total_cmp(&a.value_score.score));
    points
}
