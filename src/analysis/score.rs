use super::assumptions::defaults;
use super::estimate::Estimate;
use crate::models::{LocationScores, RiskAssessment};

const YIELD_POINTS_CAP: f64 = 50.0;
const LOCATION_WEIGHT: f64 = 0.3;
const RISK_WEIGHT: f64 = 0.3;

const STAND_IN_LOCATION: LocationScores = LocationScores {
    walk_score: defaults::SCORE_WALK,
    transit_score: defaults::SCORE_TRANSIT,
    growth_rate: defaults::SCORE_GROWTH,
};

/// Composite 0-100 investment score from yield, location and risk.
///
/// Absent inputs are replaced by stand-in values; a result that is not a
/// finite number becomes the default score. Always returns a score.
pub fn atlas_score(
    rental_yield: Option<f64>,
    location: Option<&LocationScores>,
    risk: Option<&RiskAssessment>,
) -> Estimate<u8> {
    let rental_yield = rental_yield.unwrap_or(defaults::SCORE_YIELD);
    let location = location.unwrap_or(&STAND_IN_LOCATION);
    let risk = risk.map_or(defaults::SCORE_RISK, |r| r.score);

    let yield_points = (rental_yield * 10.0).min(YIELD_POINTS_CAP);
    let location_points = (f64::from(location.walk_score) + f64::from(location.transit_score))
        / 2.0
        * LOCATION_WEIGHT;
    let risk_points = f64::from(risk) * RISK_WEIGHT;

    let total = yield_points + location_points + risk_points;
    if !rental_yield.is_finite() || !total.is_finite() {
        return Estimate::Defaulted(defaults::ATLAS_SCORE);
    }

    Estimate::Computed(total.round_ties_even().clamp(0.0, 100.0) as u8)
}
