use super::assumptions::{RISK_MAJOR_CITIES, RISK_NEUTRAL_CITIES, RISK_PRIME_AREAS};
use crate::models::{RiskAssessment, RiskLevel};

const BASE_SCORE: i32 = 75;

/// Score an investment's risk from 0 (riskiest) to 100 (safest).
///
/// Adjustments are additive and applied before the score is clamped.
/// Price per area and yield only count when they are known.
pub fn assess_risk(
    location: &str,
    price_per_area: Option<f64>,
    rental_yield: Option<f64>,
) -> RiskAssessment {
    let raw = BASE_SCORE
        + location_adjustment(location)
        + price_per_area.map_or(0, price_adjustment)
        + rental_yield.map_or(0, yield_adjustment);

    let score = raw.clamp(0, 100) as u8;
    RiskAssessment {
        level: RiskLevel::from_score(score),
        score,
    }
}

fn location_adjustment(location: &str) -> i32 {
    let lower = location.to_lowercase();
    let has = |keywords: &[&str]| keywords.iter().any(|k| lower.contains(k));

    if has(RISK_MAJOR_CITIES) {
        if has(RISK_PRIME_AREAS) {
            15
        } else {
            5
        }
    } else if has(RISK_NEUTRAL_CITIES) {
        0
    } else {
        -5
    }
}

fn price_adjustment(price_per_area: f64) -> i32 {
    if price_per_area > 5000.0 {
        -5
    } else if price_per_area < 2000.0 {
        -3
    } else {
        0
    }
}

fn yield_adjustment(rental_yield: f64) -> i32 {
    if rental_yield > 6.0 {
        8
    } else if rental_yield > 5.0 {
        5
    } else if rental_yield > 4.0 {
        0
    } else {
        -5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prime_madrid_with_strong_yield() {
        // 75 + 5 + 10 - 5 + 8
        let risk = assess_risk("Madrid Salamanca", Some(6000.0), Some(7.0));
        assert_eq!(risk.score, 93);
        assert_eq!(risk.level, RiskLevel::VeryLow);
    }

    #[test]
    fn neutral_city_with_average_numbers() {
        let risk = assess_risk("Ruzafa, Valencia", Some(2800.0), Some(4.5));
        assert_eq!(risk.score, 75);
        assert_eq!(risk.level, RiskLevel::Low);
    }

    #[test]
    fn unknown_market_cheap_and_low_yield() {
        // 75 - 5 - 3 - 5
        let risk = assess_risk("Somewhere", Some(1500.0), Some(3.0));
        assert_eq!(risk.score, 62);
        assert_eq!(risk.level, RiskLevel::Medium);
    }

    #[test]
    fn missing_inputs_are_skipped_not_penalized() {
        assert_eq!(assess_risk("Barcelona", None, None).score, 80);
    }

    #[test]
    fn accented_malaga_is_not_a_neutral_market() {
        assert_eq!(assess_risk("Centro, Málaga", None, None).score, 70);
        assert_eq!(assess_risk("Centro, Malaga", None, None).score, 75);
    }

    #[test]
    fn yield_thresholds_are_strict() {
        assert_eq!(yield_adjustment(6.0), 5);
        assert_eq!(yield_adjustment(5.0), 0);
        assert_eq!(yield_adjustment(4.0), -5);
        assert_eq!(price_adjustment(5000.0), 0);
        assert_eq!(price_adjustment(2000.0), 0);
    }
}
