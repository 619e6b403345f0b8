use super::assumptions::{defaults, find_city, DEFAULT_RENTAL_YIELD};
use super::estimate::Estimate;

/// Annual gross yield (percent) assumed for a location
pub fn rental_yield_for(location: &str) -> f64 {
    find_city(location)
        .map(|city| city.rental_yield)
        .unwrap_or(DEFAULT_RENTAL_YIELD)
}

/// Estimate monthly rent from price and the city's typical yield.
///
/// Without a positive price there is nothing to scale, so the flat default
/// rent is returned. A rent too large for whole currency units also falls
/// back to the default.
pub fn estimate_monthly_rent(price: Option<f64>, location: &str) -> Estimate<i64> {
    match price {
        Some(price) if price > 0.0 && price.is_finite() => {
            let yield_pct = rental_yield_for(location);
            let monthly = (price * yield_pct / 100.0 / 12.0).round_ties_even();
            if monthly.is_finite() && monthly < i64::MAX as f64 {
                Estimate::Computed(monthly as i64)
            } else {
                Estimate::Defaulted(defaults::MONTHLY_RENT)
            }
        }
        _ => Estimate::Defaulted(defaults::MONTHLY_RENT),
    }
}
