use rand::Rng;
use thiserror::Error;
use tracing::debug;

use super::assumptions::{defaults, ExpenseRates, FinancingTerms};
use super::estimate::Estimate;
use super::financing::cash_on_cash_with;
use super::location::analyze_location;
use super::rent::estimate_monthly_rent;
use super::risk::assess_risk;
use super::score::atlas_score;
use crate::models::{
    Expenses, ExtractedFacts, FinancialMetrics, LocationAnalysis, MarketTrends, PropertyReport,
    Provenance,
};

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("Could not extract price from page")]
    PriceNotFound,
}

/// Turns extracted facts into a full property report.
///
/// Once a price is known every metric is filled in: anything that cannot
/// be computed takes its named default and is listed in
/// `FinancialMetrics::defaulted`.
#[derive(Debug, Clone, Default)]
pub struct MetricsPipeline {
    pub terms: FinancingTerms,
    pub rates: ExpenseRates,
}

/// Collects the names of metrics that fell back to defaults
#[derive(Default)]
struct Fallbacks(Vec<String>);

impl Fallbacks {
    fn take<T>(&mut self, name: &str, estimate: Estimate<T>) -> T {
        if estimate.is_defaulted() {
            debug!("{} fell back to its default", name);
            self.0.push(name.to_string());
        }
        estimate.value()
    }
}

impl MetricsPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run<R: Rng + ?Sized>(
        &self,
        facts: &ExtractedFacts,
        source: Provenance,
        rng: &mut R,
    ) -> Result<PropertyReport, ExtractionError> {
        let price_number = facts.price.ok_or(ExtractionError::PriceNotFound)?;
        let price = price_number.as_f64();
        let known_price = Some(price).filter(|p| *p > 0.0 && p.is_finite());
        let location = facts.location_text.as_str();

        let mut fallbacks = Fallbacks::default();

        let monthly_rent = fallbacks.take(
            "estimatedMonthlyRent",
            estimate_monthly_rent(known_price, location),
        );
        let annual_rent = fallbacks.take(
            "annualRentalIncome",
            monthly_rent
                .checked_mul(12)
                .map_or(Estimate::Defaulted(defaults::ANNUAL_RENT), Estimate::Computed),
        );

        let expenses = self.expenses(known_price, annual_rent as f64, &mut fallbacks);
        let total_expenses = expenses.total();
        let noi = annual_rent as f64 - total_expenses;

        let cap_rate = fallbacks.take(
            "capRate",
            match known_price {
                Some(p) => Estimate::Computed(noi / p * 100.0),
                None => Estimate::Defaulted(defaults::CAP_RATE),
            },
        );
        let cash_on_cash = fallbacks.take(
            "cashOnCashReturn",
            cash_on_cash_with(&self.terms, known_price, Some(noi)),
        );
        let rental_yield = fallbacks.take(
            "rentalYield",
            match known_price {
                Some(p) => Estimate::Computed(annual_rent as f64 / p * 100.0),
                None => Estimate::Defaulted(defaults::RENTAL_YIELD),
            },
        );

        let location_scores = analyze_location(location, rng);

        // Whole currency units per m², the same figure the report shows
        let price_per_sqm = match (known_price, facts.square_meters.map(|n| n.as_f64())) {
            (Some(p), Some(sqm)) if sqm > 0.0 => Some((p / sqm).trunc() as i64),
            _ => None,
        };
        let risk = assess_risk(
            location,
            price_per_sqm.filter(|v| *v > 0).map(|v| v as f64),
            Some(rental_yield),
        );
        let score = fallbacks.take(
            "atlasScore",
            atlas_score(Some(rental_yield), Some(&location_scores), Some(&risk)),
        );

        if !fallbacks.0.is_empty() {
            debug!("{} metric(s) defaulted for {}", fallbacks.0.len(), source.url);
        }

        Ok(PropertyReport {
            property_address: facts
                .address
                .clone()
                .unwrap_or_else(|| property_address(&facts.title, location)),
            price: price_number,
            square_meters: facts.square_meters,
            price_per_sqm,
            bedrooms: facts.bedrooms,
            bathrooms: facts.bathrooms,
            description: facts.description.clone(),
            images: facts.images.clone(),
            source,
            financial_metrics: FinancialMetrics {
                purchase_price: price_number,
                estimated_monthly_rent: monthly_rent,
                annual_rental_income: annual_rent,
                expenses,
                total_expenses,
                net_operating_income: noi,
                cap_rate,
                cash_on_cash_return: cash_on_cash,
                rental_yield,
                appreciation_forecast: location_scores.growth_rate,
                defaulted: fallbacks.0,
            },
            market_trends: MarketTrends {
                rental_yield,
                area_growth: location_scores.growth_rate,
            },
            location_analysis: LocationAnalysis {
                walk_score: location_scores.walk_score,
                transit_score: location_scores.transit_score,
            },
            risk_assessment: risk,
            atlas_score: score,
        })
    }

    fn expenses(&self, price: Option<f64>, annual_rent: f64, fallbacks: &mut Fallbacks) -> Expenses {
        let on_price = |rate: f64, default: f64| match price {
            Some(p) => Estimate::Computed(p * rate),
            None => Estimate::Defaulted(default),
        };

        Expenses {
            property_tax: fallbacks.take(
                "propertyTax",
                on_price(self.rates.property_tax, defaults::PROPERTY_TAX),
            ),
            insurance: fallbacks.take(
                "insurance",
                on_price(self.rates.insurance, defaults::INSURANCE),
            ),
            maintenance: fallbacks.take(
                "maintenance",
                on_price(self.rates.maintenance, defaults::MAINTENANCE),
            ),
            management_fees: annual_rent * self.rates.management,
        }
    }
}

fn property_address(title: &str, location: &str) -> String {
    let parts: Vec<&str> = [title.trim(), location.trim()]
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect();
    if parts.is_empty() {
        "Property".to_string()
    } else {
        parts.join(" - ")
    }
}
