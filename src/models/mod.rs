use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A number read from listing text.
///
/// Integers stay integers on the way back out to JSON, so a price scraped as
/// `350.000 €` is reported as `350000` and not `350000.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(f) => f,
        }
    }
}

/// Best-effort facts pulled from a listing page (or fabricated for one)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedFacts {
    pub title: String,
    /// Display address when the source already provides a full one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub price: Option<Number>,
    pub square_meters: Option<Number>,
    pub bedrooms: Option<Number>,
    pub bathrooms: Option<Number>,
    pub location_text: String,
    pub description: String,
    pub images: Vec<String>,
}

/// Where a report came from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provenance {
    pub platform: String,
    pub url: String,
    pub scraped_at: DateTime<Utc>,
    pub synthetic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listing_id: Option<String>,
}

/// Walkability, transit and growth heuristics for a location
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationScores {
    pub walk_score: u8,
    pub transit_score: u8,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl RiskLevel {
    /// Fixed bucketing of a clamped 0-100 risk score (higher is safer)
    pub fn from_score(score: u8) -> Self {
        match score {
            85.. => RiskLevel::VeryLow,
            75..=84 => RiskLevel::Low,
            60..=74 => RiskLevel::Medium,
            40..=59 => RiskLevel::High,
            _ => RiskLevel::VeryHigh,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RiskAssessment {
    #[serde(rename = "overall")]
    pub level: RiskLevel,
    pub score: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Expenses {
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    pub management_fees: f64,
}

impl Expenses {
    pub fn total(&self) -> f64 {
        self.property_tax + self.insurance + self.maintenance + self.management_fees
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FinancialMetrics {
    pub purchase_price: Number,
    pub estimated_monthly_rent: i64,
    pub annual_rental_income: i64,
    pub expenses: Expenses,
    pub total_expenses: f64,
    pub net_operating_income: f64,
    pub cap_rate: f64,
    pub cash_on_cash_return: f64,
    pub rental_yield: f64,
    pub appreciation_forecast: f64,
    /// Metrics that fell back to their default instead of being computed
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub defaulted: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrends {
    pub rental_yield: f64,
    pub area_growth: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationAnalysis {
    pub walk_score: u8,
    pub transit_score: u8,
}

/// Full analysis of one listing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyReport {
    pub property_address: String,
    pub price: Number,
    pub square_meters: Option<Number>,
    pub price_per_sqm: Option<i64>,
    pub bedrooms: Option<Number>,
    pub bathrooms: Option<Number>,
    pub description: String,
    pub images: Vec<String>,
    pub source: Provenance,
    pub financial_metrics: FinancialMetrics,
    pub market_trends: MarketTrends,
    pub location_analysis: LocationAnalysis,
    pub risk_assessment: RiskAssessment,
    pub atlas_score: u8,
}

/// The one JSON document printed per invocation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<PropertyReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScrapeResponse {
    pub fn ok(report: PropertyReport) -> Self {
        Self {
            success: true,
            data: Some(report),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>, fallback: Option<PropertyReport>) -> Self {
        Self {
            success: false,
            data: fallback,
            error: Some(error.into()),
        }
    }
}
