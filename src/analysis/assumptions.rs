//! Fixed market assumptions and the fallback values used when a metric
//! cannot be computed.
//!
//! City tables are ordered: lookups scan top to bottom and the first keyword
//! hit wins, so reordering entries changes reports.

/// Base walk score, transit score and annual growth rate for an area
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaScores {
    pub walk: u8,
    pub transit: u8,
    pub growth: f64,
}

/// Neighborhoods within a city that score above the city average
#[derive(Debug, Clone, Copy)]
pub struct PrimeAreas {
    pub keywords: &'static [&'static str],
    pub scores: AreaScores,
}

/// Everything the estimators know about a supported city
#[derive(Debug, Clone, Copy)]
pub struct CityProfile {
    pub name: &'static str,
    /// Lowercase substrings that identify the city in free text
    pub keywords: &'static [&'static str],
    /// Gross annual rental yield, percent
    pub rental_yield: f64,
    pub scores: AreaScores,
    pub prime: Option<PrimeAreas>,
    /// Typical asking price per square meter, used for synthetic listings
    pub price_per_sqm: f64,
}

impl CityProfile {
    pub fn matches(&self, lowercase_text: &str) -> bool {
        self.keywords.iter().any(|k| lowercase_text.contains(k))
    }
}

pub const CITIES: &[CityProfile] = &[
    CityProfile {
        name: "Madrid",
        keywords: &["madrid"],
        rental_yield: 4.2,
        scores: AreaScores { walk: 85, transit: 85, growth: 3.5 },
        prime: Some(PrimeAreas {
            keywords: &["centro", "salamanca"],
            scores: AreaScores { walk: 95, transit: 90, growth: 4.0 },
        }),
        price_per_sqm: 4200.0,
    },
    CityProfile {
        name: "Barcelona",
        keywords: &["barcelona"],
        rental_yield: 4.0,
        scores: AreaScores { walk: 90, transit: 90, growth: 3.5 },
        prime: Some(PrimeAreas {
            keywords: &["eixample", "gracia"],
            scores: AreaScores { walk: 95, transit: 95, growth: 3.8 },
        }),
        price_per_sqm: 4500.0,
    },
    CityProfile {
        name: "Valencia",
        keywords: &["valencia"],
        rental_yield: 5.0,
        scores: AreaScores { walk: 80, transit: 75, growth: 4.2 },
        prime: None,
        price_per_sqm: 2800.0,
    },
    CityProfile {
        name: "Sevilla",
        keywords: &["sevilla", "seville"],
        rental_yield: 5.2,
        scores: AreaScores { walk: 75, transit: 70, growth: 4.0 },
        prime: None,
        price_per_sqm: 2500.0,
    },
    CityProfile {
        name: "Málaga",
        keywords: &["málaga", "malaga"],
        rental_yield: 5.5,
        scores: AreaScores { walk: 70, transit: 65, growth: 4.5 },
        prime: None,
        price_per_sqm: 3000.0,
    },
];

/// First city whose keyword appears in `text` (case-insensitive)
pub fn find_city(text: &str) -> Option<&'static CityProfile> {
    let text = text.to_lowercase();
    CITIES.iter().find(|c| c.matches(&text))
}

pub const DEFAULT_RENTAL_YIELD: f64 = 4.5;
pub const DEFAULT_AREA_SCORES: AreaScores = AreaScores { walk: 70, transit: 65, growth: 3.0 };

/// Neighborhoods a synthetic listing may be placed in
pub const SYNTHETIC_NEIGHBORHOODS: &[&str] =
    &["Centro", "Salamanca", "Chamberí", "Eixample", "Gracia", "El Carmen"];

// Risk keyword groups, narrower than the city table: "seville" and "málaga"
// fall through to the unknown-market penalty.
pub const RISK_MAJOR_CITIES: &[&str] = &["madrid", "barcelona"];
pub const RISK_PRIME_AREAS: &[&str] = &["centro", "salamanca", "eixample"];
pub const RISK_NEUTRAL_CITIES: &[&str] = &["valencia", "sevilla", "malaga"];

/// Fallbacks applied when a metric's inputs are missing or unusable
pub mod defaults {
    pub const MONTHLY_RENT: i64 = 1500;
    pub const ANNUAL_RENT: i64 = MONTHLY_RENT * 12;
    pub const PROPERTY_TAX: f64 = 1750.0;
    pub const INSURANCE: f64 = 700.0;
    pub const MAINTENANCE: f64 = 3500.0;
    pub const CAP_RATE: f64 = 3.5;
    pub const CASH_ON_CASH: f64 = 4.5;
    pub const RENTAL_YIELD: f64 = 4.0;
    pub const ATLAS_SCORE: u8 = 75;

    /// Stand-ins for aggregator inputs that were never produced
    pub const SCORE_YIELD: f64 = 4.5;
    pub const SCORE_WALK: u8 = 75;
    pub const SCORE_TRANSIT: u8 = 70;
    pub const SCORE_GROWTH: f64 = 3.5;
    pub const SCORE_RISK: u8 = 75;
}

/// Fixed mortgage model used for cash-on-cash return
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancingTerms {
    pub down_payment_ratio: f64,
    pub annual_interest_rate: f64,
    pub term_months: u32,
}

impl Default for FinancingTerms {
    fn default() -> Self {
        Self {
            down_payment_ratio: 0.30,
            annual_interest_rate: 0.035,
            term_months: 30 * 12,
        }
    }
}

/// Annual operating expenses as fractions of price or rent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpenseRates {
    pub property_tax: f64,
    pub insurance: f64,
    pub maintenance: f64,
    /// Applied to annual rental income, not price
    pub management: f64,
}

impl Default for ExpenseRates {
    fn default() -> Self {
        Self {
            property_tax: 0.005,
            insurance: 0.002,
            maintenance: 0.01,
            management: 0.08,
        }
    }
}
