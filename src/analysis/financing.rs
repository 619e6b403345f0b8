use super::assumptions::{defaults, FinancingTerms};
use super::estimate::Estimate;

/// Standard amortized payment for a fixed-rate loan.
///
/// A zero rate degenerates to straight-line repayment.
pub fn monthly_mortgage_payment(loan: f64, annual_rate: f64, months: u32) -> f64 {
    if months == 0 {
        return loan;
    }
    let r = annual_rate / 12.0;
    let n = f64::from(months);
    if r == 0.0 {
        return loan / n;
    }
    let growth = (1.0 + r).powf(n);
    loan * r * growth / (growth - 1.0)
}

/// Cash-on-cash return (percent) under the default financing terms
pub fn cash_on_cash_return(price: Option<f64>, noi: Option<f64>) -> Estimate<f64> {
    cash_on_cash_with(&FinancingTerms::default(), price, noi)
}

/// Annual pre-tax cash flow after debt service over the cash put down.
///
/// Missing inputs, a non-positive price or any non-finite intermediate fall
/// back to the default return; this never fails.
pub fn cash_on_cash_with(
    terms: &FinancingTerms,
    price: Option<f64>,
    noi: Option<f64>,
) -> Estimate<f64> {
    let fallback = Estimate::Defaulted(defaults::CASH_ON_CASH);

    let (Some(price), Some(noi)) = (price, noi) else {
        return fallback;
    };
    if !(price > 0.0) || !noi.is_finite() {
        return fallback;
    }

    let down_payment = price * terms.down_payment_ratio;
    if !(down_payment > 0.0) {
        return fallback;
    }
    let loan = price - down_payment;

    let annual_debt_service =
        monthly_mortgage_payment(loan, terms.annual_interest_rate, terms.term_months) * 12.0;
    let cash_flow = noi - annual_debt_service;
    let coc = cash_flow / down_payment * 100.0;

    if coc.is_finite() {
        Estimate::Computed(coc)
    } else {
        fallback
    }
}
