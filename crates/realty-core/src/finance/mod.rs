//! Home-loan calculators shown next to listings.
//!
//! All amounts are rupees. Results are rounded half-up to whole rupees,
//! matching what the marketplace displays.

mod affordability;
mod emi;
mod format;
mod stamp_duty;

pub use affordability::{
    compute_affordability, AffordabilityInputs, AffordabilityQuote, MAX_EMI_SHARE,
};
pub use emi::{amortization_schedule, compute_emi, AmortizationRow, EmiQuote};
pub use format::format_inr;
pub use stamp_duty::{
    compute_stamp_duty, BuyerGender, PropertyUse, StampDutyQuote, SUPPORTED_STATES,
};

/// Longest loan tenure the calculators quote.
pub const MAX_TENURE_YEARS: u32 = 50;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculatorError {
    #[error("loan tenure must be at least one year")]
    ZeroTenure,
    #[error("loan tenure of {years} years exceeds the {max} year limit")]
    TenureTooLong { years: u32, max: u32 },
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
    #[error("{calculation} overflowed for the given inputs")]
    Overflow { calculation: &'static str },
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, CalculatorError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculatorError::NonFinite { field })
    }
}

/// Half-up rounding to whole rupees (`-2.5` rounds to `-2`).
pub(crate) fn round_rupees(calculation: &'static str, value: f64) -> Result<i64, CalculatorError> {
    let rounded = (value + 0.5).floor();
    if !rounded.is_finite() || rounded.abs() > i64::MAX as f64 {
        return Err(CalculatorError::Overflow { calculation });
    }
    Ok(rounded as i64)
}

/// Number of monthly installments for a tenure between one and `MAX_TENURE_YEARS`.
pub(crate) fn installments(tenure_years: u32) -> Result<u32, CalculatorError> {
    match tenure_years {
        0 => Err(CalculatorError::ZeroTenure),
        years if years > MAX_TENURE_YEARS => Err(CalculatorError::TenureTooLong {
            years,
            max: MAX_TENURE_YEARS,
        }),
        years => Ok(years * 12),
    }
}

/// `(1 + r)^n` for a monthly rate over `months` installments.
pub(crate) fn growth_factor(monthly_rate: f64, months: u32) -> f64 {
    (1.0 + monthly_rate).powi(months as i32)
}

pub(crate) fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 12.0 / 100.0
}
