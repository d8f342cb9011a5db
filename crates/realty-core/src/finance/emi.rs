use super::{
    ensure_finite, growth_factor, installments, monthly_rate, round_rupees, CalculatorError,
};
use serde::{Deserialize, Serialize};

/// Monthly installment for a reducing-balance loan, in whole rupees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmiQuote {
    pub emi: i64,
    /// `emi` times the number of installments.
    pub total_amount: i64,
    pub total_interest: i64,
    pub principal: i64,
}

/// One year of an amortization schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmortizationRow {
    pub year: u32,
    pub principal_paid: i64,
    pub interest_paid: i64,
    pub closing_balance: i64,
}

/// `EMI = P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate and `n` the
/// number of months. A 0% loan is repaid in equal slices of the principal.
pub fn compute_emi(
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: u32,
) -> Result<EmiQuote, CalculatorError> {
    let principal = ensure_finite("principal", principal)?;
    let annual_rate_percent = ensure_finite("annual rate", annual_rate_percent)?;
    let months = installments(tenure_years)?;

    let installment = raw_installment(principal, monthly_rate(annual_rate_percent), months);
    let emi = round_rupees("emi", installment)?;
    let principal = round_rupees("principal", principal)?;
    let total_amount = emi
        .checked_mul(i64::from(months))
        .ok_or(CalculatorError::Overflow {
            calculation: "total amount",
        })?;

    Ok(EmiQuote {
        emi,
        total_amount,
        total_interest: total_amount - principal,
        principal,
    })
}

/// Year-by-year split of repayments into principal and interest.
///
/// Balances are tracked unrounded month by month; each row is rounded on output,
/// so the final closing balance is zero.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_percent: f64,
    tenure_years: u32,
) -> Result<Vec<AmortizationRow>, CalculatorError> {
    let principal = ensure_finite("principal", principal)?;
    let annual_rate_percent = ensure_finite("annual rate", annual_rate_percent)?;
    let months = installments(tenure_years)?;
    let rate = monthly_rate(annual_rate_percent);
    let installment = raw_installment(principal, rate, months);

    let mut balance = principal;
    let mut rows = Vec::with_capacity(tenure_years as usize);
    for year in 1..=tenure_years {
        let mut principal_paid = 0.0;
        let mut interest_paid = 0.0;
        for _ in 0..12 {
            let interest = balance * rate;
            let repaid = installment - interest;
            balance -= repaid;
            principal_paid += repaid;
            interest_paid += interest;
        }

        if year == tenure_years {
            principal_paid += balance;
            balance = 0.0;
        }

        rows.push(AmortizationRow {
            year,
            principal_paid: round_rupees("principal paid", principal_paid)?,
            interest_paid: round_rupees("interest paid", interest_paid)?,
            closing_balance: round_rupees("closing balance", balance)?,
        });
    }

    Ok(rows)
}

pub(crate) fn raw_installment(principal: f64, monthly_rate: f64, months: u32) -> f64 {
    if monthly_rate == 0.0 {
        return principal / f64::from(months);
    }

    let growth = growth_factor(monthly_rate, months);
    principal * monthly_rate * growth / (growth - 1.0)
}
