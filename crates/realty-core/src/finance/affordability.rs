use super::{
    ensure_finite, growth_factor, installments, monthly_rate, round_rupees, CalculatorError,
};
use serde::{Deserialize, Serialize};

/// Largest share of disposable income a new EMI may take.
pub const MAX_EMI_SHARE: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityInputs {
    pub monthly_income: f64,
    pub monthly_expenses: f64,
    #[serde(default, alias = "existingEMI")]
    pub existing_emi: f64,
    #[serde(default)]
    pub down_payment: f64,
    pub annual_rate_percent: f64,
    pub tenure_years: u32,
}

/// Negative values mean the buyer cannot take on any EMI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AffordabilityQuote {
    #[serde(rename = "maxEMI", alias = "maxEmi")]
    pub max_emi: i64,
    pub max_loan: i64,
    pub max_property_value: i64,
    pub disposable_income: i64,
}

/// Inverts the EMI formula to find the largest loan the buyer can service.
pub fn compute_affordability(
    inputs: &AffordabilityInputs,
) -> Result<AffordabilityQuote, CalculatorError> {
    let income = ensure_finite("monthly income", inputs.monthly_income)?;
    let expenses = ensure_finite("monthly expenses", inputs.monthly_expenses)?;
    let existing_emi = ensure_finite("existing EMI", inputs.existing_emi)?;
    let down_payment = ensure_finite("down payment", inputs.down_payment)?;
    let annual_rate_percent = ensure_finite("annual rate", inputs.annual_rate_percent)?;
    let months = installments(inputs.tenure_years)?;

    let disposable_income = income - expenses - existing_emi;
    let max_emi = disposable_income * MAX_EMI_SHARE;

    let rate = monthly_rate(annual_rate_percent);
    let max_loan = if rate == 0.0 {
        max_emi * f64::from(months)
    } else {
        let growth = growth_factor(rate, months);
        max_emi * (growth - 1.0) / (rate * growth)
    };

    Ok(AffordabilityQuote {
        max_emi: round_rupees("max EMI", max_emi)?,
        max_loan: round_rupees("max loan", max_loan)?,
        max_property_value: round_rupees("max property value", max_loan + down_payment)?,
        disposable_income: round_rupees("disposable income", disposable_income)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::compute_emi;

    fn inputs() -> AffordabilityInputs {
        AffordabilityInputs {
            monthly_income: 150_000.0,
            monthly_expenses: 40_000.0,
            existing_emi: 10_000.0,
            down_payment: 1_000_000.0,
            annual_rate_percent: 8.5,
            tenure_years: 20,
        }
    }

    #[test]
    fn half_of_disposable_income_sets_the_ceiling() {
        let quote = compute_affordability(&inputs()).expect("valid inputs");
        assert_eq!(
            quote,
            AffordabilityQuote {
                max_emi: 50_000,
                max_loan: 5_761_542,
                max_property_value: 6_761_542,
                disposable_income: 100_000,
            }
        );
    }

    #[test]
    fn max_loan_round_trips_through_emi() {
        let quote = compute_affordability(&inputs()).expect("valid inputs");
        let emi = compute_emi(quote.max_loan as f64, 8.5, 20).expect("valid inputs");
        assert!((emi.emi - quote.max_emi).abs() <= 1, "emi {}", emi.emi);
    }

    #[test]
    fn negative_disposable_income_surfaces_negative_limits() {
        let quote = compute_affordability(&AffordabilityInputs {
            monthly_income: 50_000.0,
            monthly_expenses: 45_000.0,
            existing_emi: 10_000.0,
            down_payment: 200_000.0,
            annual_rate_percent: 9.0,
            tenure_years: 15,
        })
        .expect("negative income is not an error");

        assert_eq!(quote.disposable_income, -5_000);
        assert_eq!(quote.max_emi, -2_500);
        assert_eq!(quote.max_loan, -246_484);
        assert_eq!(quote.max_property_value, -46_484);
    }

    #[test]
    fn zero_rate_multiplies_emi_by_installments() {
        let quote = compute_affordability(&AffordabilityInputs {
            annual_rate_percent: 0.0,
            down_payment: 0.0,
            ..inputs()
        })
        .expect("valid inputs");
        assert_eq!(quote.max_loan, 50_000 * 240);
        assert_eq!(quote.max_property_value, quote.max_loan);
    }

    #[test]
    fn zero_tenure_is_rejected() {
        let error = compute_affordability(&AffordabilityInputs {
            tenure_years: 0,
            ..inputs()
        })
        .expect_err("zero tenure");
        assert_eq!(error, CalculatorError::ZeroTenure);
    }

    #[test]
    fn deserializes_frontend_field_names() {
        let parsed: AffordabilityInputs = serde_json::from_str(
            r#"{"monthlyIncome":90000,"monthlyExpenses":30000,"existingEMI":5000,"annualRatePercent":9,"tenureYears":15}"#,
        )
        .expect("valid payload");
        assert_eq!(parsed.existing_emi, 5_000.0);
        assert_eq!(parsed.down_payment, 0.0);
    }
}
