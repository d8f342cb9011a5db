use super::{ensure_finite, round_rupees, CalculatorError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::OnceLock;

/// States offered in the calculator's state picker. Only Andhra Pradesh has published rates.
pub const SUPPORTED_STATES: &[&str] = &[
    "andhra_pradesh",
    "telangana",
    "karnataka",
    "maharashtra",
    "tamil_nadu",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyUse {
    #[default]
    Residential,
    Commercial,
}

impl FromStr for PropertyUse {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(Self::Residential),
            "commercial" => Ok(Self::Commercial),
            other => Err(format!("unknown property use '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuyerGender {
    #[default]
    Male,
    Female,
    Other,
}

impl FromStr for BuyerGender {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            other => Err(format!("unknown buyer gender '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StampDutyQuote {
    pub stamp_duty: i64,
    pub registration: i64,
    pub total: i64,
    pub stamp_duty_rate: f64,
    pub registration_rate: f64,
    /// False when the state has no rate table and every amount is zero.
    pub rates_known: bool,
}

#[derive(Debug, Clone, Copy)]
struct StateRates {
    residential_female: f64,
    residential: f64,
    commercial: f64,
    registration: f64,
}

impl StateRates {
    fn stamp_duty_rate(&self, property_use: PropertyUse, buyer_gender: BuyerGender) -> f64 {
        match (property_use, buyer_gender) {
            (PropertyUse::Residential, BuyerGender::Female) => self.residential_female,
            (PropertyUse::Residential, _) => self.residential,
            (PropertyUse::Commercial, _) => self.commercial,
        }
    }
}

static STATE_RATES: OnceLock<HashMap<&'static str, StateRates>> = OnceLock::new();

fn state_rates() -> &'static HashMap<&'static str, StateRates> {
    STATE_RATES.get_or_init(|| {
        const RATES: &[(&str, StateRates)] = &[(
            "andhra_pradesh",
            StateRates {
                residential_female: 0.04,
                residential: 0.05,
                commercial: 0.075,
                registration: 0.01,
            },
        )];

        RATES.iter().copied().collect()
    })
}

fn normalize_state(state: &str) -> String {
    state
        .trim()
        .to_ascii_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Stamp duty and registration charges payable on a purchase.
///
/// States without a rate table quote zero rather than failing.
pub fn compute_stamp_duty(
    property_value: f64,
    state: &str,
    property_use: PropertyUse,
    buyer_gender: BuyerGender,
) -> Result<StampDutyQuote, CalculatorError> {
    let property_value = ensure_finite("property value", property_value)?;
    let rates = state_rates().get(normalize_state(state).as_str());

    let (stamp_duty_rate, registration_rate) = rates
        .map(|rates| {
            (
                rates.stamp_duty_rate(property_use, buyer_gender),
                rates.registration,
            )
        })
        .unwrap_or((0.0, 0.0));

    let stamp_duty = property_value * stamp_duty_rate;
    let registration = property_value * registration_rate;

    Ok(StampDutyQuote {
        stamp_duty: round_rupees("stamp duty", stamp_duty)?,
        registration: round_rupees("registration", registration)?,
        total: round_rupees("stamp duty total", stamp_duty + registration)?,
        stamp_duty_rate,
        registration_rate,
        rates_known: rates.is_some(),
    })
}
