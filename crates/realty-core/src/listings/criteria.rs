use super::domain::{Furnishing, PropertyKind};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriteriaError {
    #[error("bhk filter must be 'any' or a bedroom count, got '{0}'")]
    InvalidBhk(String),
    #[error("unknown furnishing filter '{0}'")]
    InvalidFurnishing(String),
    #[error("unknown listing type '{0}'")]
    InvalidListingIntent(String),
    #[error("unknown property type '{0}'")]
    InvalidPropertyKind(String),
}

impl FromStr for PropertyKind {
    type Err = CriteriaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        PropertyKind::parse(value)
            .ok_or_else(|| CriteriaError::InvalidPropertyKind(value.to_string()))
    }
}

/// Buyer-side intent selected in the search bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum ListingIntent {
    #[default]
    #[serde(rename = "any")]
    Any,
    Buy,
    Sell,
    Rent,
}

impl FromStr for ListingIntent {
    type Err = CriteriaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "any" | "" => Ok(Self::Any),
            "buy" => Ok(Self::Buy),
            "sell" => Ok(Self::Sell),
            "rent" => Ok(Self::Rent),
            _ => Err(CriteriaError::InvalidListingIntent(value.to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for ListingIntent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Bedroom filter. The top bucket ("5") matches five bedrooms or more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BhkFilter {
    #[default]
    Any,
    Exactly(u8),
    FiveOrMore,
}

impl BhkFilter {
    pub fn matches(self, bhk: u8) -> bool {
        match self {
            Self::Any => true,
            Self::Exactly(count) => bhk == count,
            Self::FiveOrMore => bhk >= 5,
        }
    }
}

impl FromStr for BhkFilter {
    type Err = CriteriaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }

        match trimmed.parse::<u8>() {
            Ok(5) => Ok(Self::FiveOrMore),
            Ok(count) => Ok(Self::Exactly(count)),
            Err(_) => Err(CriteriaError::InvalidBhk(value.to_string())),
        }
    }
}

impl fmt::Display for BhkFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Exactly(count) => write!(f, "{count}"),
            Self::FiveOrMore => f.write_str("5"),
        }
    }
}

impl Serialize for BhkFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for BhkFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u8),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Text(text) => text.parse().map_err(serde::de::Error::custom),
            Raw::Number(5) => Ok(Self::FiveOrMore),
            Raw::Number(count) => Ok(Self::Exactly(count)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FurnishingFilter {
    #[default]
    Any,
    Only(Furnishing),
}

impl FurnishingFilter {
    pub fn matches(self, furnishing: Option<Furnishing>) -> bool {
        match self {
            Self::Any => true,
            Self::Only(wanted) => furnishing == Some(wanted),
        }
    }
}

impl FromStr for FurnishingFilter {
    type Err = CriteriaError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }

        Furnishing::parse(trimmed)
            .map(Self::Only)
            .ok_or_else(|| CriteriaError::InvalidFurnishing(value.to_string()))
    }
}

impl fmt::Display for FurnishingFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Only(furnishing) => f.write_str(furnishing.label()),
        }
    }
}

impl Serialize for FurnishingFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FurnishingFilter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Narrowing filters from the sidebar. Absent fields mean "any" / unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RefineFilters {
    pub bhk: BhkFilter,
    pub furnishing: FurnishingFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
}

/// One search request. Built fresh per query and never mutated by the filter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub property_type: PropertyKind,
    pub listing_type: ListingIntent,
    pub search_term: String,
    pub filters: RefineFilters,
}

impl FilterCriteria {
    pub fn for_kind(kind: PropertyKind) -> Self {
        Self {
            property_type: kind,
            ..Self::default()
        }
    }

    pub fn with_listing(mut self, intent: ListingIntent) -> Self {
        self.listing_type = intent;
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn with_bhk(mut self, bhk: BhkFilter) -> Self {
        self.filters.bhk = bhk;
        self
    }

    pub fn with_furnishing(mut self, furnishing: FurnishingFilter) -> Self {
        self.filters.furnishing = furnishing;
        self
    }

    pub fn with_price_range(mut self, min_price: Option<u64>, max_price: Option<u64>) -> Self {
        self.filters.min_price = min_price;
        self.filters.max_price = max_price;
        self
    }
}
