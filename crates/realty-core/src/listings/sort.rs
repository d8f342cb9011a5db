use super::domain::Property;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Catalog order with featured listings pulled to the top.
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    /// Most recently listed first; undated listings go last.
    Newest,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "relevance" => Ok(Self::Relevance),
            "price_asc" => Ok(Self::PriceAsc),
            "price_desc" => Ok(Self::PriceDesc),
            "newest" => Ok(Self::Newest),
            other => Err(format!(
                "unknown sort order '{other}' (expected relevance, price_asc, price_desc or newest)"
            )),
        }
    }
}

/// Reorders filtered results in place. All orderings are stable.
pub fn sort_properties(results: &mut [&Property], order: SortOrder) {
    match order {
        SortOrder::Relevance => results.sort_by_key(|property| !property.is_featured),
        SortOrder::PriceAsc => results.sort_by_key(|property| property.price_value),
        SortOrder::PriceDesc => results.sort_by_key(|property| Reverse(property.price_value)),
        SortOrder::Newest => results.sort_by_key(|property| Reverse(property.listed_on)),
    }
}

/// Featured listings for the home page carousel, in catalog order.
pub fn featured(properties: &[Property]) -> Vec<&Property> {
    properties
        .iter()
        .filter(|property| property.is_featured && property.is_listable())
        .collect()
}
