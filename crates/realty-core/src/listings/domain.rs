use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Marketplace category a listing is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PropertyKind {
    #[default]
    Residential,
    Commercial,
    Plots,
    #[serde(rename = "PG")]
    Pg,
    Projects,
}

impl PropertyKind {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Residential,
            Self::Commercial,
            Self::Plots,
            Self::Pg,
            Self::Projects,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Residential => "Residential",
            Self::Commercial => "Commercial",
            Self::Plots => "Plots",
            Self::Pg => "PG",
            Self::Projects => "Projects",
        }
    }

    /// Categories whose listings are not split into buy and rent.
    pub const fn ignores_listing_intent(self) -> bool {
        matches!(self, Self::Projects | Self::Pg | Self::Plots)
    }

    /// Case-insensitive lookup by label.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        Self::ordered()
            .into_iter()
            .find(|kind| kind.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ListingStatus {
    #[serde(rename = "For Sale")]
    ForSale,
    #[serde(rename = "For Rent")]
    ForRent,
}

impl ListingStatus {
    pub const fn label(self) -> &'static str {
        match self {
            Self::ForSale => "For Sale",
            Self::ForRent => "For Rent",
        }
    }

    fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "for_sale" | "sale" => Some(Self::ForSale),
            "for_rent" | "rent" => Some(Self::ForRent),
            _ => None,
        }
    }
}

/// What the owner wants to do with the property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookingTo {
    Sell,
    Rent,
}

impl LookingTo {
    fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "sell" => Some(Self::Sell),
            "rent" => Some(Self::Rent),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Furnishing {
    #[serde(alias = "unfurnished")]
    Unfurnished,
    #[serde(rename = "Semi-Furnished", alias = "semi_furnished")]
    SemiFurnished,
    #[serde(alias = "furnished")]
    Furnished,
}

impl Furnishing {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Unfurnished => "Unfurnished",
            Self::SemiFurnished => "Semi-Furnished",
            Self::Furnished => "Furnished",
        }
    }

    /// Accepts both the display spelling and the snake_case form.
    pub fn parse(value: &str) -> Option<Self> {
        match normalize_token(value).as_str() {
            "unfurnished" => Some(Self::Unfurnished),
            "semi_furnished" | "semifurnished" => Some(Self::SemiFurnished),
            "furnished" | "fully_furnished" => Some(Self::Furnished),
            _ => None,
        }
    }
}

impl fmt::Display for Furnishing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A catalog entry after ingestion defaults have been applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: u64,
    pub location: String,
    #[serde(rename = "type")]
    pub type_label: String,
    /// `None` when the record names a category the marketplace does not know.
    pub property_kind: Option<PropertyKind>,
    pub status: Option<ListingStatus>,
    pub looking_to: Option<LookingTo>,
    pub bhk: u8,
    pub furnishing: Option<Furnishing>,
    pub price_value: u64,
    pub is_featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub listed_on: Option<NaiveDate>,
}

impl Property {
    /// Listings without a location or type label never show up in results.
    pub fn is_listable(&self) -> bool {
        !self.location.is_empty() && !self.type_label.is_empty()
    }
}

/// Wire shape of a listing as served by the marketplace backend or exported to CSV.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    pub id: u64,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub location: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "empty_string_as_none")]
    pub type_label: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub property_kind: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub property_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub looking_to: Option<String>,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub bhk: u8,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub furnishing: Option<String>,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub price_value: u64,
    #[serde(default, deserialize_with = "empty_as_default")]
    pub is_featured: bool,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub building_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub listed_on: Option<String>,
}

impl ListingRecord {
    /// Applies the ingestion defaults so the filter never has to coalesce fields.
    pub fn normalize(self) -> Property {
        let label = self.property_kind.as_deref().or(self.property_type.as_deref());
        let property_kind = match label {
            Some(label) => PropertyKind::parse(label),
            None => Some(PropertyKind::Residential),
        };

        Property {
            id: self.id,
            location: self.location.unwrap_or_default(),
            type_label: self.type_label.unwrap_or_default(),
            property_kind,
            status: self.status.as_deref().and_then(ListingStatus::parse),
            looking_to: self.looking_to.as_deref().and_then(LookingTo::parse),
            bhk: self.bhk,
            furnishing: self.furnishing.as_deref().and_then(Furnishing::parse),
            price_value: self.price_value,
            is_featured: self.is_featured,
            building_name: self.building_name,
            listed_on: self.listed_on.as_deref().and_then(parse_listed_on),
        }
    }
}

fn normalize_token(value: &str) -> String {
    value
        .trim()
        .to_ascii_lowercase()
        .replace(['-', ' '], "_")
}

fn parse_listed_on(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Blank CSV cells and JSON `null` take the field's default.
fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
