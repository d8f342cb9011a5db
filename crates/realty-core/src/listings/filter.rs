use super::criteria::{FilterCriteria, ListingIntent};
use super::domain::{ListingStatus, LookingTo, Property, PropertyKind};

/// Returns the listings matching every predicate, in catalog order.
///
/// Predicates run cheapest-first and stop at the first failure:
/// validity, category, listing intent, text search, bedrooms, furnishing, price.
/// Bedroom and furnishing checks only apply to residential searches.
pub fn filter_properties<'a>(
    properties: &'a [Property],
    criteria: &FilterCriteria,
) -> Vec<&'a Property> {
    let matcher = Matcher::new(criteria);
    properties
        .iter()
        .filter(|property| matcher.matches(property))
        .collect()
}

/// Index-returning variant used by the search cache.
pub(crate) fn matching_indices(properties: &[Property], criteria: &FilterCriteria) -> Vec<usize> {
    let matcher = Matcher::new(criteria);
    properties
        .iter()
        .enumerate()
        .filter(|(_, property)| matcher.matches(property))
        .map(|(index, _)| index)
        .collect()
}

struct Matcher<'c> {
    criteria: &'c FilterCriteria,
    needle: String,
}

impl<'c> Matcher<'c> {
    fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            criteria,
            needle: criteria.search_term.to_lowercase(),
        }
    }

    fn matches(&self, property: &Property) -> bool {
        property.is_listable()
            && property.property_kind == Some(self.criteria.property_type)
            && self.matches_intent(property)
            && self.matches_search(property)
            && self.matches_residential_filters(property)
            && self.matches_price(property)
    }

    fn matches_intent(&self, property: &Property) -> bool {
        if self.criteria.property_type.ignores_listing_intent() {
            return true;
        }

        match self.criteria.listing_type {
            ListingIntent::Any => true,
            ListingIntent::Buy | ListingIntent::Sell => {
                property.status == Some(ListingStatus::ForSale)
                    || property.looking_to == Some(LookingTo::Sell)
            }
            ListingIntent::Rent => {
                property.status == Some(ListingStatus::ForRent)
                    || property.looking_to == Some(LookingTo::Rent)
            }
        }
    }

    fn matches_search(&self, property: &Property) -> bool {
        if self.needle.is_empty() {
            return true;
        }

        let contains = |haystack: &str| haystack.to_lowercase().contains(&self.needle);
        contains(&property.location)
            || contains(&property.type_label)
            || property.building_name.as_deref().is_some_and(contains)
    }

    fn matches_residential_filters(&self, property: &Property) -> bool {
        if self.criteria.property_type != PropertyKind::Residential {
            return true;
        }

        let filters = &self.criteria.filters;
        filters.bhk.matches(property.bhk) && filters.furnishing.matches(property.furnishing)
    }

    fn matches_price(&self, property: &Property) -> bool {
        let filters = &self.criteria.filters;
        filters
            .min_price
            .map_or(true, |min| property.price_value >= min)
            && filters
                .max_price
                .map_or(true, |max| property.price_value <= max)
    }
}
