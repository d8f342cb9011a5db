//! Property catalog ingestion and the marketplace search filter.

mod cache;
mod catalog;
pub mod criteria;
pub mod domain;
mod filter;
mod sort;

pub use cache::SearchCache;
pub use catalog::{CatalogError, PropertyCatalog};
pub use criteria::{
    BhkFilter, CriteriaError, FilterCriteria, FurnishingFilter, ListingIntent, RefineFilters,
};
pub use domain::{Furnishing, ListingRecord, ListingStatus, LookingTo, Property, PropertyKind};
pub use filter::filter_properties;
pub use sort::{featured, sort_properties, SortOrder};
