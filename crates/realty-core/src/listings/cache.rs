use super::catalog::PropertyCatalog;
use super::criteria::FilterCriteria;
use super::domain::Property;
use super::filter::matching_indices;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

/// Memoizes search results for one catalog snapshot, keyed by the criteria.
///
/// Holds at most `capacity` entries and evicts the oldest insertion first.
/// A capacity of zero disables memoization.
#[derive(Debug)]
pub struct SearchCache {
    catalog: Arc<PropertyCatalog>,
    capacity: usize,
    entries: Mutex<CacheEntries>,
}

#[derive(Debug, Default)]
struct CacheEntries {
    results: HashMap<FilterCriteria, Arc<[usize]>>,
    insertion_order: VecDeque<FilterCriteria>,
}

impl SearchCache {
    pub fn new(catalog: Arc<PropertyCatalog>, capacity: usize) -> Self {
        Self {
            catalog,
            capacity,
            entries: Mutex::new(CacheEntries::default()),
        }
    }

    pub fn catalog(&self) -> &PropertyCatalog {
        &self.catalog
    }

    pub fn len(&self) -> usize {
        self.lock().results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn search(&self, criteria: &FilterCriteria) -> Vec<&Property> {
        let properties = self.catalog.properties();
        self.indices(criteria)
            .iter()
            .map(|&index| &properties[index])
            .collect()
    }

    fn indices(&self, criteria: &FilterCriteria) -> Arc<[usize]> {
        if let Some(hit) = self.lock().results.get(criteria) {
            debug!(matches = hit.len(), "search cache hit");
            return Arc::clone(hit);
        }

        let computed: Arc<[usize]> = matching_indices(self.catalog.properties(), criteria).into();
        debug!(matches = computed.len(), "search cache miss");

        if self.capacity > 0 {
            let mut entries = self.lock();
            if !entries.results.contains_key(criteria) {
                while entries.results.len() >= self.capacity {
                    match entries.insertion_order.pop_front() {
                        Some(oldest) => {
                            entries.results.remove(&oldest);
                        }
                        None => break,
                    }
                }
                entries.insertion_order.push_back(criteria.clone());
                entries
                    .results
                    .insert(criteria.clone(), Arc::clone(&computed));
            }
        }

        computed
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, CacheEntries> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::criteria::ListingIntent;
    use crate::listings::domain::ListingRecord;

    fn catalog() -> Arc<PropertyCatalog> {
        let records = (1..=6).map(|id| ListingRecord {
            id,
            location: Some(format!("Town {id}, Andhra Pradesh")),
            type_label: Some("Apartment".to_string()),
            status: Some(if id % 2 == 0 { "For Rent" } else { "For Sale" }.to_string()),
            bhk: (id % 4) as u8,
            price_value: id * 1_000_000,
            ..ListingRecord::default()
        });
        Arc::new(PropertyCatalog::from_records(records))
    }

    #[test]
    fn cached_results_match_direct_search() {
        let catalog = catalog();
        let cache = SearchCache::new(Arc::clone(&catalog), 4);
        let criteria = FilterCriteria::default().with_listing(ListingIntent::Rent);

        let direct: Vec<u64> = catalog.search(&criteria).iter().map(|p| p.id).collect();
        let first: Vec<u64> = cache.search(&criteria).iter().map(|p| p.id).collect();
        let second: Vec<u64> = cache.search(&criteria).iter().map(|p| p.id).collect();

        assert_eq!(direct, vec![2, 4, 6]);
        assert_eq!(first, direct);
        assert_eq!(second, direct);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn evicts_oldest_entry_when_full() {
        let cache = SearchCache::new(catalog(), 2);
        let cheap = FilterCriteria::default().with_price_range(None, Some(2_000_000));
        let mid = FilterCriteria::default().with_price_range(Some(2_000_000), None);
        let term = FilterCriteria::default().with_search("town 3");

        cache.search(&cheap);
        cache.search(&mid);
        cache.search(&term);

        assert_eq!(cache.len(), 2);
        let entries = cache.lock();
        assert!(!entries.results.contains_key(&cheap));
        assert!(entries.results.contains_key(&term));
    }

    #[test]
    fn zero_capacity_disables_memoization() {
        let cache = SearchCache::new(catalog(), 0);
        assert_eq!(cache.search(&FilterCriteria::default()).len(), 6);
        assert!(cache.is_empty());
    }
}
