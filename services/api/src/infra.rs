use metrics_exporter_prometheus::PrometheusHandle;
use realty_core::config::CatalogConfig;
use realty_core::error::AppError;
use realty_core::listings::{PropertyCatalog, SearchCache};
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) search: Arc<SearchCache>,
}

impl AppState {
    pub(crate) fn new(
        metrics: PrometheusHandle,
        catalog: PropertyCatalog,
        cache_capacity: usize,
    ) -> Self {
        Self {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(metrics),
            search: Arc::new(SearchCache::new(Arc::new(catalog), cache_capacity)),
        }
    }
}

/// Loads the configured catalog, or an empty one when no path is set.
pub(crate) fn load_catalog(config: &CatalogConfig) -> Result<PropertyCatalog, AppError> {
    match &config.path {
        Some(path) => load_catalog_from_path(path),
        None => {
            info!("no REALTY_CATALOG_PATH configured, serving an empty catalog");
            Ok(PropertyCatalog::default())
        }
    }
}

pub(crate) fn load_catalog_from_path(path: &Path) -> Result<PropertyCatalog, AppError> {
    let catalog = PropertyCatalog::from_path(path)?;
    info!(path = %path.display(), listings = catalog.len(), "catalog ready");
    Ok(catalog)
}
