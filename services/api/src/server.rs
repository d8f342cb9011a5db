use crate::cli::ServeArgs;
use crate::infra::{load_catalog, AppState};
use crate::routes::router;
use axum_prometheus::PrometheusMetricLayer;
use realty_core::config::AppConfig;
use realty_core::error::AppError;
use realty_core::telemetry;
use std::sync::atomic::Ordering;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(&config.catalog)?;
    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let state = AppState::new(prometheus_handle, catalog, config.catalog.cache_capacity);
    let readiness_flag = state.readiness.clone();

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "realty marketplace api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
