use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use realty_core::error::AppError;
use realty_core::finance::{
    amortization_schedule, compute_affordability, compute_emi, compute_stamp_duty,
    AffordabilityInputs, AffordabilityQuote, AmortizationRow, BuyerGender, EmiQuote, PropertyUse,
    StampDutyQuote,
};
use realty_core::listings::{featured, sort_properties, FilterCriteria, Property, SortOrder};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::Ordering;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct SearchRequest {
    pub(crate) criteria: FilterCriteria,
    pub(crate) sort: SortOrder,
    pub(crate) limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ListingsResponse {
    pub(crate) total: usize,
    pub(crate) properties: Vec<Property>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmiRequest {
    pub(crate) principal: f64,
    pub(crate) annual_rate_percent: f64,
    pub(crate) tenure_years: u32,
    #[serde(default)]
    pub(crate) include_schedule: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct EmiResponse {
    #[serde(flatten)]
    pub(crate) quote: EmiQuote,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) schedule: Option<Vec<AmortizationRow>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StampDutyRequest {
    pub(crate) property_value: f64,
    pub(crate) state: String,
    #[serde(default, alias = "propertyType")]
    pub(crate) property_use: PropertyUse,
    #[serde(default)]
    pub(crate) buyer_gender: BuyerGender,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/properties/search", post(search_endpoint))
        .route("/api/v1/properties/featured", get(featured_endpoint))
        .route("/api/v1/calculators/emi", post(emi_endpoint))
        .route(
            "/api/v1/calculators/affordability",
            post(affordability_endpoint),
        )
        .route("/api/v1/calculators/stamp-duty", post(stamp_duty_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn search_endpoint(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ListingsResponse>, AppError> {
    let Json(request) = payload?;
    let mut results = state.search.search(&request.criteria);
    sort_properties(&mut results, request.sort);

    let total = results.len();
    let limit = request.limit.unwrap_or(total);
    let properties = results.into_iter().take(limit).cloned().collect();

    Ok(Json(ListingsResponse { total, properties }))
}

pub(crate) async fn featured_endpoint(State(state): State<AppState>) -> Json<ListingsResponse> {
    let properties: Vec<Property> = featured(state.search.catalog().properties())
        .into_iter()
        .cloned()
        .collect();

    Json(ListingsResponse {
        total: properties.len(),
        properties,
    })
}

pub(crate) async fn emi_endpoint(
    payload: Result<Json<EmiRequest>, JsonRejection>,
) -> Result<Json<EmiResponse>, AppError> {
    let Json(EmiRequest {
        principal,
        annual_rate_percent,
        tenure_years,
        include_schedule,
    }) = payload?;

    let quote = compute_emi(principal, annual_rate_percent, tenure_years)?;
    let schedule = if include_schedule {
        Some(amortization_schedule(
            principal,
            annual_rate_percent,
            tenure_years,
        )?)
    } else {
        None
    };

    Ok(Json(EmiResponse { quote, schedule }))
}

pub(crate) async fn affordability_endpoint(
    payload: Result<Json<AffordabilityInputs>, JsonRejection>,
) -> Result<Json<AffordabilityQuote>, AppError> {
    let Json(inputs) = payload?;
    Ok(Json(compute_affordability(&inputs)?))
}

pub(crate) async fn stamp_duty_endpoint(
    payload: Result<Json<StampDutyRequest>, JsonRejection>,
) -> Result<Json<StampDutyQuote>, AppError> {
    let Json(request) = payload?;
    let quote = compute_stamp_duty(
        request.property_value,
        &request.state,
        request.property_use,
        request.buyer_gender,
    )?;
    Ok(Json(quote))
}
