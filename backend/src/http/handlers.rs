//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer. Chart computation is synchronous and in-memory, so
//! handlers call the services directly.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    response::Html,
    Json,
};

use super::dto::{
    Figure, HealthResponse, LayoutSpec, PieChart, PieQuery, ScatterChart, SelectionQuery,
    SelectionRequest, SelectionResponse, SitesResponse,
};
use super::error::AppError;
use super::page::DASHBOARD_HTML;
use super::state::AppState;
use crate::models::{PayloadRange, Selection};
use crate::services::{self, InputId, SelectionEvent};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Query string extraction result; rejections become JSON 400s.
type QueryResult<T> = Result<Query<T>, QueryRejection>;

fn query_params<T>(query: QueryResult<T>) -> Result<T, AppError> {
    query
        .map(|Query(params)| params)
        .map_err(|e| AppError::BadRequest(e.body_text()))
}

// =============================================================================
// Page + Health Check
// =============================================================================

/// GET /
///
/// Serve the dashboard page.
pub async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        records: state.dataset().len(),
    }))
}

// =============================================================================
// Layout + Sites
// =============================================================================

/// GET /v1/layout
///
/// Component tree of the dashboard: heading, dropdown, slider, chart placeholders.
pub async fn get_layout(State(state): State<AppState>) -> HandlerResult<LayoutSpec> {
    Ok(Json(services::build_layout(state.dataset())))
}

/// GET /v1/sites
///
/// Distinct launch sites and their success rates.
pub async fn get_sites(State(state): State<AppState>) -> HandlerResult<SitesResponse> {
    let dataset = state.dataset();
    Ok(Json(SitesResponse {
        sites: dataset.sites().iter().map(|s| s.to_string()).collect(),
        summaries: services::site_success_rates(dataset.records()),
    }))
}

// =============================================================================
// Chart Endpoints
// =============================================================================

/// GET /v1/charts/pie?site=
pub async fn get_pie_chart(
    State(state): State<AppState>,
    query: QueryResult<PieQuery>,
) -> HandlerResult<PieChart> {
    let query = query_params(query)?;
    Ok(Json(services::pie_chart(state.dataset(), &query.site_filter())))
}

/// GET /v1/charts/scatter?site=&payload_min=&payload_max=
pub async fn get_scatter_chart(
    State(state): State<AppState>,
    query: QueryResult<SelectionQuery>,
) -> HandlerResult<ScatterChart> {
    let query = query_params(query)?;
    let selection = Selection::new(query.site_filter(), query.payload_range(state.dataset())?);
    Ok(Json(services::scatter_chart(state.dataset(), &selection)))
}

/// GET /v1/outputs/{output_id}?site=&payload_min=&payload_max=
///
/// Render one registered chart output by its placeholder id.
pub async fn get_output(
    State(state): State<AppState>,
    Path(output_id): Path<String>,
    query: QueryResult<SelectionQuery>,
) -> HandlerResult<Figure> {
    let query = query_params(query)?;
    let selection = Selection::new(query.site_filter(), query.payload_range(state.dataset())?);
    state
        .dashboard
        .render_output(&output_id, &selection)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Output {} not found", output_id)))
}

// =============================================================================
// Selection Dispatch
// =============================================================================

/// POST /v1/selection
///
/// Apply a selection change and return the figures of every affected chart.
pub async fn post_selection(
    State(state): State<AppState>,
    payload: Result<Json<SelectionRequest>, JsonRejection>,
) -> HandlerResult<SelectionResponse> {
    let Json(request) = payload.map_err(|e| AppError::BadRequest(e.body_text()))?;

    let payload_range = PayloadRange::try_from(request.payload_range)?;
    let changed = request.changed.unwrap_or_else(|| InputId::ALL.to_vec());
    let event = SelectionEvent::new(Selection::new(request.site, payload_range), changed);

    tracing::debug!(
        site = %event.selection.site,
        payload = %event.selection.payload_range,
        "selection change"
    );

    Ok(Json(SelectionResponse {
        updates: state.dashboard.dispatch(&event),
    }))
}
