//! HTTP handlers for the REST API.
//!
//! Each handler resolves the request against the current dataset snapshot,
//! runs the filter engine once and hands the result to a view builder. The
//! synchronous core runs inside `spawn_blocking`.

use axum::{extract::State, Json};

use super::dto::{
    BasicSearchRequest, DatasetInfo, FacetIndex, FlowDiagram, HealthResponse, RelationshipGraph,
    ResultsTable, ScatterData, ScatterRequest, SelectionRequest, TimelineData, YearlyCounts,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::DatasetStore;
use crate::models::Record;
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Run synchronous work off the async runtime.
async fn run_blocking<T, F>(work: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(work)
        .await
        .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))?
}

/// Records of the current snapshot matching `request`.
///
/// Selections naming values outside the facet index are rejected. An empty
/// working set has no facet index and yields no records.
fn select(store: &DatasetStore, request: SelectionRequest) -> Result<Vec<Record>, AppError> {
    let dataset = store.snapshot()?;
    if dataset.records.is_empty() {
        return Ok(Vec::new());
    }
    let index = services::facets(&dataset.records)?;
    let selection = request.into_selection(&index);
    index.validate(&selection)?;
    Ok(services::filter_records(&dataset.records, &selection))
}

/// Shared body of the view endpoints.
async fn view<T, F>(state: AppState, request: SelectionRequest, build: F) -> HandlerResult<T>
where
    F: FnOnce(&[Record]) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let store = state.store;
    let data = run_blocking(move || {
        let filtered = select(&store, request)?;
        build(&filtered)
    })
    .await?;
    Ok(Json(data))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Does not trigger a dataset load.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let records = state.store.current().map(|d| d.records.len());

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset: if records.is_some() { "loaded" } else { "not_loaded" }.to_string(),
        records,
    }))
}

// =============================================================================
// Facets and records
// =============================================================================

/// GET /v1/facets
pub async fn get_facets(State(state): State<AppState>) -> HandlerResult<FacetIndex> {
    let store = state.store;
    let index = run_blocking(move || {
        let dataset = store.snapshot()?;
        Ok(services::facets(&dataset.records)?)
    })
    .await?;
    Ok(Json(index))
}

/// POST /v1/records
///
/// Advanced (multi-facet) filtering.
pub async fn filter_records(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<ResultsTable> {
    view(state, request, |records| {
        Ok(services::results_table(records.to_vec()))
    })
    .await
}

/// POST /v1/search
///
/// Basic (single-facet) search through the same filter engine.
pub async fn basic_search(
    State(state): State<AppState>,
    Json(request): Json<BasicSearchRequest>,
) -> HandlerResult<ResultsTable> {
    let store = state.store;
    let table = run_blocking(move || {
        let dataset = store.snapshot()?;
        if dataset.records.is_empty() {
            return Ok(services::results_table(Vec::new()));
        }
        let index = services::facets(&dataset.records)?;
        let selection = request
            .into_search(&index)
            .into_selection(index.full_range());
        index.validate(&selection)?;
        let matches = services::filter_records(&dataset.records, &selection);
        Ok(services::results_table(matches))
    })
    .await?;
    Ok(Json(table))
}

// =============================================================================
// Views
// =============================================================================

/// POST /v1/views/scatter
pub async fn scatter_view(
    State(state): State<AppState>,
    Json(request): Json<ScatterRequest>,
) -> HandlerResult<ScatterData> {
    let ScatterRequest {
        selection,
        x_field,
        y_field,
        color_field,
    } = request;
    view(state, selection, move |records| {
        Ok(services::build_scatter(records, &x_field, &y_field, &color_field)?)
    })
    .await
}

/// POST /v1/views/graph
pub async fn graph_view(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<RelationshipGraph> {
    view(state, request, |records| Ok(services::build_graph(records))).await
}

/// POST /v1/views/flow
pub async fn flow_view(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<FlowDiagram> {
    view(state, request, |records| Ok(services::build_flow(records))).await
}

/// POST /v1/views/timeline
pub async fn timeline_view(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<TimelineData> {
    view(state, request, |records| Ok(services::build_timeline(records)?)).await
}

/// POST /v1/views/yearly
pub async fn yearly_view(
    State(state): State<AppState>,
    Json(request): Json<SelectionRequest>,
) -> HandlerResult<YearlyCounts> {
    view(state, request, |records| Ok(services::build_yearly_counts(records))).await
}

// =============================================================================
// Dataset
// =============================================================================

/// POST /v1/dataset/reload
///
/// Re-read the source and swap the snapshot.
pub async fn reload_dataset(State(state): State<AppState>) -> HandlerResult<DatasetInfo> {
    let store = state.store;
    let info = run_blocking(move || Ok(store.reload()?.info())).await?;
    log::info!(
        "Dataset reloaded: {} records, checksum {}",
        info.records,
        info.checksum
    );
    Ok(Json(info))
}
