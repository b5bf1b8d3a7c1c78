//! HTTP adapter over [`WidgetService`].
//!
//! JSON in, JSON out. Requests are validated here before the service is
//! called; every failure is rendered as an [`ApiErrorBody`].
//!
//! ```no_run
//! # async fn serve() -> std::io::Result<()> {
//! use std::sync::Arc;
//! use widgets::{InMemoryWidgetStore, WidgetService, api};
//!
//! let service = Arc::new(WidgetService::new(Arc::new(InMemoryWidgetStore::new())));
//! let app = api::router(service, api::ApiConfig::default());
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await?;
//! axum::serve(listener, app).await
//! # }
//! ```

mod error;
mod validation;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use serde::{Deserialize, Serialize};

pub use error::{ApiError, ApiErrorBody};
pub use validation::{ListQuery, ListRequest, ValidationError, WidgetBody};

use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::{Widget, WidgetId, WidgetService};

/// Paging limits for `GET /widgets`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiConfig {
    /// Page size when the client sends none
    pub default_page_size: usize,
    /// Largest page size a client may request
    pub max_page_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: MAX_PAGE_SIZE,
        }
    }
}

/// Shared application state
#[derive(Debug, Clone)]
struct AppState {
    service: Arc<WidgetService>,
    config: ApiConfig,
}

/// Response of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub widgets: usize,
}

/// Builds the widget routes plus `/health`.
pub fn router(service: Arc<WidgetService>, config: ApiConfig) -> Router {
    Router::new()
        .route("/widgets", get(list_widgets).post(create_widget))
        .route(
            "/widgets/{id}",
            get(get_widget).put(update_widget).delete(delete_widget),
        )
        .route("/health", get(health))
        .with_state(AppState { service, config })
}

fn parse_id(raw: &str) -> Result<WidgetId, ApiError> {
    raw.parse().map_err(|e: uuid::Error| {
        ApiError::bad_request(format!("Invalid widget id '{raw}'")).with_debug_message(e.to_string())
    })
}

type ApiResult<T> = Result<T, ApiError>;

/// Handler for POST /widgets
async fn create_widget(
    State(state): State<AppState>,
    body: Result<Json<WidgetBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Widget>)> {
    let Json(body) = body?;
    let widget = state.service.add(body.validate()?)?;
    Ok((StatusCode::CREATED, Json(widget)))
}

/// Handler for GET /widgets/{id}
async fn get_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Widget>> {
    let id = parse_id(&id)?;
    Ok(Json(state.service.get_by_id(&id)?))
}

/// Handler for GET /widgets
async fn list_widgets(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<Widget>>> {
    let Query(query) = query?;
    let request = query.validate(&state.config)?;
    Ok(Json(state.service.get_all(
        request.page,
        request.size,
        Some(&request.filter),
    )))
}

/// Handler for PUT /widgets/{id}
async fn update_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<WidgetBody>, JsonRejection>,
) -> ApiResult<Json<Widget>> {
    let id = parse_id(&id)?;
    let Json(body) = body?;
    Ok(Json(state.service.update_by_id(&id, body.validate()?)?))
}

/// Handler for DELETE /widgets/{id}
async fn delete_widget(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    let id = parse_id(&id)?;
    state.service.delete_by_id(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /health - Health check endpoint
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        widgets: state.service.count(),
    })
}
