//! Request handlers.
//!
//! Each handler walks one request from received to responded: validate the
//! inputs, call the repository, serialize the result. Failures are returned
//! as [`ApiError`] and rendered by its `IntoResponse` impl.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{Method, StatusCode, Uri};
use axum::Json;
use fruitstand_protocol::{
    parse_fruit_id, validate_fruit_json, Fruit, MalformedIdError, PROTOCOL_VERSION,
};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// POST /fruits
pub async fn create_fruit(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Fruit>), ApiError> {
    let input = validate_fruit_json(&body).map_err(|err| {
        warn!(error = %err, "rejected fruit payload");
        err
    })?;

    let fruit = state
        .repository()
        .write()
        .await
        .create(input)
        .map_err(|err| {
            warn!(error = %err, "fruit not created");
            err
        })?;

    info!(id = %fruit.id, name = %fruit.name, "fruit created");
    Ok((StatusCode::CREATED, Json(fruit)))
}

/// GET /fruits
pub async fn list_fruits(State(state): State<AppState>) -> Json<Vec<Fruit>> {
    let fruits = state.repository().read().await.list().to_vec();
    debug!(count = fruits.len(), "listing fruits");
    Json(fruits)
}

/// GET /fruits/:id
pub async fn get_fruit(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Fruit>, ApiError> {
    let id = parse_fruit_id(&raw_id)?;
    debug!(%id, "looking up fruit");

    let repository = state.repository().read().await;
    let fruit = repository.get_by_id(id)?;
    Ok(Json(fruit.clone()))
}

/// GET /fruits/ (empty id segment)
pub async fn get_fruit_without_id() -> ApiError {
    ApiError::MalformedId(MalformedIdError::Empty)
}

/// Health report
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub protocol_version: &'static str,
    pub fruits: usize,
    pub last_id: Option<u64>,
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = state.repository().read().await.stats();
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        protocol_version: PROTOCOL_VERSION,
        fruits: stats.total_fruits,
        last_id: stats.last_id.map(|id| id.get()),
    })
}

/// Fallback for unknown paths
pub async fn route_not_found(method: Method, uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
