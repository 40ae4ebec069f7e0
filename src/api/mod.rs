//! HTTP API for destination search
//!
//! Exposes the search service as `GET /search?keyword=…` (nested under
//! `/api` by the web server). Error responses carry the user-facing
//! message the frontend renders inline.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::error::TravelRecError;
use crate::search::{SearchResponse, SearchService};

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub keyword: String,
}

/// User-facing error payload
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

pub fn router(service: Arc<SearchService>) -> Router {
    Router::new()
        .route("/search", get(search))
        .with_state(service)
}

async fn search(
    State(service): State<Arc<SearchService>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ApiError>)> {
    match service.search(&params.keyword).await {
        Ok(outcome) => Ok(Json(outcome.response)),
        Err(err) => {
            let status = match &err {
                TravelRecError::Validation { .. } => StatusCode::BAD_REQUEST,
                TravelRecError::Data { .. } => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            if status != StatusCode::BAD_REQUEST {
                error!("Search failed: {err}");
            }
            Err((
                status,
                Json(ApiError {
                    error: err.user_message(),
                }),
            ))
        }
    }
}
