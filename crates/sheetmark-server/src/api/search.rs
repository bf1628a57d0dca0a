//! `POST /api/search` handler.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::middleware::RequestId;

/// Message returned for every failed search; details stay in the logs.
const SEARCH_FAILED: &str = "Error en la búsqueda";

#[derive(Debug, Deserialize)]
struct SearchRequest {
    query: String,
}

#[derive(Debug, Serialize)]
struct SearchFailed {
    error: &'static str,
}

/// Runs a brand search and returns the matching records as a bare JSON array.
///
/// The body is decoded by hand rather than through the `Json` extractor so a
/// malformed request gets the same generic 500 as any other failure.
pub(super) async fn search_brands(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    body: Bytes,
) -> Response {
    let request: SearchRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(e) => {
            tracing::error!(request_id = %req_id.0, error = %e, "invalid search request body");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(SearchFailed {
                    error: SEARCH_FAILED,
                }),
            )
                .into_response();
        }
    };

    tracing::info!(request_id = %req_id.0, query = %request.query, "search requested");
    let records = state.search.search(&request.query).await;
    tracing::info!(request_id = %req_id.0, results = records.len(), "search finished");

    (StatusCode::OK, Json(records)).into_response()
}
