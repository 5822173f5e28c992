//! Axum route handler for the Search API.

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::search::{search, JobQuery};
use crate::state::AppState;

/// Prompt shown by the front-end before it calls the generate endpoint.
pub const NO_MATCH_MESSAGE: &str =
    "該当するサンプルが見つかりませんでした。AIで生成しますか？（数秒かかります）";

/// Where the returned descriptions came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ResultSource {
    #[serde(rename = "database")]
    Database,
    #[serde(rename = "none")]
    NoMatch,
    #[serde(rename = "ai")]
    Ai,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub success: bool,
    pub source: ResultSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// POST /api/search
///
/// Looks the query up in the reference sheet. A miss is still a success;
/// it carries `source: "none"` so the client can offer generation.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(request): Json<JobQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    let result = search(&state.catalog, &state.normalizer, &request);

    if result.is_empty() {
        info!("No sheet match for position='{}'", request.position);
        return Ok(Json(SearchResponse {
            success: true,
            source: ResultSource::NoMatch,
            count: None,
            results: None,
            message: Some(NO_MATCH_MESSAGE.to_string()),
        }));
    }

    info!(
        "Sheet match: {} rows ({} returned)",
        result.total,
        result.descriptions.len()
    );
    Ok(Json(SearchResponse {
        success: true,
        source: ResultSource::Database,
        count: Some(result.total),
        results: Some(result.descriptions),
        message: None,
    }))
}
