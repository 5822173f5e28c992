//! Axum route handler for the Generation API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::search::handlers::ResultSource;
use crate::search::reference::reference_samples;
use crate::search::JobQuery;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub source: ResultSource,
    pub results: Vec<String>,
}

/// POST /api/generate
///
/// Picks reference samples from the sheet and asks the generator for ten
/// new descriptions. Generator failures surface as a 500 failure body.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<JobQuery>,
) -> Result<Json<GenerateResponse>, AppError> {
    // ThreadRng is !Send; keep it out of scope across the await below.
    let references = {
        let mut rng = rand::thread_rng();
        reference_samples(
            &state.catalog,
            &state.normalizer,
            &request.industry,
            &request.department,
            &mut rng,
        )
    };
    tracing::debug!("Using {} reference samples", references.len());

    let results = state.generator.generate(&request, &references).await?;

    Ok(Json(GenerateResponse {
        success: true,
        source: ResultSource::Ai,
        results,
    }))
}
