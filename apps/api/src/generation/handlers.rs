//! Axum route handlers for the Generation API.

use axum::Json;
use serde::Deserialize;
use tracing::info;

use crate::errors::{ApiJson, AppError};
use crate::generation::generator::generate_posts;
use crate::generation::tone::Tone;
use crate::models::post::GenerationResult;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Request body for post generation. `tone` defaults to professional.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    pub idea: String,
    #[serde(default)]
    pub tone: Tone,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate
///
/// Returns one LinkedIn, Twitter/X and Instagram post for the idea.
/// Ideas shorter than 3 characters after trimming are rejected with 400.
pub async fn handle_generate(
    ApiJson(request): ApiJson<GenerateRequest>,
) -> Result<Json<GenerationResult>, AppError> {
    let result = generate_posts(&request.idea, request.tone)?;

    info!(
        "Generated posts (tone={}, idea_chars={})",
        request.tone,
        request.idea.trim().chars().count()
    );

    Ok(Json(result))
}
