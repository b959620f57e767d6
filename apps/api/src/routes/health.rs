use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::db::{probe, DiagnosticReport};
use crate::state::AppState;

/// GET /
pub async fn root_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from the post generator backend!" }))
}

/// GET /api/hello
pub async fn hello_handler() -> Json<Value> {
    Json(json!({ "message": "Hello from the backend API!" }))
}

/// GET /test
/// Reports backend and database availability. Always 200; failures are described in the body.
pub async fn test_database_handler(State(state): State<AppState>) -> Json<DiagnosticReport> {
    Json(probe(state.db.as_ref(), &state.config).await)
}
