pub mod health;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use crate::errors::AppError;
use crate::generation::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/", get(health::root_handler))
        .route("/api/hello", get(health::hello_handler))
        .route("/test", get(health::test_database_handler))
        .route("/api/generate", post(handlers::handle_generate))
        .with_state(state);

    with_middleware(router)
}

/// Panic capture, request tracing, and CORS (any origin, method, header; credentials allowed).
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::very_permissive())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic payload");

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
