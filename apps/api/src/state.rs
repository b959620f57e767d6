use sqlx::PgPool;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Lazily-connecting pool, present only when `DATABASE_URL` is configured.
    /// Used by the `/test` diagnostic, never by generation.
    pub db: Option<PgPool>,
    pub config: Config,
}
