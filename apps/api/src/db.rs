use anyhow::Result;
use serde::Serialize;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::{info, warn};

use crate::config::Config;

/// Maximum number of table names reported by the diagnostic probe.
const MAX_LISTED_TABLES: i64 = 10;

/// Creates a PostgreSQL pool without connecting; the first query opens a connection.
pub fn create_lazy_pool(database_url: &str) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .acquire_timeout(std::time::Duration::from_secs(3))
        .connect_lazy(database_url)?;

    info!("PostgreSQL pool configured (lazy)");
    Ok(pool)
}

/// Builds the optional diagnostic pool. A bad `DATABASE_URL` is logged and
/// leaves the pool unset so the rest of the service still starts.
pub fn pool_from_config(config: &Config) -> Option<PgPool> {
    let Some(url) = config.database_url.as_deref() else {
        info!("DATABASE_URL not set; /test will report the database as unavailable");
        return None;
    };

    match create_lazy_pool(url) {
        Ok(pool) => Some(pool),
        Err(e) => {
            warn!("Ignoring unusable DATABASE_URL: {e}");
            None
        }
    }
}

/// Availability report returned by `GET /test`.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

impl DiagnosticReport {
    fn new(config: &Config) -> Self {
        DiagnosticReport {
            backend: "✅ Running".to_string(),
            database: "❌ Not Available".to_string(),
            database_url: set_marker(config.database_url.is_some()),
            database_name: set_marker(config.database_name.is_some()),
            connection_status: "Not Connected".to_string(),
            collections: Vec::new(),
        }
    }
}

fn set_marker(is_set: bool) -> String {
    let marker = if is_set { "✅ Set" } else { "❌ Not Set" };
    marker.to_string()
}

/// Probes the optional database. Never fails: problems are reported in the payload.
pub async fn probe(pool: Option<&PgPool>, config: &Config) -> DiagnosticReport {
    let mut report = DiagnosticReport::new(config);

    let Some(pool) = pool else {
        if config.database_url.is_some() {
            report.database = "⚠️  Available but not initialized".to_string();
        }
        return report;
    };

    match list_tables(pool).await {
        Ok(tables) => {
            report.database = "✅ Connected & Working".to_string();
            report.connection_status = "Connected".to_string();
            report.collections = tables;
        }
        Err(e) => {
            warn!("Database probe failed: {e}");
            let short: String = e.to_string().chars().take(50).collect();
            report.database = format!("⚠️  Connected but Error: {short}");
        }
    }

    report
}

async fn list_tables(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
    sqlx::query_scalar::<_, String>(
        "SELECT table_name::text FROM information_schema.tables \
         WHERE table_schema = 'public' ORDER BY table_name LIMIT $1",
    )
    .bind(MAX_LISTED_TABLES)
    .fetch_all(pool)
    .await
}
