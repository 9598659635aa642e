//! `GET /health`: liveness plus a look at the bingo store.

use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

use crate::db::require_db;
use crate::domain::SampleRange;
use crate::error::AppError;
use crate::repos::games;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    sample_range: &'static str,
    #[serde(flatten)]
    store: StoreReport,
    time: String,
}

/// Store status, flattened into the response.
#[derive(Debug, Serialize)]
struct StoreReport {
    db: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    games: Option<u64>,
}

impl StoreReport {
    fn failed(detail: String) -> Self {
        Self {
            db: "error",
            db_error: Some(detail),
            migrations: "unknown".to_string(),
            games: None,
        }
    }
}

async fn probe_store(db: &DatabaseConnection) -> StoreReport {
    let ping = Statement::from_string(db.get_database_backend(), "SELECT 1".to_string());
    if let Err(e) = db.query_one(ping).await {
        return StoreReport::failed(format!("DB query failed: {e}"));
    }

    let migrations = match get_latest_migration_version(db).await {
        Ok(Some(version)) => version,
        Ok(None) => "no_migrations".to_string(),
        Err(_) => "unknown".to_string(),
    };

    StoreReport {
        db: "ok",
        db_error: None,
        migrations,
        games: games::count_games(db).await.ok(),
    }
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let store = match require_db(&app_state) {
        Ok(db) => probe_store(db).await,
        Err(e) => StoreReport::failed(format!("DB unavailable: {e}")),
    };

    let time = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: if store.db_error.is_none() { "ok" } else { "degraded" },
        app_version: env!("CARGO_PKG_VERSION"),
        sample_range: match app_state.sample_range {
            SampleRange::Legacy => "legacy",
            SampleRange::Full => "full",
        },
        store,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
