use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{DbKind, DbSettings};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once all retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(settings: &DbSettings) -> ConnectOptions {
    let mut opt = ConnectOptions::new(settings.url().to_owned());
    opt.max_connections(settings.max_connections)
        .acquire_timeout(settings.acquire_timeout)
        .sqlx_logging(false);
    if settings.kind == DbKind::SqliteMemory {
        // The database only exists while its single connection stays open.
        opt.min_connections(1);
    }
    opt
}

/// Open a pool for `settings`. Does NOT run migrations.
///
/// SQLite files get their parent directory created first; Postgres is
/// retried a few times so the app can start alongside its database.
pub async fn connect_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    if let Some(parent) = settings.sqlite_path().and_then(|p| p.parent()) {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config(format!(
                    "failed to create database directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }

    let opt = connect_options(settings);
    let kind = settings.kind;
    let redacted = settings.redacted_url();
    let connect = || {
        let opt = opt.clone();
        let redacted = redacted.clone();
        async move {
            Database::connect(opt).await.map_err(|e| {
                AppError::config(format!("failed to connect to {kind:?} database at {redacted}: {e}"))
            })
        }
    };

    match kind {
        DbKind::Postgres => {
            retry_connection(connect, CONNECT_ATTEMPTS, CONNECT_RETRY_INTERVAL_MS).await
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => connect().await,
    }
}

/// Single entrypoint for startup: connect, then apply pending migrations.
pub async fn bootstrap_db(settings: &DbSettings) -> Result<DatabaseConnection, AppError> {
    info!(
        db_kind = ?settings.kind,
        url = %settings.redacted_url(),
        pid = std::process::id(),
        "bootstrap=start"
    );

    let conn = connect_db(settings).await?;
    migrate(&conn, MigrationCommand::Up)
        .await
        .map_err(|e| AppError::config(format!("failed to apply migrations: {e}")))?;

    info!("bootstrap=ready");
    Ok(conn)
}
