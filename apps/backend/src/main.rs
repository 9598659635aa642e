use actix_web::{web, App, HttpServer};
use bingo::config::{DbSettings, ServerConfig};
use bingo::infra::state::build_state;
use bingo::middleware::{RequestTrace, StructuredLogger, TraceSpan};
use bingo::routes;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    let server_config = match ServerConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            std::process::exit(1);
        }
    };
    let db_settings = match DbSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "invalid database configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %server_config.host,
        port = server_config.port,
        sample_range = ?server_config.sample_range,
        db_kind = ?db_settings.kind,
        "starting bingo"
    );

    let app_state = match build_state()
        .with_db(db_settings)
        .with_sample_range(server_config.sample_range)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            std::process::exit(1);
        }
    };

    info!("database ready");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server_config.host.as_str(), server_config.port))?
    .run()
    .await
}
