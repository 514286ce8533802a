// storefront/src/main.rs

use actix_web::{web as actix_data, App, HttpServer};
use storefront::config::{AppConfig, LogFormat};
use storefront::services::catalog_loader::open_catalog;
use storefront::state::AppState;
use storefront::web::configure_app_routes;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default level.
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let builder = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_span_events(FmtSpan::CLOSE);
  match format {
    LogFormat::Pretty => builder.init(),
    LogFormat::Json => builder.json().init(),
  }
}

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
  tracing::error!(error = %err, "{}", context);
  std::io::Error::new(std::io::ErrorKind::Other, format!("{}: {}", context, err))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  let config = AppConfig::from_env();
  init_tracing(config.as_ref().map(|c| c.log_format).unwrap_or(LogFormat::Pretty));

  tracing::info!("Starting storefront server...");
  let config = config.map_err(|e| startup_error("Failed to load application configuration", e))?;

  let catalog = open_catalog(&config)
    .await
    .map_err(|e| startup_error("Failed to load the catalog", e))?;
  tracing::info!(products = catalog.len(), "Catalog loaded.");

  let server_address = config.bind_address();
  let app_state = AppState::new(catalog, config).map_err(|e| startup_error("Failed to build application state", e))?;

  tracing::info!("Attempting to bind server to {}...", server_address);
  HttpServer::new(move || {
    App::new()
      .app_data(actix_data::Data::new(app_state.clone()))
      .wrap(tracing_actix_web::TracingLogger::default())
      .configure(configure_app_routes)
  })
  .bind(&server_address)?
  .run()
  .await
}
