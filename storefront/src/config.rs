// storefront/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

/// Where the catalog is read from at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogBackend {
  /// `products.json` / `categories.json` under a data directory.
  Json { data_dir: PathBuf },
  /// `products` / `categories` tables in a SQLite database.
  Sqlite { database_url: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
  Pretty,
  Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub catalog: CatalogBackend,
  /// Data directory for JSON catalogs and for seeding.
  pub data_dir: PathBuf,
  /// Write a demo catalog when the loaded one has no products.
  pub seed_catalog: bool,
  pub log_format: LogFormat,
}

impl AppConfig {
  /// Reads the process environment, after loading `.env` if present.
  pub fn from_env() -> Result<Self> {
    dotenv().ok();
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Builds the configuration from any variable lookup.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
    let get_or = |name: &str, default: &str| lookup(name).unwrap_or_else(|| default.to_string());

    let server_host = get_or("SERVER_HOST", "127.0.0.1");
    let server_port = get_or("SERVER_PORT", "8080")
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let data_dir = PathBuf::from(get_or("DATA_DIR", "data"));
    let catalog = match get_or("CATALOG_BACKEND", "json").to_ascii_lowercase().as_str() {
      "json" => CatalogBackend::Json {
        data_dir: data_dir.clone(),
      },
      "sqlite" => {
        let database_url = lookup("DATABASE_URL").ok_or_else(|| {
          AppError::Config("Missing environment variable 'DATABASE_URL' (required for CATALOG_BACKEND=sqlite)".to_string())
        })?;
        CatalogBackend::Sqlite { database_url }
      }
      other => {
        return Err(AppError::Config(format!(
          "Invalid CATALOG_BACKEND '{}': expected 'json' or 'sqlite'",
          other
        )))
      }
    };

    let seed_catalog = get_or("SEED_CATALOG", "false")
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_CATALOG value: {}", e)))?;

    let log_format = match get_or("LOG_FORMAT", "pretty").to_ascii_lowercase().as_str() {
      "pretty" => LogFormat::Pretty,
      "json" => LogFormat::Json,
      other => return Err(AppError::Config(format!("Invalid LOG_FORMAT '{}'", other))),
    };

    Ok(Self {
      server_host,
      server_port,
      catalog,
      data_dir,
      seed_catalog,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
