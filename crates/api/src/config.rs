//! Process configuration, read once at startup.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration from environment variables, with dev defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Listen address (`STOREFRONT_ADDR`).
    pub addr: SocketAddr,
    /// Path to the catalog CSV (`STOREFRONT_CATALOG_CSV`).
    pub catalog_csv: PathBuf,
    /// Postgres connection string (`STOREFRONT_DATABASE_URL`). When unset,
    /// events are kept in memory and lost on exit.
    pub database_url: Option<String>,
    /// Directory of built browser-client assets (`STOREFRONT_STATIC_DIR`).
    /// When unset, no static files are served.
    pub static_dir: Option<PathBuf>,
}

const DEFAULT_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_CATALOG_CSV: &str = "data/Online-eCommerce.csv";

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = match std::env::var("STOREFRONT_ADDR") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("invalid STOREFRONT_ADDR {raw:?}: {e}"))?,
            Err(_) => DEFAULT_ADDR.parse().expect("default addr parses"),
        };

        let catalog_csv = std::env::var("STOREFRONT_CATALOG_CSV")
            .map(PathBuf::from)
            .unwrap_or_else(|_| {
                tracing::warn!(
                    default = DEFAULT_CATALOG_CSV,
                    "STOREFRONT_CATALOG_CSV not set; using default path"
                );
                PathBuf::from(DEFAULT_CATALOG_CSV)
            });

        let database_url = std::env::var("STOREFRONT_DATABASE_URL").ok();
        if database_url.is_none() {
            tracing::warn!("STOREFRONT_DATABASE_URL not set; events will be kept in memory");
        }

        let static_dir = std::env::var("STOREFRONT_STATIC_DIR").ok().map(PathBuf::from);

        Ok(Self {
            addr,
            catalog_csv,
            database_url,
            static_dir,
        })
    }
}
