//! Service wiring: where the catalog source and the event log come from.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use storefront_catalog::{Catalog, CatalogError};
use storefront_infra::{
    CatalogSourceError, EventLog, FileCatalogSource, InMemoryEventLog, PostgresEventLog,
};

/// Catalog request failure, split the way the HTTP contract splits it.
#[derive(Debug, Error)]
pub enum CatalogFetchError {
    #[error(transparent)]
    Unavailable(#[from] CatalogSourceError),
    #[error(transparent)]
    Malformed(#[from] CatalogError),
}

/// Everything the handlers need, owned in one place and handed to the router
/// as an extension. No globals.
#[derive(Clone)]
pub struct AppServices {
    pub catalog: FileCatalogSource,
    pub event_log: Arc<dyn EventLog>,
}

impl AppServices {
    /// In-memory event log; used by tests and when no database is configured.
    pub fn in_memory(catalog_csv: impl Into<std::path::PathBuf>) -> Self {
        Self {
            catalog: FileCatalogSource::new(catalog_csv),
            event_log: Arc::new(InMemoryEventLog::new()),
        }
    }

    /// Postgres-backed event log. Connection failure here is fatal to
    /// startup by design; callers exit rather than limp along.
    pub async fn postgres(
        catalog_csv: impl Into<std::path::PathBuf>,
        database_url: &str,
    ) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        let log = PostgresEventLog::new(pool);
        log.ensure_schema().await?;
        Ok(Self {
            catalog: FileCatalogSource::new(catalog_csv),
            event_log: Arc::new(log),
        })
    }

    /// Read and parse the catalog, fresh from disk.
    ///
    /// Rows dropped for having an empty category are not silent: they show
    /// up as a warning with a count.
    pub async fn load_catalog(&self) -> Result<Catalog, CatalogFetchError> {
        let raw = self.catalog.load().await?;
        let parsed = Catalog::parse(&raw)?;
        if parsed.skipped_rows > 0 {
            tracing::warn!(
                skipped_rows = parsed.skipped_rows,
                path = %self.catalog.path().display(),
                "catalog rows dropped: empty category"
            );
        }
        Ok(parsed.catalog)
    }
}
