//! Catalog file source.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::instrument;

/// The catalog file couldn't be read.
#[derive(Debug, Error)]
#[error("could not read catalog file {path}: {source}")]
pub struct CatalogSourceError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Reads the catalog CSV off disk, fully, on every call.
///
/// No caching and no invalidation on purpose: the file is small, requests
/// are independent, and a swapped file shows up on the next request.
#[derive(Debug, Clone)]
pub struct FileCatalogSource {
    path: PathBuf,
}

impl FileCatalogSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load(&self) -> Result<String, CatalogSourceError> {
        tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| CatalogSourceError {
                path: self.path.clone(),
                source,
            })
    }
}
