//! Storage backend selection.
//!
//! Both backends persist the same [`Series`] serde shape; which one a
//! command talks to is decided here from the configuration, behind the
//! [`SeriesStore`] capability trait.

use anyhow::{Context, Result};
use tp_core::{Series, SeriesId};

use crate::config::{Backend, Config};

/// The storage capability commands are written against.
pub trait SeriesStore {
    /// Creates or replaces a series by ID.
    fn save(&mut self, series: &Series) -> Result<()>;

    /// Fetches every stored series, oldest first.
    fn fetch_all(&self) -> Result<Vec<Series>>;

    /// Deletes a series. Returns whether it existed.
    fn delete(&mut self, id: &SeriesId) -> Result<bool>;
}

impl std::fmt::Debug for dyn SeriesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SeriesStore")
    }
}

impl SeriesStore for tp_db::Database {
    fn save(&mut self, series: &Series) -> Result<()> {
        self.save_series(series)
            .context("failed to save series to local store")
    }

    fn fetch_all(&self) -> Result<Vec<Series>> {
        self.fetch_all()
            .context("failed to read series from local store")
    }

    fn delete(&mut self, id: &SeriesId) -> Result<bool> {
        self.delete_series(id)
            .context("failed to delete series from local store")
    }
}

/// Remote document store driven by an owned single-threaded runtime, so
/// the synchronous command layer stays backend-agnostic.
pub struct RemoteStore {
    client: tp_remote::Client,
    runtime: tokio::runtime::Runtime,
}

impl RemoteStore {
    pub fn new(base_url: &str, token: &str) -> Result<Self> {
        let client =
            tp_remote::Client::new(base_url, token).context("failed to build remote client")?;
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        Ok(Self { client, runtime })
    }
}

impl SeriesStore for RemoteStore {
    fn save(&mut self, series: &Series) -> Result<()> {
        self.runtime
            .block_on(self.client.put_series(series))
            .context("failed to save series to remote store")
    }

    fn fetch_all(&self) -> Result<Vec<Series>> {
        let mut series = self
            .runtime
            .block_on(self.client.list_series())
            .context("failed to read series from remote store")?;
        // The remote store does not guarantee ordering.
        series.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.as_str().cmp(b.id.as_str()))
        });
        Ok(series)
    }

    fn delete(&mut self, id: &SeriesId) -> Result<bool> {
        self.runtime
            .block_on(self.client.delete_series(id))
            .context("failed to delete series from remote store")
    }
}

/// Opens the backend the configuration selects.
pub fn open_store(config: &Config) -> Result<Box<dyn SeriesStore>> {
    match config.backend {
        Backend::Local => {
            if let Some(parent) = config.database_path.parent() {
                std::fs::create_dir_all(parent)
                    .context("failed to create database directory")?;
            }
            let db = tp_db::Database::open(&config.database_path).with_context(|| {
                format!("failed to open {}", config.database_path.display())
            })?;
            tracing::debug!(path = %config.database_path.display(), "using local store");
            Ok(Box::new(db))
        }
        Backend::Remote => {
            let url = config
                .remote_url
                .as_deref()
                .context("remote backend selected but remote_url is not configured")?;
            let token = config
                .remote_token
                .as_deref()
                .context("remote backend selected but remote_token is not configured")?;
            tracing::debug!(url, "using remote store");
            Ok(Box::new(RemoteStore::new(url, token)?))
        }
    }
}
