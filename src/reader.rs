//! Public entry points: bind CSV from a stream or a file.
//!
//! The output collection is a caller-owned `Vec<E>` with `E: From<R>`, so the
//! element form is picked by the caller's collection type: `Vec<R>` stores
//! records by value, `Vec<Box<R>>` (or `Rc`/`Arc`) stores owned handles.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::binder::{BindStats, BindStrategy, RowBinder};
use crate::config::ReaderConfig;
use crate::record::Record;
use crate::tokenizer::read_all_rows;
use crate::{Error, Result};

/// Reads CSV input and binds it into typed records
#[derive(Debug, Clone, Default)]
pub struct CsvReader {
    config: ReaderConfig,
}

impl CsvReader {
    /// Reader with the default comma-separated dialect
    pub fn new() -> Self {
        Self::default()
    }

    /// Reader with a validated custom configuration
    pub fn with_config(config: ReaderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Positional binding: rows taken verbatim, no header
    pub fn bind_ordered<R, E>(&self, input: impl Read, out: &mut Vec<E>) -> Result<BindStats>
    where
        R: Record + Default,
        E: From<R>,
    {
        self.bind(BindStrategy::Positional, input, R::default, out)
    }

    /// Name-based binding: first row is the header
    pub fn bind_named<R, E>(&self, input: impl Read, out: &mut Vec<E>) -> Result<BindStats>
    where
        R: Record + Default,
        E: From<R>,
    {
        self.bind(BindStrategy::ByName, input, R::default, out)
    }

    pub fn bind_ordered_from_file<R, E>(
        &self,
        path: impl AsRef<Path>,
        out: &mut Vec<E>,
    ) -> Result<BindStats>
    where
        R: Record + Default,
        E: From<R>,
    {
        self.bind_file(BindStrategy::Positional, path, R::default, out)
    }

    pub fn bind_named_from_file<R, E>(
        &self,
        path: impl AsRef<Path>,
        out: &mut Vec<E>,
    ) -> Result<BindStats>
    where
        R: Record + Default,
        E: From<R>,
    {
        self.bind_file(BindStrategy::ByName, path, R::default, out)
    }

    pub async fn bind_ordered_from_file_async<R, E>(
        &self,
        path: impl AsRef<Path>,
        out: &mut Vec<E>,
    ) -> Result<BindStats>
    where
        R: Record + Default,
        E: From<R>,
    {
        self.bind_file_async(BindStrategy::Positional, path, R::default, out)
            .await
    }

    pub async fn bind_named_from_file_async<R, E>(
        &self,
        path: impl AsRef<Path>,
        out: &mut Vec<E>,
    ) -> Result<BindStats>
    where
        R: Record + Default,
        E: From<R>,
    {
        self.bind_file_async(BindStrategy::ByName, path, R::default, out)
            .await
    }

    /// Read every row from `input`, then bind with `strategy`.
    ///
    /// `make` yields a fresh zero-valued record per row, which lets runtime
    /// shapes such as [`crate::DynamicRecord`] share one schema.
    pub fn bind<R, E, F>(
        &self,
        strategy: BindStrategy,
        input: impl Read,
        make: F,
        out: &mut Vec<E>,
    ) -> Result<BindStats>
    where
        R: Record,
        E: From<R>,
        F: FnMut() -> R,
    {
        let rows = read_all_rows(input, &self.config)?;
        RowBinder::new(strategy, self.config.unsupported_kinds).bind(&rows, make, out)
    }

    /// Open `path` and forward to [`CsvReader::bind`]
    pub fn bind_file<R, E, F>(
        &self,
        strategy: BindStrategy,
        path: impl AsRef<Path>,
        make: F,
        out: &mut Vec<E>,
    ) -> Result<BindStats>
    where
        R: Record,
        E: From<R>,
        F: FnMut() -> R,
    {
        let path = path.as_ref();
        info!("Binding CSV file ({}): {}", strategy, path.display());

        let file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        let stats = self.bind(strategy, file, make, out)?;
        info!(
            "Bound {} records from {}",
            stats.records_bound,
            path.display()
        );
        Ok(stats)
    }

    /// Read `path` with `tokio::fs` and forward to [`CsvReader::bind`]
    pub async fn bind_file_async<R, E, F>(
        &self,
        strategy: BindStrategy,
        path: impl AsRef<Path>,
        make: F,
        out: &mut Vec<E>,
    ) -> Result<BindStats>
    where
        R: Record,
        E: From<R>,
        F: FnMut() -> R,
    {
        let path = path.as_ref();
        info!("Binding CSV file ({}): {}", strategy, path.display());

        let content = tokio::fs::read(path)
            .await
            .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;

        let stats = self.bind(strategy, content.as_slice(), make, out)?;
        info!(
            "Bound {} records from {}",
            stats.records_bound,
            path.display()
        );
        Ok(stats)
    }
}
