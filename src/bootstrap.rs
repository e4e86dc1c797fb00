//! One-shot catalog initialization.
//!
//! `CatalogCell` owns the unloaded -> loaded transition: the first successful
//! `get_or_load` reads the file, later calls hand back the same snapshot
//! without touching the filesystem. Applications keep the cell (or the
//! `&CourseCatalog` it returns) in their own state and pass it to consumers.

use crate::catalog::CourseCatalog;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use std::sync::{Mutex, OnceLock};
use tracing::debug;

#[derive(Debug, Default)]
pub struct CatalogCell {
    catalog: OnceLock<CourseCatalog>,
    init: Mutex<()>,
}

impl CatalogCell {
    pub const fn new() -> Self {
        Self {
            catalog: OnceLock::new(),
            init: Mutex::new(()),
        }
    }

    /// The loaded catalog, or `None` before the first successful load.
    pub fn get(&self) -> Option<&CourseCatalog> {
        self.catalog.get()
    }

    /// Load the catalog described by `config` unless one is already loaded.
    ///
    /// Concurrent first callers are serialized so the file is read once. A
    /// failed load leaves the cell empty and returns the error unchanged.
    pub fn get_or_load(&self, config: &CatalogConfig) -> Result<&CourseCatalog, CatalogError> {
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }

        let _guard = self.init.lock().unwrap_or_else(|err| err.into_inner());
        if let Some(catalog) = self.catalog.get() {
            return Ok(catalog);
        }

        let loaded = config.load()?;
        debug!(
            path = %config.catalog_path.display(),
            courses = loaded.len(),
            "catalog cell initialized"
        );
        Ok(self.catalog.get_or_init(|| loaded))
    }
}
