//! Where the catalog (and optionally its schema) lives.
//!
//! Resolution order: explicit path, then `COURSE_CATALOG_PATH`, then the
//! location baked in at build time through `COURSE_CATALOG_PATH_HINT`.

use crate::catalog::{CourseCatalog, load_catalog_from_path_with_schema};
use crate::error::CatalogError;
use crate::schema_loader::CourseSchema;
use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub const CATALOG_PATH_ENV: &str = "COURSE_CATALOG_PATH";
pub const SCHEMA_PATH_ENV: &str = "COURSE_CATALOG_SCHEMA";

#[derive(Clone, Debug, Eq, PartialEq)]
/// Catalog location plus an optional schema override.
pub struct CatalogConfig {
    pub catalog_path: PathBuf,
    pub schema_path: Option<PathBuf>,
}

impl CatalogConfig {
    pub fn new(catalog_path: impl Into<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            schema_path: None,
        }
    }

    /// Build a config from `COURSE_CATALOG_PATH` / `COURSE_CATALOG_SCHEMA`,
    /// falling back to the build-time default catalog and the bundled schema.
    pub fn from_env() -> Self {
        Self {
            catalog_path: resolve_catalog_path(None, env::var_os(CATALOG_PATH_ENV)),
            schema_path: resolve_schema_path(None, env::var_os(SCHEMA_PATH_ENV)),
        }
    }

    pub fn with_schema_path(mut self, schema_path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(schema_path.into());
        self
    }

    /// Load the configured catalog. Performs file I/O on every call.
    pub fn load(&self) -> Result<CourseCatalog, CatalogError> {
        let schema = match &self.schema_path {
            Some(path) => CourseSchema::from_path(path)?,
            None => CourseSchema::bundled()?,
        };
        load_catalog_from_path_with_schema(&self.catalog_path, &schema)
    }
}

/// Catalog path fixed when the crate was built.
pub fn default_catalog_path() -> PathBuf {
    match option_env!("COURSE_CATALOG_PATH_HINT") {
        Some(hint) if !hint.is_empty() => PathBuf::from(hint),
        _ => Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join("courses.json"),
    }
}

/// Pick the catalog path from an explicit override, an env value, or the
/// build-time default, in that order. Empty values are skipped.
pub fn resolve_catalog_path(explicit: Option<&Path>, env_value: Option<OsString>) -> PathBuf {
    if let Some(path) = explicit {
        if !path.as_os_str().is_empty() {
            return path.to_path_buf();
        }
    }
    non_empty_path(env_value).unwrap_or_else(default_catalog_path)
}

/// Schema override from an explicit path or an env value; `None` means the
/// bundled schema.
pub fn resolve_schema_path(
    explicit: Option<&Path>,
    env_value: Option<OsString>,
) -> Option<PathBuf> {
    explicit
        .filter(|path| !path.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .or_else(|| non_empty_path(env_value))
}

fn non_empty_path(value: Option<OsString>) -> Option<PathBuf> {
    value
        .filter(|raw| !raw.to_string_lossy().trim().is_empty())
        .map(PathBuf::from)
}
