//! JSON Schema for course catalogs.
//!
//! The crate ships `schema/course_catalog.schema.json` compiled in; deployments
//! may point at a replacement file instead. Either way the loader validates the
//! raw JSON against the compiled schema before decoding it into typed records.

use crate::error::CatalogError;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

const BUNDLED_SCHEMA: &str = include_str!("../schema/course_catalog.schema.json");
const BUNDLED_ORIGIN: &str = "bundled course_catalog.schema.json";

/// Compiled course catalog schema plus where it came from.
pub struct CourseSchema {
    origin: String,
    compiled: JSONSchema,
}

impl std::fmt::Debug for CourseSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CourseSchema")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}

impl CourseSchema {
    /// Compile the schema embedded in the crate.
    pub fn bundled() -> Result<Self, CatalogError> {
        let raw: Value = serde_json::from_str(BUNDLED_SCHEMA)
            .map_err(|err| schema_error(BUNDLED_ORIGIN, err))?;
        Self::compile(raw, BUNDLED_ORIGIN.to_string())
    }

    /// Read and compile a schema file from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let origin = path.display().to_string();
        debug!(schema = %origin, "loading course schema override");
        let file = File::open(path).map_err(|err| schema_error(&origin, err))?;
        let raw: Value = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| schema_error(&origin, err))?;
        Self::compile(raw, origin)
    }

    fn compile(raw: Value, origin: String) -> Result<Self, CatalogError> {
        let compiled = JSONSchema::compile(&raw).map_err(|err| schema_error(&origin, err))?;
        Ok(Self { origin, compiled })
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Validate a document, collecting every violation as `<pointer>: <message>`.
    ///
    /// The pointer is empty for violations at the document root.
    pub fn validate(&self, instance: &Value) -> Result<(), Vec<String>> {
        match self.compiled.validate(instance) {
            Ok(()) => Ok(()),
            Err(errors) => Err(errors
                .map(|err| format!("{}: {}", err.instance_path, err))
                .collect()),
        }
    }
}

fn schema_error(origin: &str, err: impl std::fmt::Display) -> CatalogError {
    CatalogError::Schema {
        origin: origin.to_string(),
        detail: err.to_string(),
    }
}
