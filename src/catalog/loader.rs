//! Reads a course catalog from disk (or memory) into a [`CourseCatalog`].
//!
//! Every load runs the same pipeline: read, parse JSON, validate against the
//! course schema, then decode into typed records. Structural problems surface
//! as `InvalidShape` with one line per violation instead of a partially typed
//! catalog.

use crate::catalog::model::Course;
use crate::catalog::snapshot::CourseCatalog;
use crate::error::CatalogError;
use crate::schema_loader::CourseSchema;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const INLINE_ORIGIN: &str = "<inline>";
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Read, validate, and decode the catalog at `path` using the bundled schema.
pub fn load_catalog_from_path(path: &Path) -> Result<CourseCatalog, CatalogError> {
    let schema = CourseSchema::bundled()?;
    load_catalog_from_path_with_schema(path, &schema)
}

/// Same as [`load_catalog_from_path`] but validates against `schema`.
pub fn load_catalog_from_path_with_schema(
    path: &Path,
    schema: &CourseSchema,
) -> Result<CourseCatalog, CatalogError> {
    debug!(path = %path.display(), "reading course catalog");
    let data = fs::read(path).map_err(|source| CatalogError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let origin = path.display().to_string();
    let courses = decode_catalog(&data, &origin, schema)?;
    info!(path = %origin, courses = courses.len(), "loaded course catalog");
    Ok(CourseCatalog::new(courses).with_source(path))
}

/// Decode an in-memory catalog document using the bundled schema.
pub fn load_catalog_from_str(input: &str) -> Result<CourseCatalog, CatalogError> {
    let schema = CourseSchema::bundled()?;
    let courses = decode_catalog(input.as_bytes(), INLINE_ORIGIN, &schema)?;
    Ok(CourseCatalog::new(courses))
}

fn decode_catalog(
    data: &[u8],
    origin: &str,
    schema: &CourseSchema,
) -> Result<Vec<Course>, CatalogError> {
    // Editors on some platforms prepend a BOM; it is not part of the JSON text.
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let value: Value = serde_json::from_slice(data).map_err(|source| CatalogError::InvalidJson {
        origin: origin.to_string(),
        source,
    })?;

    debug!(origin, schema = schema.origin(), "validating course catalog");
    if let Err(details) = schema.validate(&value) {
        return Err(CatalogError::InvalidShape {
            origin: origin.to_string(),
            details,
        });
    }

    let legacy = legacy_title_count(&value);
    if legacy > 0 {
        warn!(
            origin,
            courses = legacy,
            "course entries use the legacy `name` key; re-emit the catalog to migrate to `courseName`"
        );
    }

    // An override schema may be looser than the typed model, so the decode can
    // still fail here.
    serde_json::from_value(value).map_err(|err| CatalogError::InvalidShape {
        origin: origin.to_string(),
        details: vec![err.to_string()],
    })
}

fn legacy_title_count(value: &Value) -> usize {
    value
        .as_array()
        .map(|entries| {
            entries
                .iter()
                .filter(|entry| entry.get("name").is_some())
                .count()
        })
        .unwrap_or(0)
}
