//! Course catalog wiring.
//!
//! This module wraps the JSON catalog under `data/courses.json` (or wherever
//! configuration points) so callers can load a validated, read-only snapshot.
//! Types here mirror the schema fields; consumers walk `CourseCatalog`
//! directly.

pub mod loader;
pub mod model;
pub mod snapshot;

pub use loader::{
    load_catalog_from_path, load_catalog_from_path_with_schema, load_catalog_from_str,
};
pub use model::{Course, Topic};
pub use snapshot::CourseCatalog;
