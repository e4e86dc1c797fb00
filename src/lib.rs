//! Shared library for the course catalog.
//!
//! The crate loads a static JSON document into an ordered, read-only list of
//! `Course` records. Nothing here is global: an application loads the catalog
//! once during startup (directly, or through `CatalogCell`) and passes the
//! resulting `CourseCatalog` by reference to whatever needs it.
//!
//! Loading validates the document against `schema/course_catalog.schema.json`
//! before decoding, so a catalog either arrives fully typed or not at all.

pub mod bootstrap;
pub mod catalog;
pub mod config;
pub mod error;
pub mod schema_loader;

pub use bootstrap::CatalogCell;
pub use catalog::{
    Course, CourseCatalog, Topic, load_catalog_from_path, load_catalog_from_path_with_schema,
    load_catalog_from_str,
};
pub use config::{
    CATALOG_PATH_ENV, CatalogConfig, SCHEMA_PATH_ENV, default_catalog_path, resolve_catalog_path,
    resolve_schema_path,
};
pub use error::{CatalogError, CatalogErrorKind};
pub use schema_loader::CourseSchema;
