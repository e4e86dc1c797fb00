use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures raised while loading a course catalog or its schema.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("course catalog {} could not be read", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("course catalog {origin} is not valid JSON")]
    InvalidJson {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("course catalog {origin} does not match the course schema:\n{}", .details.join("\n"))]
    InvalidShape {
        origin: String,
        details: Vec<String>,
    },

    #[error("course schema {origin} is unusable: {detail}")]
    Schema { origin: String, detail: String },
}

/// Coarse classification of a [`CatalogError`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CatalogErrorKind {
    /// The catalog resource is absent or unreadable.
    ResourceNotFound,
    /// The catalog is not JSON, or not shaped like a list of courses.
    MalformedData,
    /// The schema used for validation could not be read or compiled.
    Schema,
}

impl CatalogError {
    pub fn kind(&self) -> CatalogErrorKind {
        match self {
            CatalogError::NotFound { .. } => CatalogErrorKind::ResourceNotFound,
            CatalogError::InvalidJson { .. } | CatalogError::InvalidShape { .. } => {
                CatalogErrorKind::MalformedData
            }
            CatalogError::Schema { .. } => CatalogErrorKind::Schema,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == CatalogErrorKind::ResourceNotFound
    }

    pub fn is_malformed(&self) -> bool {
        self.kind() == CatalogErrorKind::MalformedData
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn kinds_follow_variants() {
        let missing = CatalogError::NotFound {
            path: PathBuf::from("/nowhere/courses.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(missing.kind(), CatalogErrorKind::ResourceNotFound);
        assert!(missing.is_not_found());
        assert!(!missing.is_malformed());

        let syntax = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let bad_json = CatalogError::InvalidJson {
            origin: "<inline>".to_string(),
            source: syntax,
        };
        assert!(bad_json.is_malformed());

        let bad_shape = CatalogError::InvalidShape {
            origin: "<inline>".to_string(),
            details: vec!["/0: \"topics\" is a required property".to_string()],
        };
        assert!(bad_shape.is_malformed());

        let schema = CatalogError::Schema {
            origin: "bundled".to_string(),
            detail: "broken".to_string(),
        };
        assert_eq!(schema.kind(), CatalogErrorKind::Schema);
    }

    #[test]
    fn messages_name_the_origin_and_keep_sources() {
        let missing = CatalogError::NotFound {
            path: PathBuf::from("/nowhere/courses.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(
            missing.to_string(),
            "course catalog /nowhere/courses.json could not be read"
        );
        assert_eq!(missing.source().map(|s| s.to_string()).as_deref(), Some("gone"));

        let syntax = serde_json::from_str::<serde_json::Value>("").unwrap_err();
        let cause = syntax.to_string();
        let bad_json = CatalogError::InvalidJson {
            origin: "/dev/null".to_string(),
            source: syntax,
        };
        assert_eq!(bad_json.to_string(), "course catalog /dev/null is not valid JSON");
        assert_eq!(bad_json.source().map(|s| s.to_string()), Some(cause.clone()));

        let chain = format!("{:#}", anyhow::Error::new(bad_json));
        assert_eq!(chain.matches(cause.as_str()).count(), 1, "{chain}");

        let bad_shape = CatalogError::InvalidShape {
            origin: "fixture.json".to_string(),
            details: vec!["first".to_string(), "second".to_string()],
        };
        assert_eq!(
            bad_shape.to_string(),
            "course catalog fixture.json does not match the course schema:\nfirst\nsecond"
        );
    }
}
