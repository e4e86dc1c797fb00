//! Read-only catalog value handed to consumers after a load.

use crate::catalog::model::Course;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::slice;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
/// Ordered courses in source order, plus the file they came from.
///
/// Serializes as the bare JSON array, so writing a catalog out produces a file
/// the loader accepts.
pub struct CourseCatalog {
    #[serde(skip)]
    source: Option<PathBuf>,
    courses: Vec<Course>,
}

impl CourseCatalog {
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            source: None,
            courses,
        }
    }

    pub(crate) fn with_source(mut self, path: &Path) -> Self {
        self.source = Some(path.to_path_buf());
        self
    }

    /// File the catalog was read from; `None` for in-memory input.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn iter(&self) -> slice::Iter<'_, Course> {
        self.courses.iter()
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Total number of topics across every course.
    pub fn topic_count(&self) -> usize {
        self.courses.iter().map(|course| course.topics.len()).sum()
    }

    /// Canonical pretty-printed JSON (always `courseName`, never `name`).
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl<'a> IntoIterator for &'a CourseCatalog {
    type Item = &'a Course;
    type IntoIter = slice::Iter<'a, Course>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::Topic;
    use serde_json::json;

    fn sample() -> CourseCatalog {
        CourseCatalog::new(vec![
            Course::new(
                "Scala",
                vec![
                    Topic::new("Primitive Types", vec!["Null".into(), "Nil".into()]),
                    Topic::new("Collections", vec![]),
                ],
            ),
            Course::new("SQL", vec![Topic::new("Joins", vec!["INNER".into()])]),
        ])
    }

    #[test]
    fn traversal_keeps_order() {
        let catalog = sample();
        let names: Vec<&str> = (&catalog)
            .into_iter()
            .map(|course| course.course_name.as_str())
            .collect();
        assert_eq!(names, ["Scala", "SQL"]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.topic_count(), 3);
        assert!(!catalog.is_empty());
        assert!(catalog.source().is_none());
    }

    #[test]
    fn serializes_as_bare_array() {
        let catalog = sample().with_source(Path::new("/data/courses.json"));
        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(
            value,
            json!([
                {
                    "courseName": "Scala",
                    "topics": [
                        {"topic": "Primitive Types", "details": ["Null", "Nil"]},
                        {"topic": "Collections", "details": []}
                    ]
                },
                {
                    "courseName": "SQL",
                    "topics": [{"topic": "Joins", "details": ["INNER"]}]
                }
            ])
        );
    }

    #[test]
    fn empty_catalog_is_empty() {
        let catalog = CourseCatalog::default();
        assert!(catalog.is_empty());
        assert_eq!(catalog.topic_count(), 0);
        assert_eq!(catalog.to_json_pretty().unwrap(), "[]");
    }
}
