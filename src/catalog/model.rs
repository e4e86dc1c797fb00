//! Deserializable representation of a course catalog entry.
//!
//! The types mirror `schema/course_catalog.schema.json`. `courseName` is the
//! canonical key for a course title; the older `name` key is accepted when
//! reading and never written back out.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// A named subject with ordered free-form notes.
pub struct Topic {
    pub topic: String,
    pub details: Vec<String>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
/// A named grouping of topics. The course owns its topics.
pub struct Course {
    #[serde(rename = "courseName", alias = "name")]
    pub course_name: String,
    pub topics: Vec<Topic>,
}

impl Topic {
    pub fn new(topic: impl Into<String>, details: Vec<String>) -> Self {
        Self {
            topic: topic.into(),
            details,
        }
    }
}

impl Course {
    pub fn new(course_name: impl Into<String>, topics: Vec<Topic>) -> Self {
        Self {
            course_name: course_name.into(),
            topics,
        }
    }
}
