//! Entity bookmarks.
//!
//! A bookmark is the minimal tuple that identifies a remote entity without holding
//! any of its field data: the entity id, its base (aggregate) type and, optionally,
//! its concrete subtype.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::serde_helpers::{non_empty, non_empty_string};

/// Identifier of an entity on the remote server.
///
/// The server hands out numeric ids, but they are carried around as strings
/// everywhere in the persisted settings, so the newtype wraps a `String`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(String);

impl EntityId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

/// Bookmark of a remote entity, e.g. a user story opened in a detail window.
///
/// Two bookmarks denote the same entity when their `id` and `base_type` match.
/// `sub_type` is descriptive payload only and takes no part in `PartialEq` or `Hash`.
///
/// # Serialized form
///
/// ```json
/// { "id": "1001", "typeName": "work_item", "subTypeName": "story" }
/// ```
///
/// `subTypeName` is omitted when absent; a missing or empty value reads back as `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityBookmark {
    pub id: EntityId,

    /// Aggregate type, e.g. `work_item`, `test`, `requirement`.
    #[serde(rename = "typeName")]
    pub base_type: String,

    /// Concrete subtype, e.g. `story` or `defect`.
    #[serde(
        rename = "subTypeName",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_string"
    )]
    pub sub_type: Option<String>,
}

impl EntityBookmark {
    /// Creates a bookmark without a subtype.
    pub fn new(id: impl Into<EntityId>, base_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            base_type: base_type.into(),
            sub_type: None,
        }
    }

    /// Sets the concrete subtype. Empty strings are treated as no subtype.
    pub fn with_sub_type(mut self, sub_type: impl Into<String>) -> Self {
        self.sub_type = non_empty(sub_type.into());
        self
    }

    /// Returns the concrete type: the subtype when known, else the base type.
    ///
    /// For a user story this is `story`, for a task (which has no subtype) `task`.
    pub fn concrete_type(&self) -> &str {
        self.sub_type.as_deref().unwrap_or(&self.base_type)
    }

    /// Returns true when both bookmarks point at the same `(id, base_type)` entity.
    pub fn is_same_entity(&self, other: &EntityBookmark) -> bool {
        self.id == other.id && self.base_type == other.base_type
    }
}

impl PartialEq for EntityBookmark {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_entity(other)
    }
}

impl Eq for EntityBookmark {}

impl Hash for EntityBookmark {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.base_type.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_equality_ignores_sub_type() {
        let plain = EntityBookmark::new("123", "work_item");
        let story = EntityBookmark::new("123", "work_item").with_sub_type("story");
        assert_eq!(plain, story);

        let mut set = HashSet::new();
        set.insert(plain);
        assert!(!set.insert(story));
    }

    #[test]
    fn test_base_type_is_part_of_identity() {
        let work_item = EntityBookmark::new("123", "work_item");
        let test = EntityBookmark::new("123", "test");
        assert_ne!(work_item, test);
    }

    #[test]
    fn test_concrete_type_falls_back_to_base_type() {
        assert_eq!(EntityBookmark::new(7_i64, "task").concrete_type(), "task");
        assert_eq!(
            EntityBookmark::new(7_i64, "work_item")
                .with_sub_type("defect")
                .concrete_type(),
            "defect"
        );
    }

    #[test]
    fn test_serialized_field_names() {
        let bookmark = EntityBookmark::new("1001", "work_item").with_sub_type("story");
        let json = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "id": "1001", "typeName": "work_item", "subTypeName": "story" })
        );

        let without = serde_json::to_string(&EntityBookmark::new("1002", "test")).unwrap();
        assert!(!without.contains("subTypeName"));
    }

    #[test]
    fn test_missing_or_empty_sub_type_reads_as_none() {
        let missing: EntityBookmark =
            serde_json::from_str(r#"{"id":"5","typeName":"requirement"}"#).unwrap();
        assert!(missing.sub_type.is_none());

        let empty: EntityBookmark =
            serde_json::from_str(r#"{"id":"5","typeName":"requirement","subTypeName":""}"#)
                .unwrap();
        assert!(empty.sub_type.is_none());
    }

    #[test]
    fn test_empty_sub_type_builder_is_ignored() {
        let bookmark = EntityBookmark::new("9", "work_item").with_sub_type("");
        assert!(bookmark.sub_type.is_none());
    }
}
