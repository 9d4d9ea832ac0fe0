//! Workspace session model.

use serde::{Deserialize, Serialize};

use crate::bookmark::{EntityBookmark, EntityId};
use crate::connection::ConnectionIdentity;
use crate::scoped::ScopedState;
use crate::serde_helpers::{non_empty_string, null_as_default};
use crate::settings::WORKSPACE_SESSION_KEY;

/// Entities whose detail windows are open, plus the active item.
///
/// # Serialized form
///
/// ```json
/// {
///   "id": "<connection identity>",
///   "entities": [{ "id": "1001", "typeName": "work_item", "subTypeName": "story" }],
///   "activeItemType": "work_item",
///   "activeItemId": "1001",
///   "activeItemSubType": "story"
/// }
/// ```
///
/// The `activeItem*` fields are omitted while no item is active; missing or
/// empty values read back as no active item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSession {
    pub id: ConnectionIdentity,

    /// Registered entities, in registration order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub entities: Vec<EntityBookmark>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_string"
    )]
    pub active_item_type: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_string"
    )]
    pub active_item_id: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_string"
    )]
    pub active_item_sub_type: Option<String>,
}

impl WorkspaceSession {
    pub fn new(id: ConnectionIdentity) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn is_registered(&self, entity: &EntityBookmark) -> bool {
        self.entities.iter().any(|e| e.is_same_entity(entity))
    }

    /// Adds `entity` unless it is already registered. Returns whether it was added.
    pub fn register(&mut self, entity: &EntityBookmark) -> bool {
        if self.is_registered(entity) {
            return false;
        }
        self.entities.push(entity.clone());
        true
    }

    /// Removes every entry for `entity`. Returns whether anything was removed.
    pub fn unregister(&mut self, entity: &EntityBookmark) -> bool {
        let before = self.entities.len();
        self.entities.retain(|e| !e.is_same_entity(entity));
        self.entities.len() != before
    }

    /// Returns the active item, if both its id and type are set.
    pub fn active_entity(&self) -> Option<EntityBookmark> {
        let id = self.active_item_id.as_deref()?;
        let base_type = self.active_item_type.as_deref()?;
        Some(EntityBookmark {
            id: EntityId::from(id),
            base_type: base_type.to_string(),
            sub_type: self.active_item_sub_type.clone(),
        })
    }

    pub fn set_active_entity(&mut self, entity: &EntityBookmark) {
        self.active_item_id = Some(entity.id.to_string());
        self.active_item_type = Some(entity.base_type.clone());
        self.active_item_sub_type = entity.sub_type.clone();
    }

    pub fn clear_active_entity(&mut self) {
        self.active_item_id = None;
        self.active_item_type = None;
        self.active_item_sub_type = None;
    }
}

impl ScopedState for WorkspaceSession {
    const KEY: &'static str = WORKSPACE_SESSION_KEY;

    fn identity(&self) -> &ConnectionIdentity {
        &self.id
    }

    fn empty(identity: ConnectionIdentity) -> Self {
        Self::new(identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_keeps_order_and_skips_duplicates() {
        let mut session = WorkspaceSession::default();
        assert!(session.register(&EntityBookmark::new("2", "work_item")));
        assert!(session.register(&EntityBookmark::new("1", "test")));
        assert!(!session.register(&EntityBookmark::new("2", "work_item").with_sub_type("story")));

        let ids: Vec<_> = session.entities.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_unregister_reports_removal() {
        let mut session = WorkspaceSession::default();
        let entity = EntityBookmark::new("2", "work_item");
        session.register(&entity);

        assert!(session.unregister(&entity));
        assert!(!session.unregister(&entity));
    }

    #[test]
    fn test_active_entity_round_trip() {
        let mut session = WorkspaceSession::new(ConnectionIdentity::from("abc"));
        let story = EntityBookmark::new("123", "work_item").with_sub_type("story");
        session.set_active_entity(&story);

        let json = serde_json::to_string(&session).unwrap();
        let restored: WorkspaceSession = serde_json::from_str(&json).unwrap();

        let active = restored.active_entity().unwrap();
        assert_eq!(active, story);
        assert_eq!(active.sub_type.as_deref(), Some("story"));
    }

    #[test]
    fn test_serialized_shape_without_active_item() {
        let mut session = WorkspaceSession::new(ConnectionIdentity::from("abc"));
        session.register(&EntityBookmark::new("7", "requirement"));

        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            serde_json::json!({
                "id": "abc",
                "entities": [{ "id": "7", "typeName": "requirement" }]
            })
        );
    }

    #[test]
    fn test_deserialize_legacy_blob() {
        let session: WorkspaceSession = serde_json::from_str(
            r#"{"id":"abc","entities":null,"activeItemType":"","activeItemId":""}"#,
        )
        .unwrap();
        assert!(session.entities.is_empty());
        assert!(session.active_entity().is_none());
    }

    #[test]
    fn test_active_entity_requires_type_and_id() {
        let session: WorkspaceSession =
            serde_json::from_str(r#"{"id":"abc","activeItemId":"5"}"#).unwrap();
        assert!(session.active_entity().is_none());
    }
}
