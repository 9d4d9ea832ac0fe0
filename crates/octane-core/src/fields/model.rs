//! Fields metadata model.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::serde_helpers::null_as_default;

/// Visible field names per concrete entity type.
///
/// `version` identifies the bundled defaults the data was derived from; user
/// customizations saved against another version are discarded on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsMetadata {
    pub version: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: BTreeMap<String, BTreeSet<String>>,
}

impl FieldsMetadata {
    pub fn new(version: u32) -> Self {
        Self {
            version,
            data: BTreeMap::new(),
        }
    }

    pub fn fields(&self, entity_type: &str) -> Option<&BTreeSet<String>> {
        self.data.get(entity_type)
    }
}
