//! Connection domain models.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::bookmark::EntityBookmark;

/// Identity of the connected server, shared space, workspace and user.
///
/// Opaque: only ever compared for equality, never parsed. Every piece of
/// session-local state is stamped with the identity it was created under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionIdentity(String);

impl ConnectionIdentity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ConnectionIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ConnectionIdentity {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Connection settings as entered by the user on the connection page.
///
/// Authentication details are not part of this struct; they belong to the
/// HTTP client layer.
///
/// # File Location
///
/// Persisted as `connection.toml` in the Octane config directory.
///
/// ```toml
/// url = "https://octane.example.com"
/// shared_space_id = 1001
/// workspace_id = 1002
/// user = "jane@example.com"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Server URL, e.g. `https://octane.example.com`.
    pub url: String,
    /// Shared space id.
    pub shared_space_id: i64,
    /// Workspace id.
    pub workspace_id: i64,
    /// User name used to log in.
    pub user: String,
}

impl ConnectionConfig {
    pub fn new(
        url: impl Into<String>,
        shared_space_id: i64,
        workspace_id: i64,
        user: impl Into<String>,
    ) -> Self {
        Self {
            url: url.into(),
            shared_space_id,
            workspace_id,
            user: user.into(),
        }
    }

    /// Computes the identity of this connection.
    ///
    /// The four inputs are concatenated without separators so that identities
    /// written by earlier releases of the extension keep matching.
    pub fn identity(&self) -> ConnectionIdentity {
        ConnectionIdentity(format!(
            "{}{}{}{}",
            self.url, self.shared_space_id, self.workspace_id, self.user
        ))
    }

    /// Returns the URL that opens the given entity in the web client.
    pub fn entity_url(&self, entity: &EntityBookmark) -> String {
        format!(
            "{}/ui/entity-navigation?p={}/{}&entityType={}&id={}",
            self.url.trim_end_matches('/'),
            self.shared_space_id,
            self.workspace_id,
            entity.base_type,
            entity.id
        )
    }
}
