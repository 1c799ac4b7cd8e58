use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{PermissionSet, RoleLabel};

/// Identity of an authenticated user.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<UserId> for Uuid {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::from_str(s)?))
    }
}

/// The authenticated user as the engine sees it.
///
/// Constructed once from the authentication response (or from a persisted
/// session record) and replaced wholesale on any permission change. The
/// engine never mutates a principal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub id: UserId,
    pub display_name: String,
    pub permissions: PermissionSet,

    /// Advisory labels from the pre-granular role system. Never the sole
    /// gate for a capability decision.
    #[serde(default)]
    pub role_labels: Vec<RoleLabel>,
}

impl Principal {
    pub fn new(id: UserId, display_name: impl Into<String>, permissions: PermissionSet) -> Self {
        Self {
            id,
            display_name: display_name.into(),
            permissions,
            role_labels: Vec::new(),
        }
    }

    pub fn with_role_labels(mut self, labels: impl IntoIterator<Item = RoleLabel>) -> Self {
        self.role_labels = labels.into_iter().collect();
        self
    }
}
