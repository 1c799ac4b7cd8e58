use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Legacy free-form role name (e.g. "ADMINISTRATOR", "EXECUTIVE").
///
/// Retained for backward compatibility with the pre-granular role system.
/// Labels are advisory metadata only: once a principal carries a
/// [`crate::PermissionSet`], no decision may hinge on a label. Their one
/// load-bearing use is as input to [`crate::migrate_permission_set`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleLabel(Cow<'static, str>);

impl RoleLabel {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RoleLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
