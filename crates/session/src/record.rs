use serde::{Deserialize, Serialize};
use thiserror::Error;

use fpus_auth::{
    migrate_permission_set, LegacyPayload, PermissionSet, Principal, RoleLabel, UserId,
};

/// Persisted principal record, as written by the session layer.
///
/// The permission payload comes in two shapes: the current granular
/// capability map, or a legacy shape (role-label list / resource map).
/// Legacy shapes are migrated while the record is turned into a
/// [`Principal`]; nothing past this module ever sees a legacy shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: UserId,
    pub display_name: String,
    pub permissions: PermissionPayload,

    /// Advisory labels stored alongside a granular payload. A legacy
    /// role-list payload carries its own labels instead.
    #[serde(default)]
    pub role_labels: Vec<RoleLabel>,
}

/// Either the granular capability map or a pre-migration shape.
///
/// Untagged: a capability map is an object of booleans (closed field set),
/// a legacy resource map is an object of objects, a legacy role list is an
/// array. The three never overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionPayload {
    Granular(PermissionSet),
    Legacy(LegacyPayload),
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl SessionRecord {
    pub fn parse(json: &str) -> Result<Self, RecordError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the in-memory [`Principal`], migrating a legacy payload if
    /// present.
    pub fn into_principal(self) -> Principal {
        let (permissions, mut labels) = match self.permissions {
            PermissionPayload::Granular(set) => (set, Vec::new()),
            PermissionPayload::Legacy(legacy) => {
                tracing::info!("migrating legacy permission payload in stored session");
                let set = migrate_permission_set(&legacy);
                let labels = match legacy {
                    LegacyPayload::Roles(labels) => labels,
                    LegacyPayload::Resources(_) => Vec::new(),
                };
                (set, labels)
            }
        };
        labels.extend(self.role_labels);

        Principal::new(self.id, self.display_name, permissions).with_role_labels(labels)
    }
}
