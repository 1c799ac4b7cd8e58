use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{Capability, PermissionSet, RoleLabel};

/// Pre-granular permission payloads still found in stored sessions and old
/// authentication responses.
///
/// Two shapes existed before capability booleans: a plain list of role
/// labels, and a resource map with per-resource view/edit flags. Both are
/// one-way migrated into a [`PermissionSet`] at parse time; nothing
/// downstream of the session layer ever sees a legacy shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LegacyPayload {
    Roles(Vec<RoleLabel>),
    Resources(BTreeMap<String, ResourceGrant>),
}

/// Per-resource view/edit flags from the legacy resource map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceGrant {
    #[serde(default)]
    pub view: bool,
    #[serde(default)]
    pub edit: bool,
}

/// Fixed role table. Unknown labels deliberately map to nothing.
fn role_capabilities(label: &str) -> Option<&'static [Capability]> {
    match label {
        "ADMINISTRATOR" => Some(&Capability::ALL),
        "EXECUTIVE" => Some(&[Capability::BenefactorsRead, Capability::BenefactorsWrite]),
        "EXECUTIVE_SOCIAL" => Some(&[Capability::SocialRead, Capability::SocialWrite]),
        "EXECUTIVE_CONTABLE" => Some(&[Capability::PortfolioRead, Capability::PortfolioWrite]),
        _ => None,
    }
}

/// Fixed resource table: (capability granted by `view`, by `edit`).
///
/// Settings and approvals were single-flag resources; either legacy flag
/// grants the one manage capability.
fn resource_capabilities(resource: &str) -> Option<(Capability, Capability)> {
    match resource {
        "portfolio" => Some((Capability::PortfolioRead, Capability::PortfolioWrite)),
        "benefactors" => Some((Capability::BenefactorsRead, Capability::BenefactorsWrite)),
        "social" => Some((Capability::SocialRead, Capability::SocialWrite)),
        "settings" => Some((Capability::SettingsManage, Capability::SettingsManage)),
        "approvals" => Some((Capability::ApprovalsManage, Capability::ApprovalsManage)),
        _ => None,
    }
}

/// Migrate a legacy permission payload into a fully populated
/// [`PermissionSet`].
///
/// Total and deterministic: every input produces a set, multiple roles
/// union their grants, and unrecognized role or resource names contribute
/// nothing beyond a warning. A session must never be locked out by an
/// unmapped label, so this never fails.
pub fn migrate_permission_set(payload: &LegacyPayload) -> PermissionSet {
    let mut granted: Vec<Capability> = Vec::new();

    match payload {
        LegacyPayload::Roles(labels) => {
            for label in labels {
                match role_capabilities(label.as_str()) {
                    Some(caps) => granted.extend_from_slice(caps),
                    None => {
                        tracing::warn!(role = label.as_str(), "unrecognized legacy role; it grants nothing");
                    }
                }
            }
        }
        LegacyPayload::Resources(resources) => {
            for (resource, grant) in resources {
                match resource_capabilities(resource) {
                    Some((view_cap, edit_cap)) => {
                        if grant.view {
                            granted.push(view_cap);
                        }
                        if grant.edit {
                            granted.push(edit_cap);
                        }
                    }
                    None => {
                        tracing::warn!(resource = resource.as_str(), "unrecognized legacy resource; it grants nothing");
                    }
                }
            }
        }
    }

    PermissionSet::from_capabilities(granted)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(names: &[&'static str]) -> LegacyPayload {
        LegacyPayload::Roles(names.iter().map(|n| RoleLabel::new(*n)).collect())
    }

    #[test]
    fn administrator_maps_to_every_capability() {
        let set = migrate_permission_set(&roles(&["ADMINISTRATOR"]));
        assert_eq!(set, PermissionSet::all());
    }

    #[test]
    fn executive_social_maps_to_social_only() {
        let set = migrate_permission_set(&roles(&["EXECUTIVE_SOCIAL"]));
        assert_eq!(
            set,
            PermissionSet::from_capabilities([Capability::SocialRead, Capability::SocialWrite])
        );
    }

    #[test]
    fn executive_contable_maps_to_portfolio_only() {
        let set = migrate_permission_set(&roles(&["EXECUTIVE_CONTABLE"]));
        assert_eq!(
            set,
            PermissionSet::from_capabilities([
                Capability::PortfolioRead,
                Capability::PortfolioWrite
            ])
        );
    }

    #[test]
    fn multiple_roles_union_their_grants() {
        let set = migrate_permission_set(&roles(&["EXECUTIVE", "EXECUTIVE_SOCIAL"]));
        assert!(set.allows(Capability::BenefactorsRead));
        assert!(set.allows(Capability::BenefactorsWrite));
        assert!(set.allows(Capability::SocialRead));
        assert!(set.allows(Capability::SocialWrite));
        assert!(!set.allows(Capability::PortfolioRead));
        assert!(!set.allows(Capability::SettingsManage));
    }

    #[test]
    fn unrecognized_role_degrades_to_all_false() {
        let set = migrate_permission_set(&roles(&["SUPERVISOR_REGIONAL"]));
        assert_eq!(set, PermissionSet::none());
    }

    #[test]
    fn unrecognized_role_does_not_poison_recognized_ones() {
        let set = migrate_permission_set(&roles(&["SUPERVISOR_REGIONAL", "EXECUTIVE"]));
        assert!(set.allows(Capability::BenefactorsRead));
        assert!(!set.allows(Capability::SocialRead));
    }

    #[test]
    fn resource_map_grants_view_and_edit_independently() {
        let mut resources = BTreeMap::new();
        resources.insert(
            "portfolio".to_string(),
            ResourceGrant { view: true, edit: false },
        );
        resources.insert(
            "benefactors".to_string(),
            ResourceGrant { view: true, edit: true },
        );

        let set = migrate_permission_set(&LegacyPayload::Resources(resources));
        assert!(set.allows(Capability::PortfolioRead));
        assert!(!set.allows(Capability::PortfolioWrite));
        assert!(set.allows(Capability::BenefactorsRead));
        assert!(set.allows(Capability::BenefactorsWrite));
    }

    #[test]
    fn single_flag_resources_grant_manage_from_either_flag() {
        let mut resources = BTreeMap::new();
        resources.insert(
            "settings".to_string(),
            ResourceGrant { view: true, edit: false },
        );
        resources.insert(
            "approvals".to_string(),
            ResourceGrant { view: false, edit: true },
        );

        let set = migrate_permission_set(&LegacyPayload::Resources(resources));
        assert!(set.allows(Capability::SettingsManage));
        assert!(set.allows(Capability::ApprovalsManage));
    }

    #[test]
    fn unknown_resources_are_skipped() {
        let mut resources = BTreeMap::new();
        resources.insert(
            "reports".to_string(),
            ResourceGrant { view: true, edit: true },
        );
        let set = migrate_permission_set(&LegacyPayload::Resources(resources));
        assert_eq!(set, PermissionSet::none());
    }

    #[test]
    fn role_list_deserializes_untagged() {
        let payload: LegacyPayload =
            serde_json::from_str(r#"["ADMINISTRATOR", "EXECUTIVE"]"#).unwrap();
        assert!(matches!(payload, LegacyPayload::Roles(ref labels) if labels.len() == 2));
    }

    #[test]
    fn resource_map_deserializes_untagged_with_missing_flags() {
        let payload: LegacyPayload =
            serde_json::from_str(r#"{"social": {"view": true}}"#).unwrap();
        let set = migrate_permission_set(&payload);
        assert!(set.allows(Capability::SocialRead));
        assert!(!set.allows(Capability::SocialWrite));
    }

    mod properties {
        use proptest::prelude::*;

        use super::*;

        fn arb_label() -> impl Strategy<Value = RoleLabel> {
            prop_oneof![
                Just(RoleLabel::new("ADMINISTRATOR")),
                Just(RoleLabel::new("EXECUTIVE")),
                Just(RoleLabel::new("EXECUTIVE_SOCIAL")),
                Just(RoleLabel::new("EXECUTIVE_CONTABLE")),
                "[A-Z_]{1,16}".prop_map(RoleLabel::new),
            ]
        }

        proptest! {
            #[test]
            fn migration_is_total_and_deterministic(
                labels in prop::collection::vec(arb_label(), 0..6),
            ) {
                let payload = LegacyPayload::Roles(labels);
                let first = migrate_permission_set(&payload);
                let second = migrate_permission_set(&payload);
                prop_assert_eq!(first, second);
            }
        }
    }
}
