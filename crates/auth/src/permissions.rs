use serde::{Deserialize, Serialize};

use crate::Capability;

/// Complete boolean map over all known capabilities for one principal.
///
/// Every capability is always present: fields absent from a serialized
/// payload deserialize as `false`, so "missing" and "denied" are the same
/// thing and callers never check for existence before reading.
///
/// There are no setters. A permission change (an administrator editing a
/// user's grants, a legacy payload being migrated) produces a wholly new
/// set; nothing patches a field in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PermissionSet {
    #[serde(default)]
    pub portfolio_read: bool,
    #[serde(default)]
    pub portfolio_write: bool,
    #[serde(default)]
    pub benefactors_read: bool,
    #[serde(default)]
    pub benefactors_write: bool,
    #[serde(default)]
    pub social_read: bool,
    #[serde(default)]
    pub social_write: bool,
    #[serde(default)]
    pub settings_manage: bool,
    #[serde(default)]
    pub approvals_manage: bool,
}

impl PermissionSet {
    /// The empty grant (every capability denied).
    pub fn none() -> Self {
        Self::default()
    }

    /// Every capability granted.
    pub fn all() -> Self {
        Self::from_capabilities(Capability::ALL)
    }

    /// Build a set granting exactly the given capabilities.
    ///
    /// Duplicates are harmless; anything not listed stays `false`.
    pub fn from_capabilities(capabilities: impl IntoIterator<Item = Capability>) -> Self {
        let mut set = Self::default();
        for capability in capabilities {
            match capability {
                Capability::PortfolioRead => set.portfolio_read = true,
                Capability::PortfolioWrite => set.portfolio_write = true,
                Capability::BenefactorsRead => set.benefactors_read = true,
                Capability::BenefactorsWrite => set.benefactors_write = true,
                Capability::SocialRead => set.social_read = true,
                Capability::SocialWrite => set.social_write = true,
                Capability::SettingsManage => set.settings_manage = true,
                Capability::ApprovalsManage => set.approvals_manage = true,
            }
        }
        set
    }

    /// Whether this set grants `capability`.
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::PortfolioRead => self.portfolio_read,
            Capability::PortfolioWrite => self.portfolio_write,
            Capability::BenefactorsRead => self.benefactors_read,
            Capability::BenefactorsWrite => self.benefactors_write,
            Capability::SocialRead => self.social_read,
            Capability::SocialWrite => self.social_write,
            Capability::SettingsManage => self.settings_manage,
            Capability::ApprovalsManage => self.approvals_manage,
        }
    }

    /// Granted capabilities, in declaration order.
    pub fn granted(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::ALL.into_iter().filter(|c| self.allows(*c))
    }
}
