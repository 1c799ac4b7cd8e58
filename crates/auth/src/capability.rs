use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Atomic, named permission flag.
///
/// The capability set is closed: every flag the application gates on is a
/// variant here, so a [`crate::PermissionSet`] is always fully populated and
/// a lookup never has to handle a missing key. Capabilities are independent
/// booleans; there is no hierarchy or implication between them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    PortfolioRead,
    PortfolioWrite,
    BenefactorsRead,
    BenefactorsWrite,
    SocialRead,
    SocialWrite,
    SettingsManage,
    ApprovalsManage,
}

impl Capability {
    /// Every known capability, in declaration order.
    pub const ALL: [Capability; 8] = [
        Capability::PortfolioRead,
        Capability::PortfolioWrite,
        Capability::BenefactorsRead,
        Capability::BenefactorsWrite,
        Capability::SocialRead,
        Capability::SocialWrite,
        Capability::SettingsManage,
        Capability::ApprovalsManage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::PortfolioRead => "portfolio_read",
            Capability::PortfolioWrite => "portfolio_write",
            Capability::BenefactorsRead => "benefactors_read",
            Capability::BenefactorsWrite => "benefactors_write",
            Capability::SocialRead => "social_read",
            Capability::SocialWrite => "social_write",
            Capability::SettingsManage => "settings_manage",
            Capability::ApprovalsManage => "approvals_manage",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown capability '{0}'")]
pub struct UnknownCapability(pub String);

impl FromStr for Capability {
    type Err = UnknownCapability;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownCapability(s.to_string()))
    }
}
