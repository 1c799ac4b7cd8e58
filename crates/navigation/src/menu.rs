use std::sync::OnceLock;

use fpus_auth::{filter_visible, AccessRequirement, Capability, Principal};

/// One navigation entry with its access rule, declared exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub path: &'static str,
    pub requirement: AccessRequirement,
}

/// The fixed navigation table.
///
/// This is the single source of truth for screen access: the sidebar
/// filters it, and the routing guard looks requirements up in it.
pub fn nav_entries() -> &'static [NavEntry] {
    static ENTRIES: OnceLock<Vec<NavEntry>> = OnceLock::new();
    ENTRIES.get_or_init(|| {
        vec![
            NavEntry {
                id: "dashboard",
                title: "Dashboard",
                path: "/",
                requirement: AccessRequirement::None,
            },
            NavEntry {
                id: "benefactors",
                title: "Benefactors",
                path: "/benefactors",
                requirement: AccessRequirement::Any(vec![Capability::BenefactorsRead]),
            },
            NavEntry {
                id: "approvals",
                title: "Approvals",
                path: "/approvals",
                requirement: AccessRequirement::Any(vec![Capability::ApprovalsManage]),
            },
            NavEntry {
                id: "portfolio",
                title: "Portfolio",
                path: "/portfolio",
                requirement: AccessRequirement::Any(vec![Capability::PortfolioRead]),
            },
            NavEntry {
                id: "social",
                title: "Social",
                path: "/social",
                requirement: AccessRequirement::Any(vec![Capability::SocialRead]),
            },
            NavEntry {
                id: "settings",
                title: "Settings",
                path: "/settings",
                requirement: AccessRequirement::Any(vec![Capability::SettingsManage]),
            },
        ]
    })
}

/// Menu entries visible to the given principal, in table order.
pub fn visible_entries(principal: Option<&Principal>) -> Vec<&'static NavEntry> {
    filter_visible(principal, nav_entries(), |entry| &entry.requirement)
}

/// Requirement for a route path.
///
/// Nested screens (e.g. a benefactor detail page under `/benefactors/..`)
/// inherit their section's rule. Unknown paths return `None`; the router
/// treats those as not-found, never as implicitly public.
pub fn route_requirement(path: &str) -> Option<&'static AccessRequirement> {
    let entries = nav_entries();

    if let Some(entry) = entries.iter().find(|e| e.path == path) {
        return Some(&entry.requirement);
    }

    entries
        .iter()
        .filter(|e| e.path != "/")
        .find(|e| {
            path.starts_with(e.path) && path.as_bytes().get(e.path.len()) == Some(&b'/')
        })
        .map(|e| &e.requirement)
}
