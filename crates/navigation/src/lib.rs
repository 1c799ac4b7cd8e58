//! `fpus-navigation` — route guarding and menu visibility.
//!
//! The access rule for every screen lives in one table here; the routing
//! guard, the sidebar, and any per-action check all consult the same
//! declarations through the authorization core.

pub mod guard;
pub mod menu;

pub use guard::{check_route, GuardOutcome};
pub use menu::{nav_entries, route_requirement, visible_entries, NavEntry};
