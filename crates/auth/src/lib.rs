//! `fpus-auth` — pure authorization core for the benefactor-management app.
//!
//! This crate decides, from a principal's capability grants, which screens,
//! actions, and data the principal may see or mutate. It is intentionally
//! decoupled from HTTP, storage, and rendering: routing guards, sidebar
//! filtering, and per-button checks all go through [`evaluate`] and
//! [`filter_visible`] so the access rule for a resource is declared exactly
//! once.

pub mod authorize;
pub mod capability;
pub mod migrate;
pub mod permissions;
pub mod principal;
pub mod roles;

pub use authorize::{
    evaluate, explain, filter_visible, has_capability, AccessExplanation, AccessRequirement,
    Decision, DenialDetail, DenialReason, PrincipalState,
};
pub use capability::{Capability, UnknownCapability};
pub use migrate::{migrate_permission_set, LegacyPayload, ResourceGrant};
pub use permissions::PermissionSet;
pub use principal::{Principal, UserId};
pub use roles::RoleLabel;
