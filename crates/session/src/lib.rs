//! `fpus-session` — the process-wide current-session slot.
//!
//! Owns the one piece of shared mutable state in the authorization stack:
//! who is signed in right now, with which permission set. Components never
//! read ambient storage directly; they ask the [`SessionStore`] and
//! subscribe to its change notifications.

pub mod record;
pub mod store;

pub use record::{PermissionPayload, RecordError, SessionRecord};
pub use store::{Session, SessionEvent, SessionStore};
