use std::sync::{Arc, Mutex, RwLock};

use chrono::{DateTime, Utc};

use fpus_auth::Principal;

/// A live authenticated session.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub principal: Principal,

    /// When this session was established. Informational only; never part
    /// of an authorization decision.
    pub authenticated_at: DateTime<Utc>,
}

/// Session state transition, delivered to [`SessionStore::on_session_change`]
/// subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    Authenticated,
    Anonymous,
}

type Listener = Box<dyn Fn(SessionEvent) + Send + Sync>;

/// Process-wide current-session slot.
///
/// Written twice per session lifecycle (login success, logout or
/// authentication rejection) and read arbitrarily often. The slot holds an
/// `Arc<Session>` and is replaced as one unit, so a reader never observes
/// a partially updated permission set.
#[derive(Default)]
pub struct SessionStore {
    slot: RwLock<Option<Arc<Session>>>,
    listeners: Mutex<Vec<Listener>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current session, if authenticated.
    pub fn current_session(&self) -> Option<Arc<Session>> {
        self.slot.read().expect("session slot poisoned").clone()
    }

    /// The current principal, if authenticated.
    pub fn current_principal(&self) -> Option<Principal> {
        self.current_session().map(|s| s.principal.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.slot.read().expect("session slot poisoned").is_some()
    }

    /// Enter the authenticated state with a freshly built principal.
    ///
    /// Replaces the slot wholesale. If a session was already active the
    /// subscribers first see `Anonymous`: re-authentication always passes
    /// through the anonymous state, there is no permission carry-over
    /// between sessions.
    pub fn login(&self, principal: Principal) {
        let session = Arc::new(Session {
            principal,
            authenticated_at: Utc::now(),
        });

        let previous = {
            let mut slot = self.slot.write().expect("session slot poisoned");
            slot.replace(session)
        };

        if previous.is_some() {
            tracing::warn!("login while a session was active; previous session discarded");
            self.notify(SessionEvent::Anonymous);
        }
        tracing::info!("session authenticated");
        self.notify(SessionEvent::Authenticated);
    }

    /// Clear the session on user-initiated logout. Idempotent.
    pub fn logout(&self) {
        if self.clear_slot() {
            tracing::info!("session cleared on logout");
            self.notify(SessionEvent::Anonymous);
        }
    }

    /// Clear the session after the backend rejected the credentials
    /// (expired or invalid). Idempotent.
    pub fn authentication_rejected(&self) {
        if self.clear_slot() {
            tracing::warn!("session cleared after authentication rejection");
            self.notify(SessionEvent::Anonymous);
        }
    }

    /// Register a callback fired on every Authenticated/Anonymous
    /// transition, so guards and menus can recompute.
    pub fn on_session_change(&self, callback: impl Fn(SessionEvent) + Send + Sync + 'static) {
        self.listeners
            .lock()
            .expect("listener list poisoned")
            .push(Box::new(callback));
    }

    fn clear_slot(&self) -> bool {
        let mut slot = self.slot.write().expect("session slot poisoned");
        slot.take().is_some()
    }

    fn notify(&self, event: SessionEvent) {
        let listeners = self.listeners.lock().expect("listener list poisoned");
        for listener in listeners.iter() {
            listener(event);
        }
    }
}
