use serde::Serialize;

use crate::{Capability, Principal, UserId};

/// Declarative access rule attached to a protected resource (a route, a
/// menu entry, an action button).
///
/// `Any` is the observed default for route guards; `All` exists for actions
/// that touch more than one area at once. For both, the capability list
/// must be non-empty; an empty list is a bug in the caller's table, not a
/// runtime state (see [`evaluate`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessRequirement {
    /// Public resource; satisfied for everyone, including anonymous.
    None,
    /// Satisfied if the principal holds at least one listed capability.
    Any(Vec<Capability>),
    /// Satisfied only if the principal holds every listed capability.
    All(Vec<Capability>),
}

impl AccessRequirement {
    pub fn is_well_formed(&self) -> bool {
        match self {
            AccessRequirement::None => true,
            AccessRequirement::Any(caps) | AccessRequirement::All(caps) => !caps.is_empty(),
        }
    }
}

impl core::fmt::Display for AccessRequirement {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        fn join(caps: &[Capability]) -> String {
            caps.iter()
                .map(Capability::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }

        match self {
            AccessRequirement::None => f.write_str("none"),
            AccessRequirement::Any(caps) => write!(f, "any of [{}]", join(caps)),
            AccessRequirement::All(caps) => write!(f, "all of [{}]", join(caps)),
        }
    }
}

/// Outcome of an authorization check.
///
/// Denial is an expected, frequent outcome, so it travels as a value
/// rather than an error.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Granted,
    Denied(DenialReason),
}

impl Decision {
    pub fn is_granted(&self) -> bool {
        matches!(self, Decision::Granted)
    }
}

/// Why access was denied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialReason {
    /// No active principal. Recoverable by re-authenticating; consumers
    /// should send the user to the login entry point.
    Unauthenticated,
    /// The principal exists but lacks a required capability. Consumers
    /// should render an access-denied view in place, not a redirect.
    InsufficientCapability,
}

fn ensure_well_formed(requirement: &AccessRequirement) {
    if !requirement.is_well_formed() {
        tracing::error!(%requirement, "access requirement with empty capability list");
        panic!("access requirement with empty capability list: {requirement}");
    }
}

/// Decide whether `principal` may access a resource guarded by `requirement`.
///
/// Pure: no IO, no clock, no ambient state. A public resource
/// (`AccessRequirement::None`) is granted even without a principal; every
/// other requirement needs an authenticated principal first, and then the
/// capability check runs against the principal's [`crate::PermissionSet`]
/// alone. Role labels never enter into it.
///
/// # Panics
///
/// Panics if `requirement` carries an empty capability list. Silently
/// granting would open a hole and silently denying would hide the bug;
/// neither is acceptable for a malformed route/menu table.
pub fn evaluate(principal: Option<&Principal>, requirement: &AccessRequirement) -> Decision {
    ensure_well_formed(requirement);

    if matches!(requirement, AccessRequirement::None) {
        return Decision::Granted;
    }

    let Some(principal) = principal else {
        return Decision::Denied(DenialReason::Unauthenticated);
    };

    let satisfied = match requirement {
        AccessRequirement::None => true,
        AccessRequirement::Any(caps) => caps.iter().any(|c| principal.permissions.allows(*c)),
        AccessRequirement::All(caps) => caps.iter().all(|c| principal.permissions.allows(*c)),
    };

    if satisfied {
        Decision::Granted
    } else {
        Decision::Denied(DenialReason::InsufficientCapability)
    }
}

/// Ordered subsequence of `items` whose requirement evaluates to granted.
///
/// Order-preserving, non-mutating, and deterministic; safe to call
/// repeatedly while rendering menus or action bars.
///
/// # Panics
///
/// Panics if any item's requirement is malformed, same as [`evaluate`].
pub fn filter_visible<'a, T, F>(
    principal: Option<&Principal>,
    items: &'a [T],
    requirement_of: F,
) -> Vec<&'a T>
where
    F: Fn(&T) -> &AccessRequirement,
{
    items
        .iter()
        .filter(|item| evaluate(principal, requirement_of(item)).is_granted())
        .collect()
}

/// Single-capability convenience check.
///
/// Equivalent to `evaluate(principal, Any([capability]))` being granted.
pub fn has_capability(principal: Option<&Principal>, capability: Capability) -> bool {
    principal.is_some_and(|p| p.permissions.allows(capability))
}

// ─────────────────────────────────────────────────────────────────────────────
// Decision Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of an authorization decision.
///
/// Answers "why was this allowed/denied?" for support and audit tooling.
/// Always agrees with [`evaluate`] on the outcome.
#[derive(Debug, Clone, Serialize)]
pub struct AccessExplanation {
    /// Human-readable rendering of the requirement that was checked.
    pub requirement: String,

    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// State of the principal at check time; `None` when anonymous.
    pub principal: Option<PrincipalState>,

    /// Present only when denied.
    pub denial: Option<DenialDetail>,
}

/// Snapshot of the principal a decision was made against.
#[derive(Debug, Clone, Serialize)]
pub struct PrincipalState {
    pub user_id: UserId,
    pub display_name: String,
    pub role_labels: Vec<String>,
    pub granted_capabilities: Vec<String>,
}

/// What was missing, and what would fix it.
#[derive(Debug, Clone, Serialize)]
pub struct DenialDetail {
    pub reason: DenialReason,
    pub missing_capabilities: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Explain why an authorization decision was made (or would be made).
///
/// # Panics
///
/// Panics on a malformed requirement, same as [`evaluate`].
pub fn explain(principal: Option<&Principal>, requirement: &AccessRequirement) -> AccessExplanation {
    let decision = evaluate(principal, requirement);
    let requirement_text = requirement.to_string();

    let principal_state = principal.map(|p| PrincipalState {
        user_id: p.id,
        display_name: p.display_name.clone(),
        role_labels: p.role_labels.iter().map(|l| l.as_str().to_string()).collect(),
        granted_capabilities: p.permissions.granted().map(|c| c.as_str().to_string()).collect(),
    });

    match decision {
        Decision::Granted => AccessExplanation {
            requirement: requirement_text.clone(),
            granted: true,
            reason: match requirement {
                AccessRequirement::None => "public resource, no capability required".to_string(),
                _ => format!("principal satisfies requirement ({requirement_text})"),
            },
            principal: principal_state,
            denial: None,
        },
        Decision::Denied(DenialReason::Unauthenticated) => AccessExplanation {
            requirement: requirement_text,
            granted: false,
            reason: "no active principal".to_string(),
            principal: None,
            denial: Some(DenialDetail {
                reason: DenialReason::Unauthenticated,
                missing_capabilities: Vec::new(),
                suggestions: vec!["sign in and retry the request".to_string()],
            }),
        },
        Decision::Denied(DenialReason::InsufficientCapability) => {
            let missing: Vec<String> = match requirement {
                AccessRequirement::None => Vec::new(),
                AccessRequirement::Any(caps) | AccessRequirement::All(caps) => caps
                    .iter()
                    .filter(|c| !principal.is_some_and(|p| p.permissions.allows(**c)))
                    .map(|c| c.as_str().to_string())
                    .collect(),
            };

            let suggestion = match requirement {
                AccessRequirement::Any(_) => format!(
                    "have an administrator grant one of: {}",
                    missing.join(", ")
                ),
                _ => format!(
                    "have an administrator grant: {}",
                    missing.join(", ")
                ),
            };

            AccessExplanation {
                requirement: requirement_text.clone(),
                granted: false,
                reason: format!("principal does not satisfy requirement ({requirement_text})"),
                principal: principal_state,
                denial: Some(DenialDetail {
                    reason: DenialReason::InsufficientCapability,
                    missing_capabilities: missing,
                    suggestions: vec![suggestion],
                }),
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
