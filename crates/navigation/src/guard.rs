use fpus_auth::{evaluate, AccessRequirement, Decision, DenialReason, Principal};

/// What the router should do with a requested screen transition.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GuardOutcome {
    /// Render the target screen.
    Proceed,
    /// No active session; send the user to the login entry point.
    RedirectToLogin,
    /// Authenticated but not allowed; render the inline access-denied view
    /// in place of the target screen, not a silent redirect.
    AccessDenied,
}

/// Evaluate a route's requirement for the current principal.
///
/// The two denial reasons deliberately map to different user-visible
/// behavior, so consumers must branch on the outcome rather than collapse
/// it to a boolean.
///
/// # Panics
///
/// Panics on a malformed requirement, same as [`evaluate`].
pub fn check_route(principal: Option<&Principal>, requirement: &AccessRequirement) -> GuardOutcome {
    match evaluate(principal, requirement) {
        Decision::Granted => GuardOutcome::Proceed,
        Decision::Denied(DenialReason::Unauthenticated) => GuardOutcome::RedirectToLogin,
        Decision::Denied(DenialReason::InsufficientCapability) => GuardOutcome::AccessDenied,
    }
}
