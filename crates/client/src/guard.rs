//! The navigation guard: decides which views are reachable from the current
//! cache snapshot.
//!
//! One machine per client. The phase starts at `Loading`, resolves exactly
//! once through the resume-session coordinator, and from then on is derived
//! from the session slice. The decision function itself is pure, so the
//! entire redirect policy is testable without any HTTP.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::api::ApiClient;
use crate::cache::{CacheStore, Snapshot};
use crate::error::ApiError;

/// Where unauthenticated visitors are sent from protected views.
pub const LOGIN_ROUTE: &str = "/login";

/// Where store-less owners are sent from dashboard views.
pub const STORE_SETUP_ROUTE: &str = "/dashboard/store";

/// The client's authentication phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPhase {
    /// Resume has not completed; nothing guarded may be evaluated.
    Loading,
    Unauthenticated,
    Authenticated,
}

/// How a requested view is protected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable by anyone: landing page, login, signup, public storefront.
    Public,
    /// Requires a session but not a store (the store-creation view itself).
    Protected,
    /// Requires a session and a store: the dashboard subtree.
    Dashboard,
}

/// The guard's answer for one requested view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Still `Loading`: render a neutral placeholder, decide nothing.
    Wait,
    Allow,
    /// Send the visitor to [`LOGIN_ROUTE`].
    RedirectToLogin,
    /// Send the owner to [`STORE_SETUP_ROUTE`] to create a store first.
    RedirectToStoreSetup,
}

/// Pure decision function: phase + snapshot + route class -> decision.
#[must_use]
pub const fn evaluate(phase: AuthPhase, snapshot: &Snapshot, route: RouteClass) -> GuardDecision {
    match (phase, route) {
        (_, RouteClass::Public) => GuardDecision::Allow,
        (AuthPhase::Loading, _) => GuardDecision::Wait,
        (AuthPhase::Unauthenticated, _) => GuardDecision::RedirectToLogin,
        (AuthPhase::Authenticated, RouteClass::Protected) => GuardDecision::Allow,
        (AuthPhase::Authenticated, RouteClass::Dashboard) => {
            if snapshot.has_store() {
                GuardDecision::Allow
            } else {
                GuardDecision::RedirectToStoreSetup
            }
        }
    }
}

/// The guard state machine.
///
/// Re-entrant for the client's lifetime: login/logout cycles move the phase
/// between `Unauthenticated` and `Authenticated`; only the initial resume is
/// once-only.
#[derive(Debug, Clone)]
pub struct Guard {
    cache: CacheStore,
    /// Resume completed; the phase is now derived from the session slice.
    resolved: Arc<AtomicBool>,
    /// A resume call is in flight; concurrent resolvers must not start another.
    resuming: Arc<AtomicBool>,
}

impl Guard {
    /// Create a guard over the given cache, in the `Loading` phase.
    #[must_use]
    pub fn new(cache: CacheStore) -> Self {
        Self {
            cache,
            resolved: Arc::new(AtomicBool::new(false)),
            resuming: Arc::new(AtomicBool::new(false)),
        }
    }

    /// The current phase, derived from resume completion and the session
    /// slice.
    #[must_use]
    pub fn phase(&self) -> AuthPhase {
        if !self.resolved.load(Ordering::Acquire) {
            return AuthPhase::Loading;
        }
        if self.cache.snapshot().is_authenticated() {
            AuthPhase::Authenticated
        } else {
            AuthPhase::Unauthenticated
        }
    }

    /// Resolve the initial `Loading` phase by running the resume-session
    /// coordinator. The HTTP call happens at most once per client lifetime;
    /// later calls return the already-derived phase immediately.
    ///
    /// # Errors
    ///
    /// Server and network failures leave the machine in `Loading` so a
    /// caller can surface the failure and try again.
    pub async fn resolve(&self, client: &ApiClient) -> Result<AuthPhase, ApiError> {
        if self.resolved.load(Ordering::Acquire) {
            return Ok(self.phase());
        }
        if self.resuming.swap(true, Ordering::AcqRel) {
            // Another resolver already owns the resume call; stay in Loading
            // until it lands.
            return Ok(self.phase());
        }
        match client.restore_session().await {
            Ok(_) => {
                self.resolved.store(true, Ordering::Release);
                Ok(self.phase())
            }
            Err(err) => {
                self.resuming.store(false, Ordering::Release);
                Err(err)
            }
        }
    }

    /// Decide whether a view of the given class may be entered right now.
    #[must_use]
    pub fn decide(&self, route: RouteClass) -> GuardDecision {
        evaluate(self.phase(), &self.cache.snapshot(), route)
    }

    /// Log out: the phase transitions to `Unauthenticated` immediately and
    /// every authenticated-scoped slice is cleared, even when the server
    /// cannot be reached (fire-and-forget).
    pub async fn logout(&self, client: &ApiClient) {
        if let Err(err) = client.logout().await {
            tracing::debug!(error = %err, "logout request failed; local state cleared anyway");
        }
    }
}
