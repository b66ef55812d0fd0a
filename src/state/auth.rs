//! Session/authorization state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided by `App`. The route guard, navbar,
//! and every page read it; only the methods below mutate it, and each runs
//! inside a single `update` so a render never sees a half-applied transition.
//!
//! DESIGN
//! ======
//! A session token and a pending KYC verification are mutually exclusive:
//! whichever is set clears the other in the same call. The cached
//! `UserIdentity` is informational and never consulted for access decisions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::LoginOutcome;
use crate::state::session::{BrowserStorage, SessionStore, TokenStorage};
use crate::util::auth::{Access, DASHBOARD_PATH, kyc_path};

/// An interrupted login waiting for identity verification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingKyc {
    pub required: bool,
    pub user_id: Option<u64>,
    pub kyc_token: Option<String>,
}

impl PendingKyc {
    pub fn new(user_id: u64, kyc_token: Option<String>) -> Self {
        Self { required: true, user_id: Some(user_id), kyc_token }
    }

    /// Required and addressed to a concrete user.
    pub fn is_active(&self) -> bool {
        self.required && self.user_id.is_some()
    }
}

/// Profile cached after a successful login.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserIdentity {
    pub id: u64,
    pub email: String,
}

/// Identifies one login attempt; only the latest may apply its response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoginTicket(u64);

/// Result of applying a login response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginTransition {
    Authenticated,
    KycPending { user_id: u64 },
    Failed { message: String },
}

impl LoginTransition {
    /// Where the login page should navigate next, if anywhere.
    pub fn redirect(&self) -> Option<String> {
        match self {
            Self::Authenticated => Some(DASHBOARD_PATH.to_owned()),
            Self::KycPending { user_id } => Some(kyc_path(*user_id)),
            Self::Failed { .. } => None,
        }
    }
}

/// Token, pending KYC, and cached identity for the current user.
#[derive(Clone, Debug)]
pub struct AuthState<S = BrowserStorage> {
    session: SessionStore<S>,
    pending_kyc: PendingKyc,
    user: Option<UserIdentity>,
    login_seq: u64,
    restored: bool,
}

impl Default for AuthState<BrowserStorage> {
    fn default() -> Self {
        Self::new(BrowserStorage)
    }
}

impl<S: TokenStorage> AuthState<S> {
    /// Empty state that has not yet read durable storage. The server render
    /// and the first client render both start here so hydration matches.
    pub fn new(storage: S) -> Self {
        Self {
            session: SessionStore::new(storage),
            pending_kyc: PendingKyc::default(),
            user: None,
            login_seq: 0,
            restored: false,
        }
    }

    /// Build state from durable storage, resuming a persisted session.
    pub fn restore(storage: S) -> Self {
        let mut state = Self::new(storage);
        state.resume();
        state
    }

    /// Load the persisted token once; later calls are no-ops.
    pub fn resume(&mut self) {
        let _ = self.session.get();
        self.restored = true;
    }

    /// `false` until storage has been consulted; guards wait for it.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    pub fn token(&self) -> Option<&str> {
        self.session.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.current().is_some()
    }

    pub fn requires_kyc(&self) -> bool {
        self.pending_kyc.is_active()
    }

    pub fn pending_kyc(&self) -> &PendingKyc {
        &self.pending_kyc
    }

    pub fn user(&self) -> Option<&UserIdentity> {
        self.user.as_ref()
    }

    /// Snapshot consumed by the route guard.
    pub fn access(&self) -> Access {
        Access {
            authenticated: self.is_authenticated(),
            kyc_user_id: self.requires_kyc().then_some(self.pending_kyc.user_id).flatten(),
        }
    }

    /// Replace the session token. Always clears any pending KYC; clearing
    /// the token also drops the cached identity.
    pub fn set_token(&mut self, token: Option<String>) {
        self.session.set(token);
        self.restored = true;
        self.pending_kyc = PendingKyc::default();
        if !self.is_authenticated() {
            self.user = None;
        }
    }

    /// Enter the KYC-pending state, ending any session. Supersedes any
    /// in-flight login so its late response cannot replace this state.
    pub fn set_pending_kyc(&mut self, pending: PendingKyc) {
        self.login_seq += 1;
        self.session.clear();
        self.restored = true;
        self.user = None;
        self.pending_kyc = pending;
    }

    /// Cache who is signed in. Display only; never consulted by the guard.
    pub fn set_user(&mut self, user: Option<UserIdentity>) {
        self.user = user;
    }

    /// End the session and supersede any in-flight login.
    pub fn logout(&mut self) {
        self.login_seq += 1;
        self.set_token(None);
    }

    /// KYC was accepted; the user must sign in again to get a token.
    pub fn complete_kyc(&mut self) {
        self.pending_kyc = PendingKyc::default();
    }

    /// Start a login attempt, superseding earlier ones.
    pub fn begin_login(&mut self) -> LoginTicket {
        self.login_seq += 1;
        LoginTicket(self.login_seq)
    }

    pub fn is_current(&self, ticket: LoginTicket) -> bool {
        ticket.0 == self.login_seq
    }

    /// Apply a decoded login response. Returns `None` and leaves state
    /// untouched when `ticket` has been superseded.
    pub fn apply_login(&mut self, ticket: LoginTicket, outcome: LoginOutcome, email: &str) -> Option<LoginTransition> {
        if !self.is_current(ticket) {
            return None;
        }
        let transition = match outcome {
            LoginOutcome::Authenticated { token, user_id } => {
                self.set_token(Some(token));
                self.set_user(Some(UserIdentity {
                    id: user_id.unwrap_or(0),
                    email: email.to_owned(),
                }));
                LoginTransition::Authenticated
            }
            LoginOutcome::KycRequired { user_id, kyc_token } => {
                self.set_pending_kyc(PendingKyc::new(user_id, kyc_token));
                LoginTransition::KycPending { user_id }
            }
            LoginOutcome::Failed { message } => LoginTransition::Failed { message },
        };
        Some(transition)
    }
}
