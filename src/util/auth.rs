//! Route-guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route and the login page apply the same redirect rules.
//! The decision is a pure function of `Access`, so it can be evaluated
//! synchronously before anything renders and re-evaluated reactively.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// KYC completion route for `user_id`.
pub fn kyc_path(user_id: u64) -> String {
    format!("/auth/kyc/{user_id}")
}

/// Inputs to the guard: derived only from the token and pending KYC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Access {
    pub authenticated: bool,
    /// Set while a KYC verification is pending for this user.
    pub kyc_user_id: Option<u64>,
}

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the requested destination.
    Render(String),
    /// Navigate elsewhere instead.
    Redirect(String),
}

/// Decide whether a protected destination may render.
///
/// The KYC check runs before the token check, deliberately reversing the
/// listed rule order. A pending KYC always coexists with a null token, so
/// checking the token first would send KYC users to `/login` and the KYC
/// redirect could never fire. The cost is that "no token means login" holds
/// only while no KYC is pending.
pub fn guard(requested: &str, access: Access) -> GuardDecision {
    if let Some(user_id) = access.kyc_user_id {
        return GuardDecision::Redirect(kyc_path(user_id));
    }
    if !access.authenticated {
        return GuardDecision::Redirect(LOGIN_PATH.to_owned());
    }
    GuardDecision::Render(requested.to_owned())
}

/// Decide whether the login page renders; signed-in users go to the
/// dashboard.
pub fn login_page_decision(access: Access) -> GuardDecision {
    if access.authenticated {
        GuardDecision::Redirect(DASHBOARD_PATH.to_owned())
    } else {
        GuardDecision::Render(LOGIN_PATH.to_owned())
    }
}
