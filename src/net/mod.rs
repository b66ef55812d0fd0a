//! Networking modules for the wallet backend REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `client` attaches the session token and performs requests, `api` names
//! each backend endpoint, `types` defines the wire schema, and `error` the
//! failure taxonomy shown to users.

pub mod api;
pub mod client;
pub mod error;
pub mod types;
