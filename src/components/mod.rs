//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app chrome (navigation, notices) and shared widgets
//! while reading/writing state from Leptos context providers.

pub mod navbar;
pub mod protected;
pub mod toaster;
pub mod wallet_card;
pub mod wallet_select;
