//! Client-side application state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submodule holds one plain struct wrapped in an `RwSignal`. `auth`,
//! `notice` and `ui` are provided app-wide by `app::App`; `wallets` is owned
//! by each page that lists wallets. The structs carry no reactivity so their
//! transitions are testable natively. `theme` is not a signal: it persists the
//! choice mirrored in `ui`.

pub mod auth;
pub mod notice;
pub mod session;
pub mod theme;
pub mod ui;
pub mod wallets;
