//! Deferred navigation helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Event handlers and async tasks only record *where* to go in a signal; a
//! single effect per component owns the router's navigate function. This
//! keeps the navigate closure out of view children and spawned futures.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

/// Pending navigation target for one component.
pub type RedirectSignal = RwSignal<Option<String>>;

/// Navigate whenever `target` is set, then clear it.
pub fn install_redirect<F>(target: RedirectSignal, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = target.get() {
            target.set(None);
            navigate(&path, NavigateOptions::default());
        }
    });
}

/// Request navigation to `path` after `delay_ms` (immediately outside the
/// browser, where no timers run).
pub fn redirect_after(target: RedirectSignal, path: impl Into<String>, delay_ms: u64) {
    let path = path.into();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(delay_ms)).await;
        let _ = target.try_set(Some(path));
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
        target.set(Some(path));
    }
}
