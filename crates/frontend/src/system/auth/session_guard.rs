//! Idempotent session teardown.
//!
//! Any authenticated call can hit a 401; when several are in flight they
//! all fail together. The teardown (clear storage, return to the login
//! entry) must run exactly once, so the guard is a two-state machine with
//! an `expire` transition that is a no-op after the first call, not a
//! boolean flag paired with a timer.

use std::cell::Cell;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

use super::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionState {
    Active,
    Expired,
}

/// Pure guard; the wasm entry point wraps a thread-local instance.
#[derive(Debug)]
pub struct SessionGuard {
    state: Cell<SessionState>,
}

impl SessionGuard {
    pub const fn new() -> Self {
        Self {
            state: Cell::new(SessionState::Active),
        }
    }

    /// Returns true only on the transition Active -> Expired; later calls
    /// observe Expired and do nothing.
    pub fn begin_expiry(&self) -> bool {
        if self.state.get() == SessionState::Expired {
            return false;
        }
        self.state.set(SessionState::Expired);
        true
    }

    pub fn reset(&self) {
        self.state.set(SessionState::Active);
    }
}

thread_local! {
    static GUARD: SessionGuard = const { SessionGuard::new() };
}

/// Global 401 handler, called from deep inside the gateway's response
/// path. Clears the persisted session and reloads to the login entry
/// exactly once, however many concurrent calls fail.
pub fn expire() {
    let first = GUARD.with(|g| g.begin_expiry());
    if !first {
        return;
    }

    log::warn!("Unauthorized response: clearing session");
    storage::clear_session();

    // Reloading lands on the auth gate with no persisted token, i.e. the
    // login screen. The guard resets after a short delay so a login page
    // that was already showing (nothing to reload into) can recover.
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href("/");
    }
    spawn_local(async {
        TimeoutFuture::new(1_000).await;
        GUARD.with(|g| g.reset());
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expiry_fires_exactly_once() {
        let guard = SessionGuard::new();
        assert!(guard.begin_expiry());
        assert!(!guard.begin_expiry());
        assert!(!guard.begin_expiry());
    }

    #[test]
    fn reset_rearms_the_guard() {
        let guard = SessionGuard::new();
        assert!(guard.begin_expiry());
        guard.reset();
        assert!(guard.begin_expiry());
    }
}
