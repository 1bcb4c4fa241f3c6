//! Session expiry ports and policies
//!
//! The backend authenticates with an HttpOnly cookie, so the client learns a
//! session has expired only when a call answers 401. What happens next is a
//! policy injected into the API client:
//!
//! - [`RedirectToLogin`] remembers where the user was and sends them to the
//!   login page (interactive pages);
//! - [`IgnoreSessionExpiry`] does nothing (background calls, session probes).
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use uplokal_core::session::{
//!     MemoryRedirectStore, Navigator, RecordingNavigator, RedirectStore, RedirectToLogin,
//!     SessionExpiryHandler,
//! };
//! use uplokal_domain::config::SessionConfig;
//!
//! let navigator = Arc::new(RecordingNavigator::at("/dashboard/rfq.html"));
//! let store = Arc::new(MemoryRedirectStore::default());
//! let policy = RedirectToLogin::new(SessionConfig::default(), navigator.clone(), store.clone());
//!
//! policy.session_expired();
//!
//! assert_eq!(navigator.current_path(), "/login.html");
//! assert_eq!(store.take_redirect("redirectAfterLogin").as_deref(), Some("/dashboard/rfq.html"));
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::info;
use uplokal_domain::config::SessionConfig;

/// Reaction to a 401 response.
///
/// Invoked exactly once per unauthorised response, before the error is
/// handed back to the caller.
pub trait SessionExpiryHandler: Send + Sync {
    fn session_expired(&self);
}

/// Host page navigation.
pub trait Navigator: Send + Sync {
    /// Path of the current page, e.g. `/dashboard/index.html`.
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Per-session key/value storage surviving a navigation.
pub trait RedirectStore: Send + Sync {
    fn save_redirect(&self, key: &str, path: &str);
    /// Read and remove the value stored under `key`.
    fn take_redirect(&self, key: &str) -> Option<String>;
}

/// Save the current path, then navigate to the login page.
pub struct RedirectToLogin {
    config: SessionConfig,
    navigator: Arc<dyn Navigator>,
    store: Arc<dyn RedirectStore>,
}

impl RedirectToLogin {
    pub fn new(
        config: SessionConfig,
        navigator: Arc<dyn Navigator>,
        store: Arc<dyn RedirectStore>,
    ) -> Self {
        Self { config, navigator, store }
    }
}

impl std::fmt::Debug for RedirectToLogin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedirectToLogin").field("config", &self.config).finish_non_exhaustive()
    }
}

impl SessionExpiryHandler for RedirectToLogin {
    fn session_expired(&self) {
        let current = self.navigator.current_path();
        info!(from = %current, to = %self.config.login_path, "session expired, redirecting to login");

        self.store.save_redirect(&self.config.redirect_key, &current);
        self.navigator.navigate(&self.config.login_path);
    }
}

/// No-op policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreSessionExpiry;

impl SessionExpiryHandler for IgnoreSessionExpiry {
    fn session_expired(&self) {}
}

/// In-process [`RedirectStore`].
#[derive(Debug, Default)]
pub struct MemoryRedirectStore {
    entries: Mutex<HashMap<String, String>>,
}

impl RedirectStore for MemoryRedirectStore {
    fn save_redirect(&self, key: &str, path: &str) {
        self.entries.lock().insert(key.to_string(), path.to_string());
    }

    fn take_redirect(&self, key: &str) -> Option<String> {
        self.entries.lock().remove(key)
    }
}

/// [`Navigator`] that only records where it was sent.
///
/// Used by headless hosts and tests; `history()` lists every navigation.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    current: Mutex<String>,
    history: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn at(path: impl Into<String>) -> Self {
        Self { current: Mutex::new(path.into()), history: Mutex::new(Vec::new()) }
    }

    pub fn history(&self) -> Vec<String> {
        self.history.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn current_path(&self) -> String {
        self.current.lock().clone()
    }

    fn navigate(&self, path: &str) {
        *self.current.lock() = path.to_string();
        self.history.lock().push(path.to_string());
    }
}
