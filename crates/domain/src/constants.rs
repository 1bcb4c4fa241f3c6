//! Application constants
//!
//! Centralized location for the backend contract constants and the tuning
//! values of the interactive widgets.

// API base resolution
pub const LOCAL_API_BASE: &str = "http://127.0.0.1:8000/api";
pub const RELATIVE_API_PATH: &str = "/api";
pub const LOCAL_HOSTNAMES: [&str; 2] = ["localhost", "127.0.0.1"];
pub const DEFAULT_ORIGIN: &str = "http://localhost";

// Session expiry
pub const LOGIN_PATH: &str = "/login.html";
pub const REDIRECT_AFTER_LOGIN_KEY: &str = "redirectAfterLogin";

// Response normalisation
pub const OCTET_STREAM: &str = "application/octet-stream";
pub const GENERIC_ERROR_MESSAGE: &str = "Request failed";
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Download failed";

// Namespace defaults
pub const DEFAULT_DOCUMENT_CATEGORY: &str = "other";
pub const DEFAULT_CONVERSATION_LIMIT: u32 = 50;
pub const DEFAULT_ADMIN_LOG_LIMIT: u32 = 100;

// Midtrans Snap checkout
pub const SNAP_SANDBOX_SCRIPT: &str = "https://app.sandbox.midtrans.com/snap/snap.js";
pub const SNAP_PRODUCTION_SCRIPT: &str = "https://app.midtrans.com/snap/snap.js";

// Slider
pub const REFERENCE_FRAME_MS: f64 = 16.67;
pub const DRAG_SCROLL_MULTIPLIER: f64 = 1.5;
pub const DEFAULT_SLIDER_SPEED: f64 = 0.5;
