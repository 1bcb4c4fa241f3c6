//! # Uplokal Infrastructure
//!
//! Impure half of the workspace: everything that touches the network, the
//! filesystem, the environment or the tokio runtime.
//!
//! This crate contains:
//! - The shared HTTP client (timeouts, bounded retries, cookie session)
//! - The backend API client and its per-namespace views
//! - Configuration loading from environment variables and files
//! - Frame drivers for auto-scrolling sliders
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Implements ports defined in `uplokal-core`
//! - Depends on `uplokal-domain` for types, config and errors

pub mod api;
pub mod config;
pub mod errors;
pub mod http;
pub mod observability;
pub mod scheduling;

// Re-export commonly used items
pub use api::{ApiClient, ApiClientBuilder, ApiError, ApiErrorCategory, ApiPayload, MultipartForm};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::{init_tracing, LogFormat};
pub use scheduling::{SchedulerError, SliderDriver, SliderDriverConfig};
