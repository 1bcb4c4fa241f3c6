//! Background drivers for time-based widgets
//!
//! Drivers follow the same runtime rules:
//! - Explicit lifecycle management (start/stop)
//! - Join handles for spawned tasks
//! - Cancellation token support
//! - Timeout wrapping when awaiting shutdown

pub mod error;
pub mod slider_driver;

pub use error::{SchedulerError, SchedulerResult};
pub use slider_driver::{SharedPane, SliderDriver, SliderDriverConfig};
