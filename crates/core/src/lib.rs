//! # Uplokal Core
//!
//! Pure client-side logic - no network or UI dependencies.
//!
//! This crate contains:
//! - The Kanban board and its drag-and-drop reordering
//! - The auto-scrolling slider state machine
//! - Ports for host integration (session expiry, navigation, checkout)
//!
//! ## Architecture Principles
//! - Only depends on `uplokal-domain`
//! - No HTTP, timers or rendering code
//! - Host environment reached through traits

pub mod kanban;
pub mod payment;
pub mod session;
pub mod slider;

pub use kanban::{
    drop_target, Board, CardGeometry, CardId, Column, ColumnCount, ColumnId, DragEnd, DragSession,
    DragState, NewTask, TaskCard, TaskLabel,
};
pub use payment::CheckoutGateway;
pub use session::{
    IgnoreSessionExpiry, MemoryRedirectStore, Navigator, RecordingNavigator, RedirectStore,
    RedirectToLogin, SessionExpiryHandler,
};
pub use slider::{AutoSlider, ScrollSurface, SliderPane, SliderState};
