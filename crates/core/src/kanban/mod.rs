//! Kanban task board
//!
//! The board keeps an explicit ordered list of card ids per column; any view
//! is rendered from it. Drag-and-drop reordering is a small state machine
//! ([`DragSession`]) that mutates the board from pointer positions.

pub mod board;
pub mod drag;

pub use board::{Board, CardId, Column, ColumnCount, ColumnId, NewTask, TaskCard, TaskLabel};
pub use drag::{drop_target, CardGeometry, DragEnd, DragSession, DragState};
