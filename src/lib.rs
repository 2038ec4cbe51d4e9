// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. drag::DragController)
    clippy::module_name_repetitions
)]

//! # dragbox
//!
//! A draggable, formattable text box for the terminal.
//!
//! dragbox shows a single box of text on a canvas with:
//! - Bold, italic, underline, font size and font family controls
//! - Linear undo/redo over whole snapshots of text and formatting
//! - Mouse dragging of the box by its frame
//!
//! ## Architecture
//!
//! dragbox uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`history`]: Attribute snapshots and the undo/redo log
//! - [`drag`]: Box position and drag sessions
//! - [`editor`]: Cursor-aware text buffer for the box contents
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Flag files and startup defaults

pub mod app;
pub mod config;
pub mod drag;
pub mod editor;
pub mod history;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::drag::{DragController, DragState, Point};
    pub use crate::history::{AttributeHistory, AttributeSnapshot, FontFamily, FontStyle};
}
