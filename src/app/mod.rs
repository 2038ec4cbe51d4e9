//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod event_loop;
mod input;
mod model;
mod update;

pub use model::{Focus, Model, ToastLevel};
pub use update::{Message, update};

use std::path::PathBuf;

use crate::drag::{INITIAL_POSITION, Point};
use crate::history::AttributeSnapshot;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    seed: AttributeSnapshot,
    position: Point,
    config_global_path: Option<PathBuf>,
    config_local_path: Option<PathBuf>,
    startup_warnings: Vec<String>,
}

impl App {
    /// Create a new application with the given seed snapshot.
    pub fn new(seed: AttributeSnapshot) -> Self {
        Self {
            seed,
            position: INITIAL_POSITION,
            config_global_path: None,
            config_local_path: None,
            startup_warnings: Vec::new(),
        }
    }

    /// Set the initial box position.
    pub const fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Set config paths to show in help.
    pub fn with_config_paths(
        mut self,
        global_path: Option<PathBuf>,
        local_path: Option<PathBuf>,
    ) -> Self {
        self.config_global_path = global_path;
        self.config_local_path = local_path;
        self
    }

    /// Warnings to surface once the UI is up (e.g. bad config values).
    pub fn with_startup_warnings(mut self, warnings: Vec<String>) -> Self {
        self.startup_warnings = warnings;
        self
    }
}

#[cfg(test)]
mod tests;
