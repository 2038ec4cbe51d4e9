//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`layout`]: Screen bands, toolbar slots and box geometry
//! - [`style`]: Theming and colors

pub mod layout;
pub mod style;

mod overlays;
mod render;
mod status;

pub use render::{render, slice_columns};
