//! Document attributes and their undo/redo history.
//!
//! - [`AttributeSnapshot`]: the text plus every formatting attribute
//! - [`SnapshotPatch`]: a partial update applied by copy-with-override
//! - [`AttributeHistory`]: the linear log and its cursor

mod log;
mod snapshot;

pub use log::AttributeHistory;
pub use snapshot::{
    AttributeSnapshot, DEFAULT_FONT_SIZE, DEFAULT_TEXT, FONT_FAMILIES, FontFamily, FontStyle,
    MIN_FONT_SIZE, SnapshotPatch, UnknownFontFamily,
};
