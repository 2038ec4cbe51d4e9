use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::drag::{DragController, Point};
use crate::editor::TextBuffer;
use crate::history::{AttributeHistory, AttributeSnapshot};
use crate::ui::layout::{BoxGeometry, ScreenLayout};

const TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
struct Toast {
    level: ToastLevel,
    message: String,
    expires_at: Instant,
}

/// Where keyboard input goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Keys are shortcuts for formatting, history and the box.
    #[default]
    Canvas,
    /// Keys edit the box text.
    Text,
}

/// The complete application state.
///
/// All state lives here - no global or scattered state.
pub struct Model {
    /// Text and formatting, with undo/redo
    pub history: AttributeHistory,
    /// Box position and drag session
    pub drag: DragController,
    /// Cursor-aware copy of the live text; always equal to
    /// `history.current().text`
    pub text: TextBuffer,
    /// Keyboard focus
    pub focus: Focus,
    /// Terminal size in cells (width, height)
    pub terminal_size: (u16, u16),
    /// Global config path shown in help
    pub config_global_path: Option<PathBuf>,
    /// Local override path shown in help
    pub config_local_path: Option<PathBuf>,
    /// Whether help overlay is visible
    pub help_visible: bool,
    toast: Option<Toast>,
    /// Whether the app should quit
    pub should_quit: bool,
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("cursor", &self.history.cursor())
            .field("entries", &self.history.len())
            .field("position", &self.drag.position())
            .field("dragging", &self.drag.is_active())
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

impl Model {
    /// Create a model seeded with `seed` and the box at `position`.
    pub fn new(seed: AttributeSnapshot, position: Point, terminal_size: (u16, u16)) -> Self {
        let text = TextBuffer::from_text(&seed.text);
        Self {
            history: AttributeHistory::new(seed),
            drag: DragController::new(position),
            text,
            focus: Focus::Canvas,
            terminal_size,
            config_global_path: None,
            config_local_path: None,
            help_visible: false,
            toast: None,
            should_quit: false,
        }
    }

    /// The live snapshot.
    pub fn snapshot(&self) -> &AttributeSnapshot {
        self.history.current()
    }

    pub fn layout(&self) -> ScreenLayout {
        ScreenLayout::for_size(self.terminal_size.0, self.terminal_size.1)
    }

    pub const fn box_geometry(&self) -> BoxGeometry {
        BoxGeometry::at(self.drag.position())
    }

    /// Move the box into view when it does not fit the canvas.
    ///
    /// Returns true when the box was moved.
    pub fn bring_box_into_view(&mut self) -> bool {
        let canvas = self.layout().canvas;
        if self.box_geometry().fits_within(canvas) {
            return false;
        }
        self.drag.place(BoxGeometry::centered_in(canvas));
        true
    }

    /// First visible line and column of the text area.
    ///
    /// Scrolls just enough to keep the cursor on screen.
    pub fn text_scroll(&self) -> (usize, usize) {
        let (width, height) = BoxGeometry::text_size();
        let top = self
            .text
            .cursor()
            .line
            .saturating_sub(usize::from(height).saturating_sub(1));
        let left = self
            .text
            .cursor_display_col()
            .saturating_sub(usize::from(width).saturating_sub(1));
        (top, left)
    }

    /// Record the buffer content as a text edit.
    pub(super) fn record_text_edit(&mut self) {
        self.history.set_text(self.text.text());
    }

    /// Push the live snapshot's text back into the buffer after undo/redo.
    pub(super) fn sync_text_from_history(&mut self) {
        let text = self.history.current().text.clone();
        self.text.replace_text(&text);
    }

    pub fn show_toast(&mut self, level: ToastLevel, message: impl Into<String>) {
        self.toast = Some(Toast {
            level,
            message: message.into(),
            expires_at: Instant::now() + TOAST_DURATION,
        });
    }

    pub(super) fn expire_toast(&mut self, now: Instant) -> bool {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.expires_at <= now)
        {
            self.toast = None;
            return true;
        }
        false
    }

    pub fn active_toast(&self) -> Option<(&str, ToastLevel)> {
        self.toast
            .as_ref()
            .map(|toast| (toast.message.as_str(), toast.level))
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new(
            AttributeSnapshot::default(),
            crate::drag::INITIAL_POSITION,
            (80, 24),
        )
    }
}
