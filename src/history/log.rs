use tracing::debug;

use super::snapshot::{AttributeSnapshot, FontFamily, FontStyle, MIN_FONT_SIZE, SnapshotPatch};

/// Linear undo/redo log over whole-document snapshots.
///
/// `entries` is never empty and `entries[cursor]` is always the live
/// document. Recording an edit while the cursor is behind the tail drops
/// every entry after the cursor first, so undone states become unreachable
/// once the user diverges from them.
///
/// ```
/// use dragbox::history::{AttributeHistory, FontFamily};
///
/// let mut history = AttributeHistory::default();
/// history.set_font_family(FontFamily::Georgia);
/// history.toggle_bold();
/// history.undo();
/// assert_eq!(history.current().font_family, FontFamily::Georgia);
/// assert!(!history.current().is_bold);
/// assert!(history.can_redo());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeHistory {
    entries: Vec<AttributeSnapshot>,
    cursor: usize,
}

impl Default for AttributeHistory {
    fn default() -> Self {
        Self::new(AttributeSnapshot::default())
    }
}

impl AttributeHistory {
    /// Start a log holding only `seed`.
    pub fn new(seed: AttributeSnapshot) -> Self {
        Self {
            entries: vec![seed],
            cursor: 0,
        }
    }

    /// The live snapshot.
    pub fn current(&self) -> &AttributeSnapshot {
        &self.entries[self.cursor]
    }

    /// Index of the live snapshot.
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of recorded snapshots, seed included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the log is seeded at construction.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All recorded snapshots, oldest first.
    pub fn entries(&self) -> &[AttributeSnapshot] {
        &self.entries
    }

    pub const fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Record `current` with `patch` applied as the new live snapshot.
    ///
    /// Identical consecutive snapshots are not collapsed: every call adds
    /// exactly one entry.
    pub fn apply_edit(&mut self, patch: SnapshotPatch) {
        let next = self.current().with_patch(patch);
        let dropped = self.entries.len() - (self.cursor + 1);
        self.entries.truncate(self.cursor + 1);
        self.entries.push(next);
        self.cursor = self.entries.len() - 1;
        debug!(
            cursor = self.cursor,
            len = self.entries.len(),
            dropped,
            "history.apply"
        );
    }

    /// Step back one entry. Returns false (and does nothing) at the oldest.
    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.cursor -= 1;
        debug!(cursor = self.cursor, len = self.entries.len(), "history.undo");
        true
    }

    /// Step forward one entry. Returns false (and does nothing) at the newest.
    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.cursor += 1;
        debug!(cursor = self.cursor, len = self.entries.len(), "history.redo");
        true
    }

    // --- Attribute setters ---

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.apply_edit(SnapshotPatch::new().text(text));
    }

    /// Grow the font by one point. There is no upper bound.
    pub fn increment_font_size(&mut self) {
        let size = self.current().font_size.saturating_add(1);
        self.apply_edit(SnapshotPatch::new().font_size(size));
    }

    /// Shrink the font by one point, never below [`MIN_FONT_SIZE`].
    ///
    /// At the floor this still records an entry carrying the same size.
    pub fn decrement_font_size(&mut self) {
        let size = self
            .current()
            .font_size
            .saturating_sub(1)
            .max(MIN_FONT_SIZE);
        self.apply_edit(SnapshotPatch::new().font_size(size));
    }

    pub fn set_font_style(&mut self, style: FontStyle) {
        self.apply_edit(SnapshotPatch::new().font_style(style));
    }

    /// Switch between normal and italic.
    pub fn toggle_italic(&mut self) {
        let style = self.current().font_style.flipped();
        self.set_font_style(style);
    }

    pub fn toggle_bold(&mut self) {
        let bold = !self.current().is_bold;
        self.apply_edit(SnapshotPatch::new().bold(bold));
    }

    pub fn set_font_family(&mut self, family: FontFamily) {
        self.apply_edit(SnapshotPatch::new().font_family(family));
    }

    pub fn toggle_underline(&mut self) {
        let underline = !self.current().is_underline;
        self.apply_edit(SnapshotPatch::new().underline(underline));
    }
}
