//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Everything here is a pure function of the terminal area (and, for the
//! box, of its position), so input handling can ask "what is under this
//! cell?" without a rendered frame.

use ratatui::layout::Rect;

use crate::drag::Point;

/// Outer width of the box, border included.
pub const BOX_WIDTH: u16 = 30;
/// Outer height of the box, border included.
pub const BOX_HEIGHT: u16 = 9;
/// Columns between the box border and the text area on each side.
pub const TEXT_PADDING: u16 = 1;

const SLOT_GAP: u16 = 1;

/// A clickable toolbar or format-bar control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Undo,
    Redo,
    FontFamily,
    DecreaseSize,
    IncreaseSize,
    Bold,
    Italic,
    Underline,
}

/// One fixed-width cell group in a bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Button(Control),
    /// Read-only font size readout between `-` and `+`.
    SizeLabel,
}

const TOOLBAR_SLOTS: [(Slot, u16); 2] = [
    (Slot::Button(Control::Undo), 10),
    (Slot::Button(Control::Redo), 10),
];

/// Widths fit the longest family name ("Times New Roman") plus arrows.
const FORMAT_SLOTS: [(Slot, u16); 7] = [
    (Slot::Button(Control::FontFamily), 19),
    (Slot::Button(Control::DecreaseSize), 3),
    (Slot::SizeLabel, 6),
    (Slot::Button(Control::IncreaseSize), 3),
    (Slot::Button(Control::Bold), 3),
    (Slot::Button(Control::Italic), 3),
    (Slot::Button(Control::Underline), 3),
];

/// The four horizontal bands of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub toolbar: Rect,
    pub canvas: Rect,
    pub format_bar: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let row = |offset: u16| Rect {
            y: area.y + offset.min(area.height.saturating_sub(1)),
            height: u16::from(area.height > offset),
            ..area
        };
        let toolbar = row(0);
        let status = row(area.height.saturating_sub(1));
        let format_bar = row(area.height.saturating_sub(2));
        let canvas = Rect {
            y: area.y + 1,
            height: area.height.saturating_sub(3),
            ..area
        };
        Self {
            toolbar,
            canvas,
            format_bar,
            status,
        }
    }

    /// Layout for a terminal of `width` x `height` cells.
    pub fn for_size(width: u16, height: u16) -> Self {
        Self::new(Rect::new(0, 0, width, height))
    }

    pub fn toolbar_slots(&self) -> Vec<(Slot, Rect)> {
        lay_out_slots(self.toolbar, &TOOLBAR_SLOTS)
    }

    pub fn format_slots(&self) -> Vec<(Slot, Rect)> {
        lay_out_slots(self.format_bar, &FORMAT_SLOTS)
    }

    /// The slot under a screen cell, if any.
    pub fn slot_at(&self, column: u16, row: u16) -> Option<Slot> {
        self.toolbar_slots()
            .into_iter()
            .chain(self.format_slots())
            .find(|(_, rect)| point_in_rect(column, row, *rect))
            .map(|(slot, _)| slot)
    }

    /// The control under a screen cell, if any.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        match self.slot_at(column, row)? {
            Slot::Button(control) => Some(control),
            Slot::SizeLabel => None,
        }
    }
}

/// Centre fixed-width slots in a one-row bar. Slots that do not fit are
/// dropped from the right.
fn lay_out_slots(area: Rect, slots: &[(Slot, u16)]) -> Vec<(Slot, Rect)> {
    if area.height == 0 {
        return Vec::new();
    }
    let gaps = SLOT_GAP * u16::try_from(slots.len().saturating_sub(1)).unwrap_or(u16::MAX);
    let total: u16 = slots
        .iter()
        .map(|(_, w)| *w)
        .fold(gaps, u16::saturating_add);
    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let right = area.x + area.width;
    let mut out = Vec::with_capacity(slots.len());
    for &(slot, width) in slots {
        if x + width > right {
            break;
        }
        out.push((slot, Rect::new(x, area.y, width, 1)));
        x += width + SLOT_GAP;
    }
    out
}

pub const fn point_in_rect(col: u16, row: u16, rect: Rect) -> bool {
    col >= rect.x && col < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
}

/// The box at a given position, in signed screen coordinates.
///
/// The box may hang off any edge of the screen, so geometry is kept in
/// [`Point`] space and only clipped to a [`Rect`] for drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxGeometry {
    pub origin: Point,
}

impl BoxGeometry {
    pub const fn at(origin: Point) -> Self {
        Self { origin }
    }

    pub const fn width() -> i32 {
        BOX_WIDTH as i32
    }

    pub const fn height() -> i32 {
        BOX_HEIGHT as i32
    }

    /// Top-left cell of the text area.
    pub const fn text_origin(&self) -> Point {
        Point::new(
            self.origin.x.saturating_add(1 + TEXT_PADDING as i32),
            self.origin.y.saturating_add(1),
        )
    }

    /// Text area size in cells (columns, rows).
    pub const fn text_size() -> (u16, u16) {
        (
            BOX_WIDTH.saturating_sub(2 + 2 * TEXT_PADDING),
            BOX_HEIGHT.saturating_sub(2),
        )
    }

    pub const fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x.saturating_add(Self::width())
            && p.y >= self.origin.y
            && p.y < self.origin.y.saturating_add(Self::height())
    }

    /// True for points inside the editable text area. Presses here edit
    /// text and never start a drag.
    pub const fn text_area_contains(&self, p: Point) -> bool {
        let origin = self.text_origin();
        let (w, h) = Self::text_size();
        p.x >= origin.x
            && p.x < origin.x.saturating_add(w as i32)
            && p.y >= origin.y
            && p.y < origin.y.saturating_add(h as i32)
    }

    /// Position that centres the box inside `area`.
    pub fn centered_in(area: Rect) -> Point {
        let x = i32::from(area.x) + (i32::from(area.width) - Self::width()).max(0) / 2;
        let y = i32::from(area.y) + (i32::from(area.height) - Self::height()).max(0) / 2;
        Point::new(x, y)
    }

    /// True when every cell of the box lies inside `area`.
    pub fn fits_within(&self, area: Rect) -> bool {
        self.origin.x >= i32::from(area.x)
            && self.origin.y >= i32::from(area.y)
            && self.origin.x.saturating_add(Self::width())
                <= i32::from(area.x) + i32::from(area.width)
            && self.origin.y.saturating_add(Self::height())
                <= i32::from(area.y) + i32::from(area.height)
    }
}

/// Screen cell for a point, if it lies on a representable cell.
pub fn point_to_cell(p: Point) -> Option<(u16, u16)> {
    Some((u16::try_from(p.x).ok()?, u16::try_from(p.y).ok()?))
}
