//! Box positioning and the press/move/release drag protocol.
//!
//! The [`DragController`] is pure arithmetic over [`Point`]s in the same
//! coordinate space as pointer events (terminal cells for the app). It has
//! no history: dragging never touches the undo log.

use std::ops::{Add, Sub};

use tracing::{debug, trace};

/// Top-left of the box when the widget starts.
pub const INITIAL_POSITION: Point = Point::new(100, 100);

/// A position or offset in pointer coordinates.
///
/// Signed so the box can be dragged partly off the left or top edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Whether a drag is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    /// `grab_offset` is the pointer position minus the box origin, captured
    /// at press time.
    Dragging { grab_offset: Point },
}

/// Owns the box position and the transient drag session.
///
/// ```
/// use dragbox::drag::{DragController, Point};
///
/// let mut drag = DragController::new(Point::new(100, 100));
/// drag.begin_drag(Point::new(150, 120), drag.position());
/// drag.update_drag(Point::new(200, 180));
/// assert_eq!(drag.position(), Point::new(150, 160));
/// drag.end_drag();
/// drag.update_drag(Point::new(0, 0));
/// assert_eq!(drag.position(), Point::new(150, 160));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragController {
    position: Point,
    state: DragState,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(INITIAL_POSITION)
    }
}

impl DragController {
    pub const fn new(position: Point) -> Self {
        Self {
            position,
            state: DragState::Idle,
        }
    }

    /// Current top-left of the box.
    pub const fn position(&self) -> Point {
        self.position
    }

    pub const fn state(&self) -> DragState {
        self.state
    }

    pub const fn is_active(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Offset captured by the running drag, `None` while idle.
    pub const fn grab_offset(&self) -> Option<Point> {
        match self.state {
            DragState::Dragging { grab_offset } => Some(grab_offset),
            DragState::Idle => None,
        }
    }

    /// Start a drag from a press at `pointer` on a box whose origin is
    /// `box_origin`. Pressing again mid-drag re-captures the offset.
    ///
    /// The caller decides whether the press may start a drag at all; presses
    /// inside the text area must be routed to editing instead.
    pub fn begin_drag(&mut self, pointer: Point, box_origin: Point) {
        let grab_offset = pointer - box_origin;
        self.state = DragState::Dragging { grab_offset };
        debug!(?pointer, ?box_origin, ?grab_offset, "drag.begin");
    }

    /// Follow the pointer while dragging. Safe to call on every move event:
    /// it does nothing while idle.
    pub fn update_drag(&mut self, pointer: Point) {
        if let DragState::Dragging { grab_offset } = self.state {
            self.position = pointer - grab_offset;
            trace!(?pointer, position = ?self.position, "drag.update");
        }
    }

    /// Put the box at `position` without a pointer, ending any drag.
    pub fn place(&mut self, position: Point) {
        self.state = DragState::Idle;
        self.position = position;
        debug!(?position, "drag.place");
    }

    /// Finish the drag. Idempotent.
    pub fn end_drag(&mut self) {
        if self.is_active() {
            debug!(position = ?self.position, "drag.end");
        }
        self.state = DragState::Idle;
    }
}
