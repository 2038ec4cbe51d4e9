use crate::app::model::{Focus, ToastLevel};
use crate::app::Model;
use crate::drag::Point;
use crate::editor::Direction;
use crate::history::FontFamily;
use crate::ui::layout::BoxGeometry;

/// All possible events and actions in the application.
///
/// These represent user input, system events, and internal actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // History
    /// Step back one edit
    Undo,
    /// Step forward one edit
    Redo,

    // Formatting
    ToggleBold,
    ToggleItalic,
    ToggleUnderline,
    /// Font size +1
    IncreaseFontSize,
    /// Font size -1, floored at the minimum
    DecreaseFontSize,
    SetFontFamily(FontFamily),
    /// Select the next family in selector order
    NextFontFamily,
    /// Select the previous family in selector order
    PrevFontFamily,

    // Drag
    /// Press on the box frame at a screen cell
    BeginDrag(Point),
    /// Pointer moved (ignored unless dragging)
    UpdateDrag(Point),
    /// Pointer released
    EndDrag,
    /// Move the box back to the middle of the canvas
    CenterBox,

    // Text area
    /// Focus the text area with the cursor at a line and screen column
    FocusText { line: usize, column: usize },
    /// Focus the text area keeping the cursor where it is
    EditText,
    /// Return keyboard focus to the canvas
    BlurText,
    /// Insert a character at the cursor
    InsertChar(char),
    /// Delete character before cursor (Backspace)
    DeleteBack,
    /// Delete character at cursor (Delete)
    DeleteForward,
    /// Split line at cursor (Enter)
    SplitLine,
    /// Move cursor in a direction
    MoveCursor(Direction),
    /// Move cursor to beginning of line (Home)
    MoveHome,
    /// Move cursor to end of line (End)
    MoveEnd,

    // Window
    /// Toggle help overlay
    ToggleHelp,
    /// Hide help overlay
    HideHelp,
    /// Terminal resized
    Resize(u16, u16),
    /// Redraw screen
    Redraw,

    // Application
    /// Quit the application
    Quit,
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // History
        Message::Undo => {
            if model.history.undo() {
                model.sync_text_from_history();
            } else {
                model.show_toast(ToastLevel::Info, "Nothing to undo");
            }
        }
        Message::Redo => {
            if model.history.redo() {
                model.sync_text_from_history();
            } else {
                model.show_toast(ToastLevel::Info, "Nothing to redo");
            }
        }

        // Formatting
        Message::ToggleBold => model.history.toggle_bold(),
        Message::ToggleItalic => model.history.toggle_italic(),
        Message::ToggleUnderline => model.history.toggle_underline(),
        Message::IncreaseFontSize => model.history.increment_font_size(),
        Message::DecreaseFontSize => model.history.decrement_font_size(),
        Message::SetFontFamily(family) => model.history.set_font_family(family),
        Message::NextFontFamily => {
            let family = model.snapshot().font_family.next();
            model.history.set_font_family(family);
        }
        Message::PrevFontFamily => {
            let family = model.snapshot().font_family.prev();
            model.history.set_font_family(family);
        }

        // Drag
        Message::BeginDrag(pointer) => {
            model.focus = Focus::Canvas;
            let origin = model.drag.position();
            model.drag.begin_drag(pointer, origin);
        }
        Message::UpdateDrag(pointer) => model.drag.update_drag(pointer),
        Message::EndDrag => model.drag.end_drag(),
        Message::CenterBox => {
            let canvas = model.layout().canvas;
            model.drag.place(BoxGeometry::centered_in(canvas));
        }

        // Text area
        Message::FocusText { line, column } => {
            model.focus = Focus::Text;
            model.text.move_to_display(line, column);
        }
        Message::EditText => model.focus = Focus::Text,
        Message::BlurText => model.focus = Focus::Canvas,
        Message::InsertChar(ch) => {
            model.text.insert_char(ch);
            model.record_text_edit();
        }
        Message::SplitLine => {
            model.text.split_line();
            model.record_text_edit();
        }
        Message::DeleteBack => {
            if model.text.delete_back() {
                model.record_text_edit();
            }
        }
        Message::DeleteForward => {
            if model.text.delete_forward() {
                model.record_text_edit();
            }
        }
        Message::MoveCursor(direction) => model.text.move_cursor(direction),
        Message::MoveHome => model.text.move_home(),
        Message::MoveEnd => model.text.move_end(),

        // Window
        Message::ToggleHelp => model.help_visible = !model.help_visible,
        Message::HideHelp => model.help_visible = false,
        Message::Resize(width, height) => model.terminal_size = (width, height),
        Message::Redraw => {}

        // Application
        Message::Quit => model.should_quit = true,
    }
    model
}
