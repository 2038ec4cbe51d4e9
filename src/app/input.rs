use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::app::model::Focus;
use crate::app::{App, Message, Model};
use crate::drag::Point;
use crate::editor::Direction;
use crate::ui::layout::{Control, Slot, point_in_rect};

impl App {
    pub(super) fn handle_event(event: &Event, model: &Model) -> Option<Message> {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => Self::handle_key(*key, model),
            Event::Mouse(mouse) => Self::handle_mouse(*mouse, model),
            Event::Resize(w, h) => Some(Message::Resize(*w, *h)),
            _ => None,
        }
    }

    pub(super) fn handle_mouse(mouse: MouseEvent, model: &Model) -> Option<Message> {
        let pointer = Point::new(i32::from(mouse.column), i32::from(mouse.row));

        // Release and motion must reach the drag session wherever they land.
        match mouse.kind {
            MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                return model
                    .drag
                    .is_active()
                    .then_some(Message::UpdateDrag(pointer));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                return model.drag.is_active().then_some(Message::EndDrag);
            }
            // A press during a drag means the release was lost.
            MouseEventKind::Down(MouseButton::Left) if model.drag.is_active() => {
                return Some(Message::EndDrag);
            }
            _ => {}
        }

        if model.help_visible {
            return matches!(mouse.kind, MouseEventKind::Down(_)).then_some(Message::HideHelp);
        }

        let layout = model.layout();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(control) = layout.control_at(mouse.column, mouse.row) {
                    return control_message(control, model);
                }
                let geometry = model.box_geometry();
                let on_canvas = point_in_rect(mouse.column, mouse.row, layout.canvas);
                if on_canvas && geometry.text_area_contains(pointer) {
                    let (top, left) = model.text_scroll();
                    let rel = pointer - geometry.text_origin();
                    let line = top + usize::try_from(rel.y).unwrap_or(0);
                    let column = left + usize::try_from(rel.x).unwrap_or(0);
                    return Some(Message::FocusText { line, column });
                }
                if on_canvas && geometry.contains(pointer) {
                    return Some(Message::BeginDrag(pointer));
                }
                (model.focus == Focus::Text).then_some(Message::BlurText)
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                let up = matches!(mouse.kind, MouseEventKind::ScrollUp);
                match layout.slot_at(mouse.column, mouse.row)? {
                    Slot::Button(Control::FontFamily) => Some(if up {
                        Message::PrevFontFamily
                    } else {
                        Message::NextFontFamily
                    }),
                    Slot::SizeLabel => Some(if up {
                        Message::IncreaseFontSize
                    } else {
                        Message::DecreaseFontSize
                    }),
                    Slot::Button(_) => None,
                }
            }
            _ => None,
        }
    }

    pub(super) fn handle_key(key: KeyEvent, model: &Model) -> Option<Message> {
        if model.help_visible {
            return Some(Message::HideHelp);
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);

        // Shortcuts that work regardless of focus
        if ctrl {
            match key.code {
                KeyCode::Char('c' | 'q') => return Some(Message::Quit),
                KeyCode::Char('z') if key.modifiers.contains(KeyModifiers::SHIFT) => {
                    return Some(Message::Redo);
                }
                KeyCode::Char('Z' | 'y') => return Some(Message::Redo),
                KeyCode::Char('z') => return Some(Message::Undo),
                KeyCode::Char('b') => return Some(Message::ToggleBold),
                KeyCode::Char('i') => return Some(Message::ToggleItalic),
                KeyCode::Char('u') => return Some(Message::ToggleUnderline),
                KeyCode::Char('l') => return Some(Message::Redraw),
                _ => {}
            }
        }
        match key.code {
            KeyCode::F(1) => return Some(Message::ToggleHelp),
            KeyCode::F(2) => return Some(Message::ToggleItalic),
            _ => {}
        }

        if model.focus == Focus::Text {
            return match key.code {
                KeyCode::Esc => Some(Message::BlurText),
                KeyCode::Enter => Some(Message::SplitLine),
                KeyCode::Backspace => Some(Message::DeleteBack),
                KeyCode::Delete => Some(Message::DeleteForward),
                KeyCode::Left => Some(Message::MoveCursor(Direction::Left)),
                KeyCode::Right => Some(Message::MoveCursor(Direction::Right)),
                KeyCode::Up => Some(Message::MoveCursor(Direction::Up)),
                KeyCode::Down => Some(Message::MoveCursor(Direction::Down)),
                KeyCode::Home => Some(Message::MoveHome),
                KeyCode::End => Some(Message::MoveEnd),
                KeyCode::Char(c) if !ctrl && !alt => Some(Message::InsertChar(c)),
                _ => None,
            };
        }

        match key.code {
            // History
            KeyCode::Char('z') => Some(Message::Undo),
            KeyCode::Char('y' | 'Z') => Some(Message::Redo),

            // Formatting
            KeyCode::Char('b') => Some(Message::ToggleBold),
            KeyCode::Char('i') => Some(Message::ToggleItalic),
            KeyCode::Char('u') => Some(Message::ToggleUnderline),
            KeyCode::Char('+' | '=') => Some(Message::IncreaseFontSize),
            KeyCode::Char('-' | '_') => Some(Message::DecreaseFontSize),
            KeyCode::Char('f') => Some(Message::NextFontFamily),
            KeyCode::Char('F') => Some(Message::PrevFontFamily),

            // Box
            KeyCode::Char('c') => Some(Message::CenterBox),
            KeyCode::Enter | KeyCode::Char('e') => Some(Message::EditText),

            // Application
            KeyCode::Char('?') => Some(Message::ToggleHelp),
            KeyCode::Char('q') => Some(Message::Quit),
            _ => None,
        }
    }
}

fn control_message(control: Control, model: &Model) -> Option<Message> {
    match control {
        Control::Undo => model.history.can_undo().then_some(Message::Undo),
        Control::Redo => model.history.can_redo().then_some(Message::Redo),
        Control::FontFamily => Some(Message::NextFontFamily),
        Control::DecreaseSize => Some(Message::DecreaseFontSize),
        Control::IncreaseSize => Some(Message::IncreaseFontSize),
        Control::Bold => Some(Message::ToggleBold),
        Control::Italic => Some(Message::ToggleItalic),
        Control::Underline => Some(Message::ToggleUnderline),
    }
}
