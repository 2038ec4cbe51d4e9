use std::path::PathBuf;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use proptest::prelude::*;

use crate::drag::{INITIAL_POSITION, Point};
use crate::editor::Direction;
use crate::history::{AttributeSnapshot, DEFAULT_TEXT, FontFamily};

use super::{App, Focus, Message, Model, ToastLevel, update};

/// Box fully on screen: frame spans columns 10..40 and rows 5..14; the text
/// area starts at (12, 6).
fn create_test_model() -> Model {
    Model::new(AttributeSnapshot::default(), Point::new(10, 5), (80, 24))
}

fn apply(model: Model, msgs: impl IntoIterator<Item = Message>) -> Model {
    msgs.into_iter().fold(model, update)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

#[test]
fn test_default_model_starts_at_initial_position() {
    let model = Model::default();
    assert_eq!(model.drag.position(), INITIAL_POSITION);
    assert_eq!(model.history.len(), 1);
    assert_eq!(model.text.text(), DEFAULT_TEXT);
    assert_eq!(model.focus, Focus::Canvas);
}

#[test]
fn test_bold_georgia_undo_redo_scenario() {
    let model = apply(
        create_test_model(),
        [
            Message::ToggleBold,
            Message::SetFontFamily(FontFamily::Georgia),
        ],
    );
    assert_eq!(model.history.len(), 3);
    assert_eq!(model.snapshot().font_family, FontFamily::Georgia);
    assert!(model.snapshot().is_bold);

    let model = update(model, Message::Undo);
    assert_eq!(model.snapshot().font_family, FontFamily::Arial);
    assert!(model.snapshot().is_bold);

    let model = update(model, Message::Undo);
    assert_eq!(model.snapshot(), &AttributeSnapshot::default());
    assert!(!model.history.can_undo());

    let model = update(model, Message::Redo);
    assert!(model.snapshot().is_bold);
    assert_eq!(model.snapshot().font_family, FontFamily::Arial);

    // A new edit drops the Georgia entry.
    let model = update(model, Message::ToggleUnderline);
    assert_eq!(model.history.len(), 3);
    assert!(!model.history.can_redo());
    assert!(model.snapshot().is_underline);
    assert!(model.snapshot().is_bold);
    assert_eq!(model.snapshot().font_family, FontFamily::Arial);
}

#[test]
fn test_undo_with_nothing_to_undo_shows_toast() {
    let model = update(create_test_model(), Message::Undo);
    assert_eq!(model.history.cursor(), 0);
    let (message, level) = model.active_toast().unwrap();
    assert_eq!(message, "Nothing to undo");
    assert_eq!(level, ToastLevel::Info);
}

#[test]
fn test_redo_at_end_shows_toast() {
    let model = apply(create_test_model(), [Message::ToggleBold, Message::Redo]);
    assert_eq!(model.history.cursor(), 1);
    assert_eq!(model.active_toast().map(|(m, _)| m), Some("Nothing to redo"));
}

#[test]
fn test_font_size_messages_respect_floor() {
    let mut model = create_test_model();
    for _ in 0..20 {
        model = update(model, Message::DecreaseFontSize);
    }
    assert_eq!(model.snapshot().font_size, 8);
    model = update(model, Message::IncreaseFontSize);
    assert_eq!(model.snapshot().font_size, 9);
}

#[test]
fn test_family_cycling_wraps() {
    let model = update(create_test_model(), Message::PrevFontFamily);
    assert_eq!(model.snapshot().font_family, FontFamily::CourierNew);
    let model = update(model, Message::NextFontFamily);
    assert_eq!(model.snapshot().font_family, FontFamily::Arial);
    assert_eq!(model.history.len(), 3);
}

#[test]
fn test_typing_records_one_entry_per_keystroke() {
    let model = apply(
        create_test_model(),
        [
            Message::FocusText { line: 0, column: 0 },
            Message::InsertChar('!'),
            Message::InsertChar('?'),
        ],
    );
    assert_eq!(model.focus, Focus::Text);
    assert_eq!(model.snapshot().text, "!?Edit this text");
    assert_eq!(model.text.text(), "!?Edit this text");
    assert_eq!(model.history.len(), 3);
}

#[test]
fn test_backspace_at_start_does_not_record() {
    let model = apply(
        create_test_model(),
        [
            Message::FocusText { line: 0, column: 0 },
            Message::DeleteBack,
        ],
    );
    assert_eq!(model.history.len(), 1);
    assert_eq!(model.snapshot().text, DEFAULT_TEXT);
}

#[test]
fn test_cursor_moves_do_not_record() {
    let model = apply(
        create_test_model(),
        [
            Message::EditText,
            Message::MoveCursor(Direction::Left),
            Message::MoveHome,
            Message::MoveEnd,
        ],
    );
    assert_eq!(model.history.len(), 1);
}

#[test]
fn test_undo_restores_text_buffer() {
    let model = apply(
        create_test_model(),
        [Message::EditText, Message::SplitLine, Message::InsertChar('x')],
    );
    assert_eq!(model.text.text(), "Edit this text\nx");

    let model = update(model, Message::Undo);
    assert_eq!(model.text.text(), "Edit this text\n");
    let model = update(model, Message::Undo);
    assert_eq!(model.text.text(), DEFAULT_TEXT);
    assert_eq!(model.snapshot().text, DEFAULT_TEXT);

    let model = apply(model, [Message::Redo, Message::Redo]);
    assert_eq!(model.text.text(), "Edit this text\nx");
}

#[test]
fn test_drag_moves_box_by_pointer_delta() {
    let model = Model::new(AttributeSnapshot::default(), Point::new(100, 100), (200, 200));
    let model = update(model, Message::BeginDrag(Point::new(150, 120)));
    assert!(model.drag.is_active());
    assert_eq!(model.drag.position(), Point::new(100, 100));

    let model = update(model, Message::UpdateDrag(Point::new(200, 180)));
    assert_eq!(model.drag.position(), Point::new(150, 160));

    let model = update(model, Message::EndDrag);
    assert!(!model.drag.is_active());
    let model = update(model, Message::UpdateDrag(Point::new(0, 0)));
    assert_eq!(model.drag.position(), Point::new(150, 160));
}

#[test]
fn test_drag_does_not_touch_history() {
    let model = apply(
        create_test_model(),
        [
            Message::BeginDrag(Point::new(10, 5)),
            Message::UpdateDrag(Point::new(30, 9)),
            Message::EndDrag,
        ],
    );
    assert_eq!(model.drag.position(), Point::new(30, 9));
    assert_eq!(model.history.len(), 1);
}

#[test]
fn test_begin_drag_blurs_text() {
    let model = apply(
        create_test_model(),
        [Message::EditText, Message::BeginDrag(Point::new(10, 5))],
    );
    assert_eq!(model.focus, Focus::Canvas);
}

#[test]
fn test_bring_box_into_view_centers_offscreen_box() {
    let mut model = Model::default();
    assert!(model.bring_box_into_view());
    assert_eq!(model.drag.position(), Point::new(25, 7));
    assert!(!model.bring_box_into_view());
}

#[test]
fn test_center_box_message() {
    let model = update(create_test_model(), Message::CenterBox);
    assert_eq!(model.drag.position(), Point::new(25, 7));
    assert!(!model.drag.is_active());
}

#[test]
fn test_toast_expires() {
    let mut model = create_test_model();
    model.show_toast(ToastLevel::Warning, "careful");
    assert!(!model.expire_toast(Instant::now()));
    assert!(model.expire_toast(Instant::now() + Duration::from_secs(4)));
    assert!(model.active_toast().is_none());
}

#[test]
fn test_help_toggle_and_quit() {
    let model = update(create_test_model(), Message::ToggleHelp);
    assert!(model.help_visible);
    let model = update(model, Message::HideHelp);
    assert!(!model.help_visible);
    let model = update(model, Message::Resize(120, 40));
    assert_eq!(model.terminal_size, (120, 40));
    let model = update(model, Message::Quit);
    assert!(model.should_quit);
}

// Mouse mapping

#[test]
fn test_press_on_frame_begins_drag() {
    let model = create_test_model();
    let msg = App::handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 5), &model);
    assert_eq!(msg, Some(Message::BeginDrag(Point::new(10, 5))));
    let msg = App::handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 39, 13), &model);
    assert_eq!(msg, Some(Message::BeginDrag(Point::new(39, 13))));
}

#[test]
fn test_press_on_text_area_focuses_text_without_drag() {
    let model = create_test_model();
    let msg = App::handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 14, 6), &model);
    assert_eq!(msg, Some(Message::FocusText { line: 0, column: 2 }));

    let model = update(model, msg.unwrap());
    assert!(!model.drag.is_active());
    assert_eq!(model.text.cursor().col, 2);
}

#[test]
fn test_press_outside_box_blurs_only_when_editing() {
    let model = create_test_model();
    let down = mouse(MouseEventKind::Down(MouseButton::Left), 60, 15);
    assert_eq!(App::handle_mouse(down, &model), None);

    let model = update(model, Message::EditText);
    assert_eq!(App::handle_mouse(down, &model), Some(Message::BlurText));
}

#[test]
fn test_motion_and_release_ignored_when_idle() {
    let model = create_test_model();
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Moved, 20, 20), &model),
        None
    );
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 20), &model),
        None
    );
}

#[test]
fn test_motion_and_release_reach_active_drag_anywhere() {
    let model = update(create_test_model(), Message::BeginDrag(Point::new(10, 5)));
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 79, 0), &model),
        Some(Message::UpdateDrag(Point::new(79, 0)))
    );
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Moved, 3, 23), &model),
        Some(Message::UpdateDrag(Point::new(3, 23)))
    );
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 0, 0), &model),
        Some(Message::EndDrag)
    );
}

#[test]
fn test_undo_button_only_fires_when_enabled() {
    let model = create_test_model();
    let press = mouse(MouseEventKind::Down(MouseButton::Left), 29, 0);
    assert_eq!(App::handle_mouse(press, &model), None);

    let model = update(model, Message::ToggleBold);
    assert_eq!(App::handle_mouse(press, &model), Some(Message::Undo));

    let redo = mouse(MouseEventKind::Down(MouseButton::Left), 40, 0);
    assert_eq!(App::handle_mouse(redo, &model), None);
    let model = update(model, Message::Undo);
    assert_eq!(App::handle_mouse(redo, &model), Some(Message::Redo));
}

#[test]
fn test_format_bar_buttons_map_to_messages() {
    let model = create_test_model();
    let layout = model.layout();
    for (slot, rect) in layout.format_slots() {
        let msg = App::handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), rect.x, rect.y),
            &model,
        );
        let expected = match slot {
            crate::ui::layout::Slot::SizeLabel => None,
            crate::ui::layout::Slot::Button(control) => Some(match control {
                crate::ui::layout::Control::FontFamily => Message::NextFontFamily,
                crate::ui::layout::Control::DecreaseSize => Message::DecreaseFontSize,
                crate::ui::layout::Control::IncreaseSize => Message::IncreaseFontSize,
                crate::ui::layout::Control::Bold => Message::ToggleBold,
                crate::ui::layout::Control::Italic => Message::ToggleItalic,
                crate::ui::layout::Control::Underline => Message::ToggleUnderline,
                other => panic!("unexpected control {other:?} in format bar"),
            }),
        };
        assert_eq!(msg, expected, "slot {slot:?}");
    }
}

#[test]
fn test_scroll_over_size_label_changes_size() {
    let model = create_test_model();
    let (_, label) = model
        .layout()
        .format_slots()
        .into_iter()
        .find(|(slot, _)| *slot == crate::ui::layout::Slot::SizeLabel)
        .unwrap();
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::ScrollUp, label.x, label.y), &model),
        Some(Message::IncreaseFontSize)
    );
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::ScrollDown, label.x, label.y), &model),
        Some(Message::DecreaseFontSize)
    );
}

#[test]
fn test_press_during_drag_ends_lost_session() {
    let model = update(create_test_model(), Message::BeginDrag(Point::new(10, 5)));
    for (column, row) in [(29, 0), (14, 6), (60, 15), (10, 5)] {
        let press = mouse(MouseEventKind::Down(MouseButton::Left), column, row);
        assert_eq!(
            App::handle_mouse(press, &model),
            Some(Message::EndDrag),
            "press at ({column}, {row})"
        );
    }

    let model = update(model, Message::EndDrag);
    assert_eq!(
        App::handle_mouse(mouse(MouseEventKind::Moved, 40, 12), &model),
        None
    );
    let model = update(model, Message::ToggleBold);
    let press = mouse(MouseEventKind::Down(MouseButton::Left), 29, 0);
    assert_eq!(App::handle_mouse(press, &model), Some(Message::Undo));
}

#[test]
fn test_initial_model_moves_box_into_view_and_shows_warning() {
    let app = App::new(AttributeSnapshot::default())
        .with_startup_warnings(vec!["first".to_string(), "second".to_string()]);
    let model = app.initial_model((80, 24));
    assert_eq!(model.drag.position(), Point::new(25, 7));
    assert_eq!(model.terminal_size, (80, 24));
    assert_eq!(
        model.active_toast(),
        Some(("second", ToastLevel::Warning))
    );
    assert_eq!(model.history.len(), 1);
}

#[test]
fn test_initial_model_keeps_visible_position_and_config_paths() {
    let app = App::new(AttributeSnapshot::default())
        .with_position(Point::new(3, 2))
        .with_config_paths(Some(PathBuf::from("global")), None);
    let model = app.initial_model((120, 40));
    assert_eq!(model.drag.position(), Point::new(3, 2));
    assert_eq!(model.config_global_path, Some(PathBuf::from("global")));
    assert_eq!(model.config_local_path, None);
    assert!(model.active_toast().is_none());
}

#[test]
fn test_press_hides_help() {
    let model = update(create_test_model(), Message::ToggleHelp);
    let press = mouse(MouseEventKind::Down(MouseButton::Left), 10, 5);
    assert_eq!(App::handle_mouse(press, &model), Some(Message::HideHelp));
}

// Keyboard mapping

#[test]
fn test_global_shortcuts() {
    let model = create_test_model();
    assert_eq!(App::handle_key(ctrl('z'), &model), Some(Message::Undo));
    assert_eq!(App::handle_key(ctrl('y'), &model), Some(Message::Redo));
    assert_eq!(
        App::handle_key(
            KeyEvent::new(
                KeyCode::Char('z'),
                KeyModifiers::CONTROL | KeyModifiers::SHIFT
            ),
            &model
        ),
        Some(Message::Redo)
    );
    assert_eq!(App::handle_key(ctrl('b'), &model), Some(Message::ToggleBold));
    assert_eq!(App::handle_key(ctrl('i'), &model), Some(Message::ToggleItalic));
    assert_eq!(App::handle_key(ctrl('u'), &model), Some(Message::ToggleUnderline));
    assert_eq!(App::handle_key(ctrl('c'), &model), Some(Message::Quit));
    assert_eq!(App::handle_key(key(KeyCode::F(1)), &model), Some(Message::ToggleHelp));
    assert_eq!(App::handle_key(key(KeyCode::F(2)), &model), Some(Message::ToggleItalic));
}

#[test]
fn test_canvas_keys_are_shortcuts() {
    let model = create_test_model();
    assert_eq!(App::handle_key(key(KeyCode::Char('b')), &model), Some(Message::ToggleBold));
    assert_eq!(
        App::handle_key(key(KeyCode::Char('+')), &model),
        Some(Message::IncreaseFontSize)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('-')), &model),
        Some(Message::DecreaseFontSize)
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('f')), &model),
        Some(Message::NextFontFamily)
    );
    assert_eq!(App::handle_key(key(KeyCode::Char('c')), &model), Some(Message::CenterBox));
    assert_eq!(App::handle_key(key(KeyCode::Enter), &model), Some(Message::EditText));
    assert_eq!(App::handle_key(key(KeyCode::Char('q')), &model), Some(Message::Quit));
}

#[test]
fn test_text_focus_keys_edit() {
    let model = update(create_test_model(), Message::EditText);
    assert_eq!(
        App::handle_key(key(KeyCode::Char('b')), &model),
        Some(Message::InsertChar('b'))
    );
    assert_eq!(
        App::handle_key(key(KeyCode::Char('q')), &model),
        Some(Message::InsertChar('q'))
    );
    assert_eq!(App::handle_key(key(KeyCode::Enter), &model), Some(Message::SplitLine));
    assert_eq!(App::handle_key(key(KeyCode::Backspace), &model), Some(Message::DeleteBack));
    assert_eq!(App::handle_key(key(KeyCode::Esc), &model), Some(Message::BlurText));
    assert_eq!(
        App::handle_key(key(KeyCode::Left), &model),
        Some(Message::MoveCursor(Direction::Left))
    );
    // Ctrl shortcuts still reach formatting while editing.
    assert_eq!(App::handle_key(ctrl('b'), &model), Some(Message::ToggleBold));
}

#[test]
fn test_key_release_is_ignored() {
    let model = create_test_model();
    let mut release = key(KeyCode::Char('b'));
    release.kind = KeyEventKind::Release;
    assert_eq!(App::handle_event(&Event::Key(release), &model), None);
    assert_eq!(
        App::handle_event(&Event::Resize(100, 30), &model),
        Some(Message::Resize(100, 30))
    );
}

fn arb_message() -> impl Strategy<Value = Message> {
    prop_oneof![
        Just(Message::Undo),
        Just(Message::Redo),
        Just(Message::ToggleBold),
        Just(Message::IncreaseFontSize),
        Just(Message::DecreaseFontSize),
        Just(Message::NextFontFamily),
        Just(Message::DeleteBack),
        Just(Message::DeleteForward),
        Just(Message::SplitLine),
        Just(Message::MoveCursor(Direction::Left)),
        Just(Message::MoveCursor(Direction::Up)),
        Just(Message::MoveHome),
        prop::char::range('a', 'z').prop_map(Message::InsertChar),
        Just(Message::InsertChar('\u{00e9}')),
    ]
}

proptest! {
    #[test]
    fn prop_text_buffer_tracks_live_snapshot(msgs in prop::collection::vec(arb_message(), 0..60)) {
        let mut model = update(create_test_model(), Message::EditText);
        for msg in msgs {
            model = update(model, msg);
            prop_assert_eq!(model.text.text(), model.snapshot().text.clone());
            prop_assert!(model.history.cursor() < model.history.len());
        }
    }
}
