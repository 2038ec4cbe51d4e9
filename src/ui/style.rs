//! Theming and color definitions.
//!
//! Maps the box attributes onto terminal text modifiers and defines the
//! chrome colors. Uses ANSI colors that adapt to the terminal's palette.

use ratatui::style::{Color, Modifier, Style};

use crate::history::AttributeSnapshot;

/// Style for the box text.
///
/// Bold, italic and underline map to terminal modifiers. Size and family
/// have no terminal equivalent and are shown as labels instead.
pub fn text_style(snapshot: &AttributeSnapshot) -> Style {
    let mut modifiers = Modifier::empty();
    if snapshot.is_bold {
        modifiers |= Modifier::BOLD;
    }
    if snapshot.font_style.is_italic() {
        modifiers |= Modifier::ITALIC;
    }
    if snapshot.is_underline {
        modifiers |= Modifier::UNDERLINED;
    }
    Style::default()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(modifiers)
}

/// Border of the box; highlighted while dragging or editing.
pub fn box_border_style(dragging: bool, editing: bool) -> Style {
    let base = Style::default().bg(Color::White);
    if dragging {
        base.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if editing {
        base.fg(Color::Blue)
    } else {
        base.fg(Color::DarkGray)
    }
}

/// Toolbar button. Disabled buttons are dimmed, active toggles reversed.
pub fn button_style(active: bool, enabled: bool) -> Style {
    let base = Style::default().bg(Color::Gray).fg(Color::Black);
    if !enabled {
        base.fg(Color::DarkGray).add_modifier(Modifier::DIM)
    } else if active {
        base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
    } else {
        base
    }
}

pub fn bar_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

pub fn canvas_style() -> Style {
    Style::default().bg(Color::Indexed(254)).fg(Color::Indexed(250))
}
