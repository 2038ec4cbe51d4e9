use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Focus, Model, ToastLevel};

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let history = &model.history;
    let position = model.drag.position();

    let step_info = format!("Step {}/{}", history.cursor() + 1, history.len());
    let position_info = format!("@ {},{}", position.x, position.y);
    let drag_indicator = if model.drag.is_active() {
        " [dragging]"
    } else {
        ""
    };
    let mode = match model.focus {
        Focus::Text => " EDIT ",
        Focus::Canvas => " BOX ",
    };

    let status = format!("{mode} {step_info}  {position_info}{drag_indicator}  ?:help");

    let status_bar =
        Paragraph::new(status).style(Style::default().bg(Color::DarkGray).fg(Color::White));

    frame.render_widget(status_bar, area);
}

pub fn render_toast_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let Some((message, level)) = model.active_toast() else {
        return;
    };
    let (prefix, style) = match level {
        ToastLevel::Info => (
            "[info]",
            Style::default().bg(Color::DarkGray).fg(Color::White),
        ),
        ToastLevel::Warning => (
            "[warn]",
            Style::default().bg(Color::Yellow).fg(Color::Black),
        ),
    };
    let toast = Paragraph::new(format!("{prefix} {message}")).style(style);
    frame.render_widget(toast, area);
}
