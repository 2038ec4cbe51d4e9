use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::app::Model;
use crate::history::FONT_FAMILIES;

pub fn render_help_overlay(model: &Model, frame: &mut Frame, area: Rect) {
    let popup_width = area.width.saturating_sub(12).max(48);
    let popup_height = area.height.saturating_sub(4).max(12);
    let popup = centered_popup_rect(popup_width, popup_height, area);

    let global_cfg = model
        .config_global_path
        .as_ref()
        .map_or_else(|| "<unknown>".to_string(), |p| p.display().to_string());
    let local_cfg = model
        .config_local_path
        .as_ref()
        .map_or_else(|| "<none>".to_string(), |p| p.display().to_string());

    let section_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let dim_style = Style::default().fg(Color::Indexed(245));

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::styled("History", section_style));
    lines.push(Line::raw("  Ctrl-z / z          Undo"));
    lines.push(Line::raw("  Ctrl-y / y / Z      Redo"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Formatting", section_style));
    lines.push(Line::raw("  Ctrl-b / b          Bold"));
    lines.push(Line::raw("  Ctrl-i / i / F2     Italic"));
    lines.push(Line::raw("  Ctrl-u / u          Underline"));
    lines.push(Line::raw("  + / -               Font size"));
    lines.push(Line::raw("  f / F               Next / previous font"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Box", section_style));
    lines.push(Line::raw("  Drag the frame      Move the box"));
    lines.push(Line::raw("  Click the text      Edit text"));
    lines.push(Line::raw("  Enter / e           Edit text"));
    lines.push(Line::raw("  Esc                 Stop editing"));
    lines.push(Line::raw("  c                   Center the box"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Other", section_style));
    lines.push(Line::raw("  q / Ctrl-c / Ctrl-q Quit"));
    lines.push(Line::raw("  ? / F1              Toggle help"));
    lines.push(Line::raw(""));

    lines.push(Line::styled("Config", section_style));
    lines.push(Line::raw(format!("  Global: {global_cfg}")));
    lines.push(Line::raw(format!("  Local override: {local_cfg}")));
    let fonts = FONT_FAMILIES.map(|f| f.name()).join(", ");
    lines.push(Line::styled(format!("  Fonts: {fonts}"), dim_style));

    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .padding(Padding::uniform(1))
        .style(Style::default().bg(Color::Black).fg(Color::White));

    frame.render_widget(Clear, popup);
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}

fn centered_popup_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w) / 2);
    let y = area.y + (area.height.saturating_sub(h) / 2);
    Rect::new(x, y, w, h)
}
