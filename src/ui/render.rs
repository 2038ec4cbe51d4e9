use ratatui::buffer::Buffer;
use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};
use unicode_width::UnicodeWidthChar;

use crate::app::{Focus, Model};
use crate::drag::Point;

use super::layout::{
    BOX_HEIGHT, BOX_WIDTH, Control, ScreenLayout, Slot, TEXT_PADDING, point_in_rect,
    point_to_cell,
};
use super::{overlays, status, style};

/// Render the complete UI.
pub fn render(model: &Model, frame: &mut Frame) {
    let area = frame.area();
    let layout = ScreenLayout::new(area);

    frame.render_widget(Block::default().style(style::canvas_style()), layout.canvas);
    render_box(model, frame, layout.canvas);

    render_bar(model, frame, layout.toolbar, &layout.toolbar_slots());
    render_bar(model, frame, layout.format_bar, &layout.format_slots());

    if model.active_toast().is_some() && layout.canvas.height > 0 {
        let toast_area = Rect {
            y: layout.canvas.y + layout.canvas.height - 1,
            height: 1,
            ..layout.canvas
        };
        status::render_toast_bar(model, frame, toast_area);
    }
    status::render_status_bar(model, frame, layout.status);

    if model.help_visible {
        overlays::render_help_overlay(model, frame, area);
    }
}

fn render_bar(model: &Model, frame: &mut Frame, area: Rect, slots: &[(Slot, Rect)]) {
    frame.render_widget(Block::default().style(style::bar_style()), area);
    for &(slot, rect) in slots {
        let (label, label_style) = slot_label(model, slot);
        let widget = Paragraph::new(Line::styled(label, label_style)).alignment(Alignment::Center);
        frame.render_widget(widget, rect);
    }
}

fn slot_label(model: &Model, slot: Slot) -> (String, Style) {
    let snapshot = model.snapshot();
    let history = &model.history;
    match slot {
        Slot::SizeLabel => (snapshot.font_size.to_string(), style::bar_style()),
        Slot::Button(control) => {
            let (label, active, enabled) = match control {
                Control::Undo => ("\u{21b6} Undo".to_string(), false, history.can_undo()),
                Control::Redo => ("Redo \u{21b7}".to_string(), false, history.can_redo()),
                Control::FontFamily => {
                    let label = format!("\u{2039} {} \u{203a}", snapshot.font_family);
                    (label, false, true)
                }
                Control::DecreaseSize => ("-".to_string(), false, true),
                Control::IncreaseSize => ("+".to_string(), false, true),
                Control::Bold => ("B".to_string(), snapshot.is_bold, true),
                Control::Italic => ("I".to_string(), snapshot.font_style.is_italic(), true),
                Control::Underline => ("U".to_string(), snapshot.is_underline, true),
            };
            let mut label_style = style::button_style(active, enabled);
            label_style = match control {
                Control::Bold => label_style.add_modifier(Modifier::BOLD),
                Control::Italic => label_style.add_modifier(Modifier::ITALIC),
                Control::Underline => label_style.add_modifier(Modifier::UNDERLINED),
                _ => label_style,
            };
            (label, label_style)
        }
    }
}

/// Draw the box into a scratch buffer, then copy the cells that land on
/// the canvas. The box may hang off any edge.
fn render_box(model: &Model, frame: &mut Frame, canvas: Rect) {
    let snapshot = model.snapshot();
    let geometry = model.box_geometry();
    let editing = model.focus == Focus::Text;

    let mut scratch = Buffer::empty(Rect::new(0, 0, BOX_WIDTH, BOX_HEIGHT));
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(style::box_border_style(model.drag.is_active(), editing))
        .title(format!(" {} {}pt ", snapshot.font_family, snapshot.font_size))
        .padding(Padding::horizontal(TEXT_PADDING))
        .style(Style::default().bg(Color::White));
    let inner = block.inner(scratch.area);
    block.render(scratch.area, &mut scratch);

    let (top, left) = model.text_scroll();
    let text_style = style::text_style(snapshot);
    let lines: Vec<Line> = (top..top + usize::from(inner.height))
        .map_while(|idx| model.text.line_at(idx))
        .map(|line| Line::styled(slice_columns(&line, left, usize::from(inner.width)), text_style))
        .collect();
    Paragraph::new(lines)
        .style(Style::default().bg(Color::White))
        .render(inner, &mut scratch);

    blit(&scratch, geometry.origin, canvas, frame.buffer_mut());

    if editing {
        let line = model.text.cursor().line;
        let col = model.text.cursor_display_col();
        let at = geometry.text_origin()
            + Point::new(
                i32::try_from(col.saturating_sub(left)).unwrap_or(i32::MAX),
                i32::try_from(line.saturating_sub(top)).unwrap_or(i32::MAX),
            );
        if let Some((x, y)) = point_to_cell(at)
            && point_in_rect(x, y, canvas)
        {
            frame.set_cursor_position(Position::new(x, y));
        }
    }
}

fn blit(src: &Buffer, origin: Point, clip: Rect, dst: &mut Buffer) {
    for y in 0..src.area.height {
        for x in 0..src.area.width {
            let target = origin + Point::new(i32::from(x), i32::from(y));
            let Some((tx, ty)) = point_to_cell(target) else {
                continue;
            };
            if !point_in_rect(tx, ty, clip) {
                continue;
            }
            if let (Some(cell), Some(slot)) = (src.cell((x, y)), dst.cell_mut((tx, ty))) {
                *slot = cell.clone();
            }
        }
    }
}

/// The part of `text` between screen columns `left` and `left + width`.
/// Wide characters that straddle either edge are dropped.
pub fn slice_columns(text: &str, left: usize, width: usize) -> String {
    let right = left + width;
    let mut col = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if col >= left && col + w <= right {
            out.push(ch);
        }
        col += w;
        if col >= right {
            break;
        }
    }
    out
}
