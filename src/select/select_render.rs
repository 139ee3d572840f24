//! Rendering for the searchable select
//!
//! The field (query input, clear button, chips) is drawn in place. The
//! suggestion panel is drawn separately as an overlay so that it can cover
//! the fields below it.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::filter::PanelRow;
use super::select_state::{SearchableSelect, SelectHitMap};
use crate::widgets::{popup, text_input};

const REMOVE_MARK: &str = "×";
const CHIP_GAP: u16 = 1;
const CLEAR_BUTTON_WIDTH: u16 = 2;
const FIELD_CHROME_HEIGHT: u16 = 3;
const PANEL_BORDER_HEIGHT: u16 = 2;
const MAX_PANEL_ROWS: usize = 8;

/// Where one chip lands inside the field, relative to the inner area
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipPlacement {
    pub index: usize,
    /// Padded label without the remove mark
    pub text: String,
    pub line: u16,
    pub x: u16,
    pub width: u16,
}

impl ChipPlacement {
    /// Column of the remove mark, relative to the inner area
    pub fn remove_column(&self) -> u16 {
        self.x + self.width.saturating_sub(2)
    }
}

fn truncate_to_width(value: &str, max_width: usize) -> String {
    if value.width() <= max_width {
        return value.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in value.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Lay chips out left to right, wrapping onto new lines when `width` runs out
pub fn chip_layout(values: &[String], width: u16) -> Vec<ChipPlacement> {
    let mut placements = Vec::with_capacity(values.len());
    let mut line = 0u16;
    let mut x = 0u16;

    // " value " + "× "
    let max_value_width = (width as usize).saturating_sub(4).max(1);

    for (index, value) in values.iter().enumerate() {
        let text = format!(" {} ", truncate_to_width(value, max_value_width));
        let chip_width = (text.width() + 2) as u16;

        if x > 0 && x + chip_width > width {
            line += 1;
            x = 0;
        }

        placements.push(ChipPlacement {
            index,
            text,
            line,
            x,
            width: chip_width,
        });
        x += chip_width + CHIP_GAP;
    }

    placements
}

/// Rows needed to show every chip at `inner_width`
pub fn chip_rows(values: &[String], inner_width: u16) -> u16 {
    chip_layout(values, inner_width)
        .last()
        .map(|chip| chip.line + 1)
        .unwrap_or(0)
}

/// Total field height including borders, input line and chips
pub fn required_height(selected: &[String], width: u16) -> u16 {
    FIELD_CHROME_HEIGHT + chip_rows(selected, width.saturating_sub(2))
}

/// Draw the field and record its hit regions
pub fn render_field(
    select: &mut SearchableSelect,
    frame: &mut Frame,
    area: Rect,
    selected: &[String],
    focused: bool,
    disabled: bool,
) {
    let border_color = if disabled {
        Color::DarkGray
    } else if focused {
        Color::Cyan
    } else {
        Color::Gray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", select.label()))
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.width == 0 || inner.height == 0 {
        select.hit = SelectHitMap {
            bounds: area,
            ..SelectHitMap::default()
        };
        return;
    }

    let has_query = !select.query().is_empty();
    let button_width = if has_query { CLEAR_BUTTON_WIDTH } else { 0 };
    let input = Rect {
        x: inner.x,
        y: inner.y,
        width: inner.width.saturating_sub(button_width),
        height: 1,
    };

    text_input::set_focused(&mut select.state.query, focused && !disabled);
    frame.render_widget(&select.state.query, input);

    let clear_button = has_query.then(|| Rect::new(inner.right() - 1, inner.y, 1, 1));
    if let Some(button) = clear_button {
        frame.render_widget(
            Paragraph::new(Span::styled(REMOVE_MARK, Style::default().fg(Color::Red))),
            button,
        );
    }

    let (chip_style, mark_style) = if disabled {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            Style::default().fg(Color::Black).bg(Color::Cyan),
            Style::default().fg(Color::Red).bg(Color::Cyan),
        )
    };

    let chip_lines = inner.height.saturating_sub(1);
    let mut chips = Vec::new();
    for chip in chip_layout(selected, inner.width) {
        if chip.line >= chip_lines {
            break;
        }
        let y = inner.y + 1 + chip.line;
        let rect = Rect::new(inner.x + chip.x, y, chip.width.min(inner.width), 1);
        let line = Line::from(vec![
            Span::styled(chip.text.clone(), chip_style),
            Span::styled(format!("{} ", REMOVE_MARK), mark_style),
        ]);
        frame.render_widget(Paragraph::new(line), rect);
        chips.push((Rect::new(inner.x + chip.remove_column(), y, 1, 1), chip.index));
    }

    select.hit = SelectHitMap {
        bounds: area,
        input,
        clear_button,
        chips,
        panel: None,
        rows: Vec::new(),
    };
}

fn panel_line(row: &PanelRow<'_>, highlighted: bool) -> Line<'static> {
    let highlight = Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let prefix = if highlighted { "► " } else { "  " };

    match row {
        PanelRow::Candidate {
            text,
            already_selected: true,
        } => Line::from(vec![
            Span::styled(format!("  {}", text), Style::default().fg(Color::DarkGray)),
            Span::styled(" ✓", Style::default().fg(Color::DarkGray)),
        ]),
        PanelRow::Candidate { text, .. } => {
            let style = if highlighted {
                highlight
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!("{}{}", prefix, text), style))
        }
        PanelRow::Custom(query) => {
            let style = if highlighted {
                highlight
            } else {
                Style::default().fg(Color::Green)
            };
            Line::from(Span::styled(
                format!("{}+ Add custom: \"{}\"", prefix, query),
                style,
            ))
        }
    }
}

/// First row to show so that the highlighted row stays visible
fn panel_offset(highlighted: Option<usize>, capacity: usize) -> usize {
    match highlighted {
        Some(index) if capacity > 0 && index >= capacity => index + 1 - capacity,
        _ => 0,
    }
}

/// Draw the suggestion panel next to the field, inside `bounds`
///
/// Must run after [`render_field`] for the same frame so the anchor is current.
pub fn render_panel(
    select: &mut SearchableSelect,
    frame: &mut Frame,
    selected: &[String],
    bounds: Rect,
) {
    select.hit.panel = None;
    select.hit.rows.clear();

    if !select.panel_visible(selected) {
        return;
    }

    let anchor = select.hit.bounds;
    let highlighted = select.highlighted();

    let (area, lines, row_indices) = {
        let view = select.view(selected);
        let hint = (view.remaining > 0).then(|| {
            format!(
                "...and {} more. Keep typing to narrow results.",
                view.remaining
            )
        });
        let hint_height = hint.is_some() as u16;
        let wanted = view.rows.len().min(MAX_PANEL_ROWS) as u16;
        let area = popup::popup_near_anchor(
            anchor,
            bounds,
            anchor.width,
            wanted + hint_height + PANEL_BORDER_HEIGHT,
        );

        let capacity = area
            .height
            .saturating_sub(PANEL_BORDER_HEIGHT + hint_height) as usize;
        let offset = panel_offset(highlighted, capacity);

        let mut lines = Vec::new();
        let mut row_indices = Vec::new();
        for (index, row) in view.rows.iter().enumerate().skip(offset).take(capacity) {
            lines.push(panel_line(row, highlighted == Some(index)));
            row_indices.push(index);
        }
        if let Some(hint) = hint {
            lines.push(Line::from(Span::styled(
                hint,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        (area, lines, row_indices)
    };

    if area.height <= PANEL_BORDER_HEIGHT {
        return;
    }

    popup::clear_area(frame, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(lines).block(block), area);

    select.hit.panel = Some(area);
    select.hit.rows = row_indices
        .into_iter()
        .enumerate()
        .map(|(n, index)| (Rect::new(inner.x, inner.y + n as u16, inner.width, 1), index))
        .collect();
}

#[cfg(test)]
#[path = "select_render_tests.rs"]
mod select_render_tests;
