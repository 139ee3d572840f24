use std::time::Instant;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

use super::notification_state::{NotificationKind, NotificationState};
use crate::widgets::popup;

const MAX_WIDTH: u16 = 60;
const MARGIN: u16 = 1;

/// Draw the current notification in the top-right corner, dropping it once expired
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    state.clear_if_expired(Instant::now());
    let Some(notification) = state.current() else {
        return;
    };

    let area = frame.area();
    let inner_max = MAX_WIDTH.min(area.width.saturating_sub(MARGIN * 2 + 2)).max(1);
    let text_width = (notification.message.width() as u16).clamp(1, inner_max);
    let text_lines = (notification.message.width() as u16).div_ceil(inner_max).max(1);

    let width = text_width + 2;
    let height = (text_lines + 2).min(area.height);
    let popup_area = Rect {
        x: area.right().saturating_sub(width + MARGIN),
        y: area.y + MARGIN.min(area.height.saturating_sub(height)),
        width: width.min(area.width),
        height,
    };

    let color = match notification.kind {
        NotificationKind::Info => Color::Green,
        NotificationKind::Warning => Color::Yellow,
    };

    popup::clear_area(frame, popup_area);
    let paragraph = Paragraph::new(notification.message.as_str())
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );
    frame.render_widget(paragraph, popup_area);
}
