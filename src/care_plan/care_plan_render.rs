use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap},
};

use super::care_plan_state::CarePlanView;

/// Rows a line occupies once wrapped at `width`
fn wrapped_rows(line: &Line<'_>, width: u16) -> u32 {
    let width = width.max(1) as u32;
    (line.width() as u32).div_ceil(width).max(1)
}

pub fn render_care_plan(view: &mut CarePlanView, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Care Plan ")
        .title_bottom(" Ctrl+S save for printing  Ctrl+N new patient ")
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let content_width = inner.width.saturating_sub(1);
    let lines = view.lines(content_width);
    let total_rows: u32 = lines
        .iter()
        .map(|line| wrapped_rows(line, content_width))
        .sum();
    view.scroll.update_bounds(total_rows, inner.height);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((view.scroll.offset, 0));
    frame.render_widget(
        paragraph,
        Rect {
            width: content_width,
            ..inner
        },
    );

    if view.scroll.max_offset > 0 {
        let mut state = ScrollbarState::new(view.scroll.max_offset as usize)
            .position(view.scroll.offset as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(None)
                .end_symbol(None),
            inner,
            &mut state,
        );
    }
}
