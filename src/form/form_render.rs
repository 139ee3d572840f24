//! Single-column scrolling layout of the intake form

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
};

use super::field::{FieldId, FieldKind, ListField};
use super::form_state::{FormHit, FormState};
use crate::select::select_render;
use crate::widgets::text_input;

const BOX_HEIGHT: u16 = 3;
const REMOVE_LABEL: &str = " Remove ";
const SUBMIT_BUSY_LABEL: &str = "Generating Care Plan...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Item {
    Section(&'static str),
    Field(FieldId),
}

/// Content-space position of one form element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placed {
    item: Item,
    top: u16,
    height: u16,
}

fn field_height(form: &FormState, field: FieldId, width: u16) -> u16 {
    match field.kind() {
        FieldKind::Text | FieldKind::Choice | FieldKind::Button => BOX_HEIGHT,
        FieldKind::List(list) => {
            select_render::required_height(form.selection(list).values(), width)
        }
        FieldKind::MedicationList => form.medications().len().max(1) as u16 + 2,
    }
}

fn layout(form: &FormState, width: u16) -> Vec<Placed> {
    let mut placed = Vec::new();
    let mut top: u16 = 0;

    for field in FieldId::ALL {
        if let Some(title) = field.section() {
            if top > 0 {
                top = top.saturating_add(1);
            }
            placed.push(Placed {
                item: Item::Section(title),
                top,
                height: 1,
            });
            top = top.saturating_add(1);
        }
        let height = field_height(form, field, width);
        placed.push(Placed {
            item: Item::Field(field),
            top,
            height,
        });
        top = top.saturating_add(height);
    }
    placed
}

fn border_style(focused: bool, disabled: bool) -> Style {
    if disabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn field_title(field: FieldId) -> String {
    if field.is_required() {
        format!(" {} * ", field.label())
    } else {
        format!(" {} ", field.label())
    }
}

/// Draw the form into `area`, recording click regions for the next event
pub fn render_form(form: &mut FormState, frame: &mut Frame, area: Rect, in_flight: bool) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Patient Intake ")
        .border_style(Style::default().fg(Color::Cyan));
    let viewport = block.inner(area);
    frame.render_widget(block, area);

    form.hits.clear();
    let content_width = viewport.width.saturating_sub(1);
    let placed = layout(form, content_width);
    let total = placed.last().map(|p| p.top as u32 + p.height as u32).unwrap_or(0);

    form.placements = placed
        .iter()
        .filter_map(|p| match p.item {
            Item::Field(field) => Some((field, p.top, p.height)),
            Item::Section(_) => None,
        })
        .collect();

    form.scroll.update_bounds(total, viewport.height);
    if form.scroll_to_focus {
        let focus = form.focus;
        let focused_place = form
            .placements
            .iter()
            .find(|(field, ..)| *field == focus)
            .map(|&(_, top, height)| (top, height));
        if let Some((top, height)) = focused_place {
            // Include the section heading when scrolling up to its first field
            let top = match form.focus.section() {
                Some(_) => top.saturating_sub(1),
                None => top,
            };
            form.scroll.ensure_visible(top, height);
        }
        form.scroll_to_focus = false;
    }

    let offset = form.scroll.offset;
    let mut drawn_lists = Vec::new();

    for p in &placed {
        let visible = p.top >= offset
            && p.top.saturating_add(p.height) <= offset.saturating_add(viewport.height);
        if !visible {
            continue;
        }
        let rect = Rect::new(
            viewport.x,
            viewport.y + (p.top - offset),
            content_width,
            p.height,
        );
        match p.item {
            Item::Section(title) => {
                let heading = Line::from(Span::styled(
                    title,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
                frame.render_widget(Paragraph::new(heading), rect);
            }
            Item::Field(field) => {
                if let FieldKind::List(list) = field.kind() {
                    drawn_lists.push(list);
                }
                render_field(form, frame, rect, field, in_flight);
            }
        }
    }

    for list in ListField::ALL {
        if !drawn_lists.contains(&list) {
            form.list_mut(list).select.clear_hit_map();
        }
    }

    if form.scroll.max_offset > 0 {
        let mut state = ScrollbarState::new(form.scroll.max_offset as usize)
            .position(form.scroll.offset as usize);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            viewport,
            &mut state,
        );
    }

    // The open panel overlays whatever sits below its field
    if let Some(list) = form.open_list()
        && drawn_lists.contains(&list)
    {
        let input = form.list_mut(list);
        select_render::render_panel(
            &mut input.select,
            frame,
            input.selection.values(),
            viewport,
        );
    }
}

fn render_field(form: &mut FormState, frame: &mut Frame, rect: Rect, field: FieldId, in_flight: bool) {
    let focused = form.focus == field;
    match field.kind() {
        FieldKind::Text => render_text(form, frame, rect, field, focused, in_flight),
        FieldKind::Choice => render_choice(form, frame, rect, field, focused, in_flight),
        FieldKind::List(list) => {
            let input = form.list_mut(list);
            select_render::render_field(
                &mut input.select,
                frame,
                rect,
                input.selection.values(),
                focused,
                in_flight,
            );
        }
        FieldKind::MedicationList => render_medications(form, frame, rect, focused, in_flight),
        FieldKind::Button => render_submit(form, frame, rect, focused, in_flight),
    }
}

fn render_text(
    form: &mut FormState,
    frame: &mut Frame,
    rect: Rect,
    field: FieldId,
    focused: bool,
    disabled: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(field_title(field))
        .border_style(border_style(focused, disabled));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if let Some(textarea) = form.inputs.get_mut(&field) {
        text_input::set_focused(textarea, focused && !disabled);
        frame.render_widget(&*textarea, inner);
    }
    form.hits.push((rect, FormHit::Focus(field)));
}

fn render_choice(
    form: &mut FormState,
    frame: &mut Frame,
    rect: Rect,
    field: FieldId,
    focused: bool,
    disabled: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(field_title(field))
        .border_style(border_style(focused, disabled));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let (options, current) = form.choice_options(field);
    let mut spans = Vec::new();
    let mut x = inner.x;
    for (index, option) in options.iter().enumerate() {
        let marker = if index == current { "(•) " } else { "( ) " };
        let text = format!("{}{}", marker, option);
        let width = text.chars().count() as u16;
        let style = if index == current {
            Style::default()
                .fg(if disabled { Color::DarkGray } else { Color::Cyan })
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        if x < inner.right() {
            let clipped = width.min(inner.right() - x);
            form.hits
                .push((Rect::new(x, inner.y, clipped, 1), FormHit::Choice(field, index)));
        }
        spans.push(Span::styled(text, style));
        spans.push(Span::raw("  "));
        x = x.saturating_add(width + 2);
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
    form.hits.push((rect, FormHit::Focus(field)));
}

fn render_medications(
    form: &mut FormState,
    frame: &mut Frame,
    rect: Rect,
    focused: bool,
    disabled: bool,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Medications ({}) ", form.medications.len()))
        .border_style(border_style(focused, disabled));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    if form.medications.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "No medications added",
                Style::default().fg(Color::DarkGray),
            )),
            inner,
        );
    }

    let remove_width = REMOVE_LABEL.len() as u16;
    for (index, medication) in form.medications.iter().enumerate() {
        let y = inner.y + index as u16;
        if y >= inner.bottom() {
            break;
        }
        let selected = focused && form.medication_cursor == Some(index);
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let text_width = inner.width.saturating_sub(remove_width);
        frame.render_widget(
            Paragraph::new(Span::styled(medication.to_string(), style)),
            Rect::new(inner.x, y, text_width, 1),
        );

        if !disabled && inner.width > remove_width {
            let button = Rect::new(inner.right() - remove_width, y, remove_width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    REMOVE_LABEL,
                    Style::default().fg(Color::Red),
                )),
                button,
            );
            form.hits.push((button, FormHit::RemoveMedication(index)));
        }
    }
    form.hits.push((rect, FormHit::Focus(FieldId::Medications)));
}

fn render_submit(
    form: &mut FormState,
    frame: &mut Frame,
    rect: Rect,
    focused: bool,
    in_flight: bool,
) {
    let (label, style) = if in_flight {
        (
            SUBMIT_BUSY_LABEL,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )
    } else if focused {
        (
            FieldId::Submit.label(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            FieldId::Submit.label(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style(focused, false));
    frame.render_widget(
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(block),
        rect,
    );
    form.hits.push((rect, FormHit::Submit));
}

#[cfg(test)]
#[path = "form_render_tests.rs"]
mod form_render_tests;
