use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::app_state::{App, BackendStatus, View};
use crate::care_plan::care_plan_render::render_care_plan;
use crate::form::form_render::render_form;
use crate::notification::render_notification;

const NEW_PATIENT_LABEL: &str = " ← New Patient ";
const ERROR_BANNER_HEIGHT: u16 = 4;

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        let banner_height = if self.error.is_some() {
            ERROR_BANNER_HEIGHT
        } else {
            0
        };
        let layout = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(banner_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

        self.render_header(frame, layout[0]);
        self.render_error_banner(frame, layout[1]);

        match self.view() {
            View::Form => {
                let in_flight = self.is_submitting();
                render_form(&mut self.form, frame, layout[2], in_flight);
            }
            View::CarePlan => {
                if let Some(view) = &mut self.care_plan {
                    render_care_plan(view, frame, layout[2]);
                }
            }
        }

        self.render_help_line(frame, layout[3]);
        render_notification(frame, &mut self.notification);
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" AI Care Plan Generator ")
            .border_style(Style::default().fg(Color::Blue));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let status = match &self.backend {
            BackendStatus::Checking => Span::styled(
                "○ Checking backend...",
                Style::default().fg(Color::DarkGray),
            ),
            BackendStatus::Online(health) => Span::styled(
                format!("● Online v{} ({})", health.version, health.environment),
                Style::default().fg(Color::Green),
            ),
            BackendStatus::Offline(message) => {
                Span::styled(format!("● {}", message), Style::default().fg(Color::Red))
            }
        };
        let line = Line::from(vec![
            status,
            Span::styled(
                format!("  {}", self.base_url),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), inner);

        self.new_patient_area = None;
        let label_width = NEW_PATIENT_LABEL.chars().count() as u16;
        if self.view() == View::CarePlan && inner.width > label_width {
            let button = Rect::new(inner.right() - label_width, inner.y, label_width, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    NEW_PATIENT_LABEL,
                    Style::default()
                        .fg(Color::Blue)
                        .bg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )),
                button,
            );
            self.new_patient_area = Some(button);
        }
    }

    fn render_error_banner(&mut self, frame: &mut Frame, area: Rect) {
        self.dismiss_error_area = None;
        let Some(message) = &self.error else {
            return;
        };
        if area.height == 0 {
            return;
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(
                " Error Generating Care Plan ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ))
            .border_style(Style::default().fg(Color::Red));
        frame.render_widget(
            Paragraph::new(Span::styled(message.as_str(), Style::default().fg(Color::Red)))
                .wrap(Wrap { trim: true })
                .block(block),
            area,
        );

        if area.width > 4 {
            let close = Rect::new(area.right() - 3, area.y, 1, 1);
            frame.render_widget(
                Paragraph::new(Span::styled(
                    "×",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                )),
                close,
            );
            self.dismiss_error_area = Some(Rect::new(area.right() - 4, area.y, 3, 1));
        }
    }

    fn render_help_line(&self, frame: &mut Frame, area: Rect) {
        // Most urgent first, since the line is cut at the terminal edge
        let mut hints: Vec<(&str, &str)> = Vec::new();
        if self.error.is_some() {
            hints.push(("Ctrl+X", "dismiss error"));
        }
        match self.view() {
            View::Form => hints.extend([
                ("Tab", "next field"),
                ("Enter", "add/next"),
                ("Ctrl+G", "generate"),
                ("Ctrl+L", "sample"),
            ]),
            View::CarePlan => hints.extend([
                ("j/k", "scroll"),
                ("g/G", "top/bottom"),
                ("Ctrl+S", "save"),
                ("Ctrl+N", "new patient"),
            ]),
        }
        hints.push(("Ctrl+C", "quit"));

        let mut spans = Vec::new();
        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
            }
            spans.push(Span::styled(key, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {}", action),
                Style::default().fg(Color::Gray),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
