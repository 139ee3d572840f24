use std::path::{Path, PathBuf};

use chrono::{Local, TimeZone};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

use super::export::save_printable;
use super::html::{parse_html, to_lines};
use crate::error::CarePlanError;
use crate::patient::{CarePlan, format_timestamp};
use crate::scroll::ScrollState;

/// A received plan with its header lines and the body laid out for the last
/// width it was drawn at
pub struct CarePlanView {
    plan: CarePlan,
    generated_display: String,
    header: Vec<Line<'static>>,
    body: Option<(u16, Vec<Line<'static>>)>,
    pub scroll: ScrollState,
}

impl CarePlanView {
    pub fn new(plan: CarePlan) -> Self {
        Self::with_timezone(plan, &Local)
    }

    pub fn with_timezone<Tz>(plan: CarePlan, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        let generated_display = format_timestamp(&plan.generated_at, tz);

        let header = vec![
            Line::from(Span::styled(
                "Care Plan",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![
                Span::raw("Patient: "),
                Span::styled(
                    plan.patient_name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(Span::styled(
                format!("Generated: {}", generated_display),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
        ];

        Self {
            plan,
            generated_display,
            header,
            body: None,
            scroll: ScrollState::new(),
        }
    }

    pub fn plan(&self) -> &CarePlan {
        &self.plan
    }

    pub fn generated_display(&self) -> &str {
        &self.generated_display
    }

    /// Header and body lines for a view `width` columns wide
    ///
    /// The HTML is only laid out again when the width changes.
    pub fn lines(&mut self, width: u16) -> Vec<Line<'static>> {
        if self.body.as_ref().is_none_or(|(laid_out, _)| *laid_out != width) {
            let body = to_lines(&parse_html(&self.plan.care_plan_html, width as usize));
            self.body = Some((width, body));
        }

        let mut lines = self.header.clone();
        if let Some((_, body)) = &self.body {
            lines.extend(body.iter().cloned());
        }
        lines
    }

    /// Save a printable copy into `dir`
    pub fn save(&self, dir: &Path) -> Result<PathBuf, CarePlanError> {
        save_printable(
            &self.plan,
            &self.generated_display,
            dir,
            Local::now().naive_local(),
        )
    }
}
