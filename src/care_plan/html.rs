//! HTML to terminal text
//!
//! html2text parses the returned fragment and lays it out at the view width.
//! Its rich annotations become bold and italic [`Segment`]s, and the block
//! prefixes it writes (`#` for headings, `*` and `N.` for list items) become
//! [`LineKind`]s so headings and markers can be styled.

use html2text::render::text_renderer::{RichAnnotation, TaggedLine};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Narrowest layout requested from html2text; ratatui wraps below this
const MIN_LAYOUT_WIDTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    Text,
    Heading(u8),
    Bullet { indent: usize },
    Numbered { indent: usize, number: usize },
    /// Horizontal rules and table borders
    Rule,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocLine {
    pub kind: LineKind,
    pub segments: Vec<Segment>,
}

impl DocLine {
    fn blank() -> Self {
        Self {
            kind: LineKind::Blank,
            segments: Vec::new(),
        }
    }

    /// Marker and indentation drawn before the text
    pub fn prefix(&self) -> String {
        match &self.kind {
            LineKind::Bullet { indent } => format!("{}• ", " ".repeat(*indent)),
            LineKind::Numbered { indent, number } => {
                format!("{}{}. ", " ".repeat(*indent), number)
            }
            _ => String::new(),
        }
    }

    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

fn is_box_drawing(c: char) -> bool {
    ('\u{2500}'..='\u{257F}').contains(&c)
}

/// Line kind and the byte length of the layout prefix to strip
fn classify(text: &str) -> (LineKind, usize) {
    if text.trim().is_empty() {
        return (LineKind::Blank, 0);
    }
    if text.chars().all(|c| c == ' ' || is_box_drawing(c)) {
        return (LineKind::Rule, 0);
    }

    let hashes = text.bytes().take_while(|b| *b == b'#').count();
    if (1..=6).contains(&hashes) && text[hashes..].starts_with(' ') {
        return (LineKind::Heading(hashes as u8), hashes + 1);
    }

    let indent = text.len() - text.trim_start_matches(' ').len();
    let rest = &text[indent..];
    if rest.starts_with("* ") {
        return (LineKind::Bullet { indent }, indent + 2);
    }

    let digits = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0
        && let Some(after) = rest[digits..].strip_prefix(". ")
        && let Ok(number) = rest[..digits].parse()
    {
        // Short numbers are padded so item text lines up
        let padding = after.len() - after.trim_start_matches(' ').len();
        return (
            LineKind::Numbered { indent, number },
            indent + digits + 2 + padding,
        );
    }

    (LineKind::Text, 0)
}

fn collect_segments(line: &TaggedLine<Vec<RichAnnotation>>) -> Vec<Segment> {
    let mut segments: Vec<Segment> = Vec::new();

    for piece in line.tagged_strings() {
        let bold = piece
            .tag
            .iter()
            .any(|a| matches!(a, RichAnnotation::Strong));
        let italic = piece
            .tag
            .iter()
            .any(|a| matches!(a, RichAnnotation::Emphasis));

        match segments.last_mut() {
            Some(last) if last.bold == bold && last.italic == italic => {
                last.text.push_str(&piece.s)
            }
            _ => segments.push(Segment {
                text: piece.s.clone(),
                bold,
                italic,
            }),
        }
    }

    while let Some(last) = segments.last_mut() {
        let trimmed = last.text.trim_end().len();
        last.text.truncate(trimmed);
        if !last.text.is_empty() {
            break;
        }
        segments.pop();
    }
    segments
}

/// Remove `len` leading bytes of ASCII layout prefix across segments
fn drop_prefix(segments: &mut Vec<Segment>, mut len: usize) {
    while len > 0 && !segments.is_empty() {
        if segments[0].text.len() <= len {
            len -= segments[0].text.len();
            segments.remove(0);
        } else {
            segments[0].text.drain(..len);
            len = 0;
        }
    }
}

/// Lay out an HTML fragment or document as display lines `width` columns wide
///
/// Runs of blank lines collapse to one, and leading and trailing blanks are
/// dropped.
pub fn parse_html(html: &str, width: usize) -> Vec<DocLine> {
    let rendered = html2text::from_read_rich(html.as_bytes(), width.max(MIN_LAYOUT_WIDTH));
    let mut lines: Vec<DocLine> = Vec::with_capacity(rendered.len());

    for tagged in &rendered {
        let mut segments = collect_segments(tagged);
        let text: String = segments.iter().map(|s| s.text.as_str()).collect();
        let (kind, prefix) = classify(&text);

        if kind == LineKind::Blank {
            if lines.last().is_some_and(|line| line.kind != LineKind::Blank) {
                lines.push(DocLine::blank());
            }
            continue;
        }

        drop_prefix(&mut segments, prefix);
        lines.push(DocLine { kind, segments });
    }

    while lines
        .last()
        .is_some_and(|line| line.kind == LineKind::Blank)
    {
        lines.pop();
    }
    lines
}

fn heading_style(level: u8) -> Style {
    let color = match level {
        1 => Color::Cyan,
        2 => Color::Yellow,
        _ => Color::Green,
    };
    let style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if level == 1 {
        style.add_modifier(Modifier::UNDERLINED)
    } else {
        style
    }
}

/// Styled ratatui lines for the care plan view
pub fn to_lines(lines: &[DocLine]) -> Vec<Line<'static>> {
    lines
        .iter()
        .map(|line| match &line.kind {
            LineKind::Blank => Line::default(),
            LineKind::Rule => Line::from(Span::styled(
                line.text(),
                Style::default().fg(Color::DarkGray),
            )),
            LineKind::Heading(level) => {
                Line::from(Span::styled(line.text(), heading_style(*level)))
            }
            kind => {
                let mut spans = Vec::with_capacity(line.segments.len() + 1);
                if matches!(kind, LineKind::Bullet { .. } | LineKind::Numbered { .. }) {
                    spans.push(Span::styled(line.prefix(), Style::default().fg(Color::Cyan)));
                }
                spans.extend(line.segments.iter().map(|segment| {
                    let mut style = Style::default();
                    if segment.bold {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if segment.italic {
                        style = style.add_modifier(Modifier::ITALIC);
                    }
                    Span::styled(segment.text.clone(), style)
                }));
                Line::from(spans)
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "html_tests.rs"]
mod html_tests;
