//! Single-line helpers over `tui_textarea::TextArea`

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::style::{Color, Modifier, Style};
use tui_textarea::{Input, TextArea};

pub fn single_line(placeholder: &str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    if !placeholder.is_empty() {
        textarea.set_placeholder_text(placeholder.to_string());
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    }
    textarea
}

pub fn text<'a>(textarea: &'a TextArea<'_>) -> &'a str {
    textarea.lines().first().map(String::as_str).unwrap_or("")
}

pub fn clear(textarea: &mut TextArea<'_>) {
    textarea.move_cursor(tui_textarea::CursorMove::End);
    textarea.delete_line_by_head();
    textarea.delete_line_by_end();
}

pub fn set_text(textarea: &mut TextArea<'_>, value: &str) {
    clear(textarea);
    textarea.insert_str(value);
}

/// Show the block cursor only while the input is focused
pub fn set_focused(textarea: &mut TextArea<'_>, focused: bool) {
    let style = if focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };
    textarea.set_cursor_style(style);
}

/// Feed a key to the textarea, refusing anything that would add a line
///
/// Returns true when the text changed.
pub fn input_single_line(textarea: &mut TextArea<'_>, key: KeyEvent) -> bool {
    let inserts_newline = match key.code {
        KeyCode::Enter => true,
        KeyCode::Char('m') | KeyCode::Char('j') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    };
    if inserts_newline {
        return false;
    }

    let before = text(textarea).to_string();
    textarea.input(Input::from(key));
    text(textarea) != before
}
