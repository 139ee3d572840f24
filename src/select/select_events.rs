//! Keyboard and mouse handling for the searchable select

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::select_state::{SearchableSelect, SelectAction, SelectTarget};
use crate::widgets::text_input;

impl SearchableSelect {
    /// Handle a key while the control has focus
    pub fn handle_key(
        &mut self,
        key: KeyEvent,
        selected: &[String],
        disabled: bool,
    ) -> Option<SelectAction> {
        if key.code == KeyCode::Esc {
            self.dismiss();
            return None;
        }
        if disabled {
            return None;
        }

        match key.code {
            KeyCode::Enter => match self.state.highlighted {
                Some(index) if self.state.open => self.confirm_row(index, selected, disabled),
                _ => {
                    let query = self.query().to_string();
                    self.confirm(&query, selected, disabled)
                }
            },
            KeyCode::Down => {
                if self.state.open {
                    self.highlight_next(selected);
                } else {
                    self.focus();
                }
                None
            }
            KeyCode::Up => {
                if self.state.open {
                    self.highlight_prev(selected);
                }
                None
            }
            KeyCode::Backspace if self.query().is_empty() => {
                let last = selected.len().checked_sub(1)?;
                self.request_remove(last, selected, disabled)
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.clear_query();
                None
            }
            _ => {
                if text_input::input_single_line(&mut self.state.query, key) {
                    self.state.open = true;
                    self.state.highlighted = None;
                }
                None
            }
        }
    }

    /// Handle a click resolved against the last rendered hit map
    ///
    /// `None` means the click landed outside the control, which closes the
    /// panel but keeps the typed text.
    pub fn handle_click(
        &mut self,
        target: Option<SelectTarget>,
        selected: &[String],
        disabled: bool,
    ) -> Option<SelectAction> {
        match target {
            None => {
                self.dismiss();
                None
            }
            Some(SelectTarget::Input) => {
                if !disabled {
                    self.focus();
                }
                None
            }
            Some(SelectTarget::ClearQuery) => {
                if !disabled {
                    self.clear_query();
                }
                None
            }
            Some(SelectTarget::Row(index)) => self.confirm_row(index, selected, disabled),
            Some(SelectTarget::RemoveChip(index)) => {
                self.request_remove(index, selected, disabled)
            }
            Some(SelectTarget::Panel) | Some(SelectTarget::Body) => None,
        }
    }
}

#[cfg(test)]
#[path = "select_events_tests.rs"]
mod select_events_tests;
