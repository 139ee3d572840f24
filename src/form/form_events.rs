use ratatui::crossterm::event::{KeyCode, KeyEvent};

use super::field::{FieldId, FieldKind, ListField};
use super::form_state::{FormHit, FormState};
use crate::widgets::text_input;

const WHEEL_LINES: u16 = 3;

/// Requests the form cannot fulfil on its own
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCommand {
    Submit,
}

impl FormState {
    /// Route a key to the focused field
    ///
    /// While `disabled` focus can still move but nothing is edited.
    pub fn handle_key(&mut self, key: KeyEvent, disabled: bool) -> Option<FormCommand> {
        match key.code {
            KeyCode::Tab => {
                self.focus_next();
                return None;
            }
            KeyCode::BackTab => {
                self.focus_prev();
                return None;
            }
            _ => {}
        }

        match self.focus.kind() {
            FieldKind::List(list) => {
                self.handle_list_key(list, key, disabled);
                None
            }
            FieldKind::Text => {
                self.handle_text_key(key, disabled);
                None
            }
            FieldKind::Choice => {
                self.handle_choice_key(key, disabled);
                None
            }
            FieldKind::MedicationList => {
                self.handle_medication_key(key, disabled);
                None
            }
            FieldKind::Button => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') if !disabled => Some(FormCommand::Submit),
                KeyCode::Up => {
                    self.focus_prev();
                    None
                }
                KeyCode::Down => {
                    self.focus_next();
                    None
                }
                _ => None,
            },
        }
    }

    fn handle_list_key(&mut self, list: ListField, key: KeyEvent, disabled: bool) {
        let input = self.list_mut(list);
        if let Some(action) = input
            .select
            .handle_key(key, input.selection.values(), disabled)
        {
            input.apply(action);
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent, disabled: bool) {
        match key.code {
            KeyCode::Enter if self.focus.is_medication_input() => {
                if !disabled && self.add_medication() {
                    self.set_focus(FieldId::MedName);
                } else {
                    self.focus_next();
                }
            }
            KeyCode::Enter | KeyCode::Down => self.focus_next(),
            KeyCode::Up => self.focus_prev(),
            _ if disabled => {}
            _ => {
                if let Some(textarea) = self.inputs.get_mut(&self.focus) {
                    text_input::input_single_line(textarea, key);
                }
            }
        }
    }

    fn handle_choice_key(&mut self, key: KeyEvent, disabled: bool) {
        match key.code {
            KeyCode::Left if !disabled => self.cycle_choice(self.focus, false),
            KeyCode::Right | KeyCode::Char(' ') if !disabled => {
                self.cycle_choice(self.focus, true)
            }
            KeyCode::Enter | KeyCode::Down => self.focus_next(),
            KeyCode::Up => self.focus_prev(),
            _ => {}
        }
    }

    fn handle_medication_key(&mut self, key: KeyEvent, disabled: bool) {
        let len = self.medications.len();
        match key.code {
            KeyCode::Down => match self.medication_cursor {
                Some(cursor) if cursor + 1 < len => self.medication_cursor = Some(cursor + 1),
                _ => self.focus_next(),
            },
            KeyCode::Up => match self.medication_cursor {
                Some(cursor) if cursor > 0 => self.medication_cursor = Some(cursor - 1),
                _ => self.focus_prev(),
            },
            KeyCode::Delete | KeyCode::Backspace if !disabled => {
                if let Some(cursor) = self.medication_cursor {
                    self.remove_medication(cursor);
                }
            }
            KeyCode::Enter => self.focus_next(),
            _ => {}
        }
    }

    /// Route a left click using the regions recorded by the last render
    pub fn handle_click(&mut self, column: u16, row: u16, disabled: bool) -> Option<FormCommand> {
        // The open panel overlaps other fields, so it gets the first look
        if let Some(list) = self.open_list() {
            let input = self.list_mut(list);
            if let Some(target) = input.select.hit_map().hit_test(column, row) {
                if let Some(action) =
                    input
                        .select
                        .handle_click(Some(target), input.selection.values(), disabled)
                {
                    input.apply(action);
                }
                return None;
            }
        }

        let clicked_list = ListField::ALL.into_iter().find_map(|list| {
            self.list(list)
                .select
                .hit_map()
                .hit_test(column, row)
                .map(|target| (list, target))
        });

        for list in ListField::ALL {
            if clicked_list.map(|(clicked, _)| clicked) != Some(list) {
                let input = self.list_mut(list);
                input.select.handle_click(None, input.selection.values(), disabled);
            }
        }

        if let Some((list, target)) = clicked_list {
            self.set_focus(list.field_id());
            let input = self.list_mut(list);
            if disabled {
                input.select.dismiss();
            }
            if let Some(action) =
                input
                    .select
                    .handle_click(Some(target), input.selection.values(), disabled)
            {
                input.apply(action);
            }
            return None;
        }

        let hit = self
            .hits
            .iter()
            .find(|(rect, _)| rect.contains((column, row).into()))
            .map(|(_, hit)| *hit)?;

        match hit {
            FormHit::Focus(field) => self.set_focus(field),
            FormHit::Choice(field, index) => {
                self.set_focus(field);
                if !disabled {
                    self.set_choice(field, index);
                }
            }
            FormHit::RemoveMedication(index) => {
                self.set_focus(FieldId::Medications);
                if !disabled {
                    self.remove_medication(index);
                }
            }
            FormHit::Submit => {
                self.set_focus(FieldId::Submit);
                if !disabled {
                    return Some(FormCommand::Submit);
                }
            }
        }
        None
    }

    /// Insert the first line of pasted text into the focused input
    pub fn paste(&mut self, text: &str, disabled: bool) {
        let line = text.lines().next().unwrap_or("");
        if disabled || line.is_empty() {
            return;
        }
        match self.focus.kind() {
            FieldKind::Text => {
                if let Some(textarea) = self.inputs.get_mut(&self.focus) {
                    textarea.insert_str(line);
                }
            }
            FieldKind::List(list) => {
                let select = &mut self.list_mut(list).select;
                let query = format!("{}{}", select.query(), line);
                select.set_query(&query);
            }
            _ => {}
        }
    }

    pub fn handle_wheel(&mut self, down: bool) {
        if down {
            self.scroll.scroll_down(WHEEL_LINES);
        } else {
            self.scroll.scroll_up(WHEEL_LINES);
        }
    }
}

#[cfg(test)]
#[path = "form_events_tests.rs"]
mod form_events_tests;
