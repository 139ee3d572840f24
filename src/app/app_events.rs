use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Position;

use super::app_state::{App, View};
use crate::form::FormCommand;

impl App {
    /// Dispatch one terminal event
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            Event::Paste(text) => self.handle_paste_event(text),
            _ => {}
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.view() {
            View::Form => {
                let disabled = self.is_submitting();
                if let Some(FormCommand::Submit) = self.form.handle_key(key, disabled) {
                    self.submit();
                }
            }
            View::CarePlan => {
                if let Some(view) = &mut self.care_plan {
                    view.handle_key(key);
                }
            }
        }
    }

    /// Keys that work regardless of focus
    /// Returns true if key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match key.code {
            KeyCode::Char('c') => self.quit(),
            KeyCode::Char('n') if self.view() == View::CarePlan => self.new_patient(),
            KeyCode::Char('x') => self.dismiss_error(),
            KeyCode::Char('g') if self.view() == View::Form => self.submit(),
            KeyCode::Char('l') if self.view() == View::Form => self.cycle_sample(),
            KeyCode::Char('s') if self.view() == View::CarePlan => self.save_care_plan(),
            _ => return false,
        }
        true
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_click(mouse.column, mouse.row),
            MouseEventKind::ScrollDown => self.handle_wheel(true),
            MouseEventKind::ScrollUp => self.handle_wheel(false),
            _ => {}
        }
    }

    fn handle_click(&mut self, column: u16, row: u16) {
        let pos = Position { x: column, y: row };

        if self.dismiss_error_area.is_some_and(|area| area.contains(pos)) {
            self.dismiss_error();
            return;
        }
        if self.new_patient_area.is_some_and(|area| area.contains(pos)) {
            self.new_patient();
            return;
        }

        let disabled = self.is_submitting();
        if self.view() == View::Form
            && let Some(FormCommand::Submit) = self.form.handle_click(column, row, disabled)
        {
            self.submit();
        }
    }

    fn handle_wheel(&mut self, down: bool) {
        match &mut self.care_plan {
            Some(view) => view.handle_wheel(down),
            None => self.form.handle_wheel(down),
        }
    }

    /// Insert pasted text into the focused form input
    pub fn handle_paste_event(&mut self, text: String) {
        let disabled = self.is_submitting();
        if self.view() == View::Form {
            self.form.paste(&text, disabled);
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
