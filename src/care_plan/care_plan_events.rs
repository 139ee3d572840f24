use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::care_plan_state::CarePlanView;

const MOUSE_SCROLL_LINES: u16 = 3;

impl CarePlanView {
    /// Handle a scrolling key; returns false for keys this view does not use
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_up(1),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_down(1),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::PageDown | KeyCode::Char(' ') => self.scroll.page_down(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll.page_up()
            }
            KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.scroll.page_down()
            }
            KeyCode::Home | KeyCode::Char('g') => self.scroll.jump_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll.jump_to_bottom(),
            _ => return false,
        }
        true
    }

    pub fn handle_wheel(&mut self, down: bool) {
        if down {
            self.scroll.scroll_down(MOUSE_SCROLL_LINES);
        } else {
            self.scroll.scroll_up(MOUSE_SCROLL_LINES);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::CarePlan;
    use crate::test_utils::test_helpers::{key, key_with_mods};

    fn long_view() -> CarePlanView {
        let items: String = (0..60).map(|i| format!("<li>Item {}</li>", i)).collect();
        let mut view = CarePlanView::with_timezone(
            CarePlan {
                patient_name: "John Doe".to_string(),
                care_plan_html: format!("<ul>{}</ul>", items),
                generated_at: "2024-01-15T10:30:00".to_string(),
            },
            &chrono::Utc,
        );
        let total = view.lines(80).len() as u32;
        view.scroll.update_bounds(total, 20);
        view
    }

    #[test]
    fn test_line_keys() {
        let mut view = long_view();
        assert!(view.handle_key(key(KeyCode::Char('j'))));
        assert!(view.handle_key(key(KeyCode::Down)));
        assert_eq!(view.scroll.offset, 2);
        assert!(view.handle_key(key(KeyCode::Char('k'))));
        assert_eq!(view.scroll.offset, 1);
    }

    #[test]
    fn test_page_keys() {
        let mut view = long_view();
        view.handle_key(key(KeyCode::PageDown));
        assert_eq!(view.scroll.offset, 10);
        view.handle_key(key_with_mods(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(view.scroll.offset, 0);
    }

    #[test]
    fn test_jump_keys() {
        let mut view = long_view();
        view.handle_key(key(KeyCode::Char('G')));
        assert_eq!(view.scroll.offset, view.scroll.max_offset);
        view.handle_key(key(KeyCode::Char('g')));
        assert_eq!(view.scroll.offset, 0);
    }

    #[test]
    fn test_unrelated_key_not_consumed() {
        let mut view = long_view();
        assert!(!view.handle_key(key(KeyCode::Char('x'))));
    }

    #[test]
    fn test_wheel() {
        let mut view = long_view();
        view.handle_wheel(true);
        assert_eq!(view.scroll.offset, 3);
        view.handle_wheel(false);
        assert_eq!(view.scroll.offset, 0);
    }
}
