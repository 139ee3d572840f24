use ratatui::layout::{Position, Rect};
use tui_textarea::TextArea;

use super::filter::{SuggestionView, suggestion_view};
use super::selection::accept_entry;
use crate::widgets::text_input;

const DEFAULT_PLACEHOLDER: &str = "Type to search or add custom...";

/// Intent raised by the control; the owner of the selection applies it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    Add(String),
    Remove(usize),
}

/// Part of the control under a mouse position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectTarget {
    Input,
    ClearQuery,
    Row(usize),
    RemoveChip(usize),
    /// Inside the panel but not on an activatable row
    Panel,
    /// Inside the control's border but on nothing interactive
    Body,
}

/// Screen regions recorded during the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectHitMap {
    pub bounds: Rect,
    pub input: Rect,
    pub clear_button: Option<Rect>,
    pub chips: Vec<(Rect, usize)>,
    pub panel: Option<Rect>,
    pub rows: Vec<(Rect, usize)>,
}

impl SelectHitMap {
    pub fn hit_test(&self, column: u16, row: u16) -> Option<SelectTarget> {
        let pos = Position { x: column, y: row };

        if let Some(panel) = self.panel
            && panel.contains(pos)
        {
            return Some(
                self.rows
                    .iter()
                    .find(|(rect, _)| rect.contains(pos))
                    .map(|(_, i)| SelectTarget::Row(*i))
                    .unwrap_or(SelectTarget::Panel),
            );
        }

        if let Some(button) = self.clear_button
            && button.contains(pos)
        {
            return Some(SelectTarget::ClearQuery);
        }

        if self.input.contains(pos) {
            return Some(SelectTarget::Input);
        }

        if let Some((_, i)) = self.chips.iter().find(|(rect, _)| rect.contains(pos)) {
            return Some(SelectTarget::RemoveChip(*i));
        }

        if self.bounds.contains(pos) {
            return Some(SelectTarget::Body);
        }

        None
    }
}

/// Transient interaction state: the query text, panel visibility and the
/// keyboard-highlighted row
pub struct SelectState {
    pub(super) query: TextArea<'static>,
    pub(super) open: bool,
    pub(super) highlighted: Option<usize>,
}

impl SelectState {
    fn new(placeholder: &str) -> Self {
        Self {
            query: text_input::single_line(placeholder),
            open: false,
            highlighted: None,
        }
    }
}

/// Searchable multi-select over a fixed candidate list
///
/// The control never owns the selection. Callers pass the current values into
/// every interaction and apply the returned [`SelectAction`] themselves.
pub struct SearchableSelect {
    label: String,
    candidates: Vec<String>,
    pub(super) state: SelectState,
    pub(super) hit: SelectHitMap,
}

impl SearchableSelect {
    pub fn new(label: impl Into<String>, candidates: Vec<String>) -> Self {
        Self {
            label: label.into(),
            candidates,
            state: SelectState::new(DEFAULT_PLACEHOLDER),
            hit: SelectHitMap::default(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.state.query = text_input::single_line(placeholder);
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn query(&self) -> &str {
        text_input::text(&self.state.query)
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.state.highlighted
    }

    pub fn hit_map(&self) -> &SelectHitMap {
        &self.hit
    }

    /// Derived panel content for the current query
    pub fn view<'a>(&'a self, selected: &[String]) -> SuggestionView<'a> {
        suggestion_view(&self.candidates, selected, self.query())
    }

    /// Whether the panel is open and has something to show
    pub fn panel_visible(&self, selected: &[String]) -> bool {
        self.state.open && !self.view(selected).is_empty()
    }

    pub fn focus(&mut self) {
        self.state.open = true;
    }

    /// Close the panel, keeping the typed text
    pub fn dismiss(&mut self) {
        self.state.open = false;
        self.state.highlighted = None;
    }

    pub fn clear_query(&mut self) {
        text_input::clear(&mut self.state.query);
        self.state.highlighted = None;
    }

    /// Back to the initial state: empty query, panel closed
    pub fn reset(&mut self) {
        self.clear_query();
        self.dismiss();
    }

    /// Forget regions from an earlier frame when the field is not drawn
    pub fn clear_hit_map(&mut self) {
        self.hit = SelectHitMap::default();
    }

    pub fn set_query(&mut self, query: &str) {
        text_input::set_text(&mut self.state.query, query);
        self.state.open = true;
        self.state.highlighted = None;
    }

    /// Try to add `value`
    ///
    /// On success the query is cleared and the panel closes. A rejected value
    /// leaves the query and panel untouched.
    pub fn confirm(
        &mut self,
        value: &str,
        selected: &[String],
        disabled: bool,
    ) -> Option<SelectAction> {
        if disabled {
            return None;
        }
        let entry = accept_entry(value, selected)?;
        self.clear_query();
        self.dismiss();
        Some(SelectAction::Add(entry))
    }

    /// Confirm the panel row at `index` if it is activatable
    pub fn confirm_row(
        &mut self,
        index: usize,
        selected: &[String],
        disabled: bool,
    ) -> Option<SelectAction> {
        let value = self
            .view(selected)
            .rows
            .get(index)
            .filter(|row| row.is_activatable())
            .map(|row| row.value().to_string())?;
        self.confirm(&value, selected, disabled)
    }

    /// Forward a removal request for the chip at `index`
    pub fn request_remove(
        &self,
        index: usize,
        selected: &[String],
        disabled: bool,
    ) -> Option<SelectAction> {
        if disabled || index >= selected.len() {
            return None;
        }
        Some(SelectAction::Remove(index))
    }

    pub(super) fn highlight_next(&mut self, selected: &[String]) {
        let next = self.view(selected).next_activatable(self.state.highlighted);
        self.state.highlighted = next;
    }

    pub(super) fn highlight_prev(&mut self, selected: &[String]) {
        let prev = self.view(selected).prev_activatable(self.state.highlighted);
        self.state.highlighted = prev;
    }
}

#[cfg(test)]
#[path = "select_state_tests.rs"]
mod select_state_tests;
