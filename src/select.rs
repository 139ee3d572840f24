//! Searchable multi-select control
//!
//! The control filters a fixed candidate list as the user types, accepts free
//! text when nothing matches, and shows the chosen values as removable chips.
//! It never mutates the selection itself: every interaction returns an
//! optional [`SelectAction`] for the owner to apply.

mod filter;
mod select_events;
pub mod select_render;
mod select_state;
mod selection;

pub use filter::{
    MAX_VISIBLE_SUGGESTIONS, PanelRow, SuggestionView, filter_candidates, suggestion_view,
};
pub use select_state::{SearchableSelect, SelectAction, SelectHitMap, SelectTarget};
pub use selection::{Selection, accept_entry};
