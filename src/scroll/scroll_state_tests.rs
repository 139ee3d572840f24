//! Tests for scroll

use super::*;
use proptest::prelude::*;

fn state(content: u32, viewport: u16) -> ScrollState {
    let mut state = ScrollState::new();
    state.update_bounds(content, viewport);
    state
}

#[test]
fn test_update_bounds_clamps_offset() {
    let mut scroll = state(100, 20);
    scroll.jump_to_bottom();
    assert_eq!(scroll.offset, 80);

    scroll.update_bounds(30, 20);
    assert_eq!(scroll.max_offset, 10);
    assert_eq!(scroll.offset, 10);
}

#[test]
fn test_short_content_never_scrolls() {
    let mut scroll = state(5, 20);
    scroll.scroll_down(3);
    scroll.page_down();
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_page_moves_half_viewport() {
    let mut scroll = state(100, 20);
    scroll.page_down();
    assert_eq!(scroll.offset, 10);
    scroll.page_up();
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_jump_top_and_bottom() {
    let mut scroll = state(50, 10);
    scroll.jump_to_bottom();
    assert_eq!(scroll.offset, 40);
    scroll.jump_to_top();
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_ensure_visible_scrolls_down_minimally() {
    let mut scroll = state(100, 10);
    scroll.ensure_visible(12, 3);
    assert_eq!(scroll.offset, 5);
}

#[test]
fn test_ensure_visible_scrolls_up_to_top_of_region() {
    let mut scroll = state(100, 10);
    scroll.scroll_down(30);
    scroll.ensure_visible(8, 3);
    assert_eq!(scroll.offset, 8);
}

#[test]
fn test_ensure_visible_tall_region_shows_its_top() {
    let mut scroll = state(100, 10);
    scroll.ensure_visible(20, 15);
    assert_eq!(scroll.offset, 20);
}

proptest! {
    #[test]
    fn prop_offset_never_exceeds_max(
        content in 0u32..500,
        viewport in 1u16..100,
        downs in proptest::collection::vec(0u16..50, 0..20),
    ) {
        let mut scroll = state(content, viewport);
        for lines in downs {
            scroll.scroll_down(lines);
            prop_assert!(scroll.offset <= scroll.max_offset);
        }
    }
}
