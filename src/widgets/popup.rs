use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly above `anchor`, clipped to the top of the screen
pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x + x_offset;
    let popup_y = anchor.y.saturating_sub(height);

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset * 2)),
        height: height.min(anchor.y),
    }
}

/// Place a popup directly under `anchor`, clipped to the bottom of `bounds`
pub fn popup_below_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let popup_y = anchor.bottom();
    let available = bounds.bottom().saturating_sub(popup_y);

    Rect {
        x: anchor.x,
        y: popup_y,
        width: width.min(anchor.width),
        height: height.min(available),
    }
}

/// Below the anchor when the whole popup fits there, otherwise on the roomier side
pub fn popup_near_anchor(anchor: Rect, bounds: Rect, width: u16, height: u16) -> Rect {
    let below = bounds.bottom().saturating_sub(anchor.bottom());
    let above = anchor.y.saturating_sub(bounds.y);

    if below >= height || below >= above {
        popup_below_anchor(anchor, bounds, width, height)
    } else {
        popup_above_anchor(anchor, width, height.min(above), 0)
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
