//! Transient messages shown in the top-right corner
//!
//! Any part of the app can post a notification; it disappears on its own once
//! its duration has passed.

mod notification_render;
mod notification_state;

pub use notification_render::render_notification;
pub use notification_state::{Notification, NotificationKind, NotificationState};
