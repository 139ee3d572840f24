//! Result view for a generated care plan
//!
//! Converts the returned HTML into styled terminal lines, scrolls through
//! them and saves a printable copy on request.

mod care_plan_events;
pub mod care_plan_render;
mod care_plan_state;
pub mod export;
pub mod html;

pub use care_plan_state::CarePlanView;
