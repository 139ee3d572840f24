//! careplan: a terminal intake form that submits patient data to a care plan
//! generation service and displays the returned plan.

pub mod app;
pub mod care_plan;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod form;
pub mod logging;
pub mod notification;
pub mod patient;
pub mod scroll;
pub mod select;
pub mod submission;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
mod test_utils;
