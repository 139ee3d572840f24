//! Care plan submission
//!
//! The UI thread hands a finished record to a background worker and polls for
//! the outcome on every tick. Only one generation request is outstanding at a
//! time.

mod submission_state;
mod worker;

pub use submission_state::{
    SubmissionEvent, SubmissionRequest, SubmissionResponse, SubmissionState, SubmitError,
};
pub use worker::spawn_worker;
