//! Patient intake form
//!
//! Holds every field of the record being edited, moves focus between them,
//! routes keys and clicks, and validates the whole form into a
//! [`PatientRecord`](crate::patient::PatientRecord) on submit.

mod field;
mod form_events;
pub mod form_render;
mod form_state;
mod validation;

pub use field::{FieldId, FieldKind, ListField};
pub use form_events::FormCommand;
pub use form_state::{FormHit, FormState, ListInput};
pub use validation::FormError;
