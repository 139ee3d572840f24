//! Patient record, care plan payloads and the static data the form offers

pub mod presets;
mod record;
pub mod samples;

pub use record::{
    CarePlan, Gender, HealthStatus, Medication, MobilityLevel, PatientRecord, format_timestamp,
};
