use std::fmt;

use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};

use crate::select::Selection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Other => write!(f, "Other"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MobilityLevel {
    #[default]
    Ambulatory,
    Walker,
    Wheelchair,
    Bedbound,
}

impl MobilityLevel {
    pub const ALL: [MobilityLevel; 4] = [
        MobilityLevel::Ambulatory,
        MobilityLevel::Walker,
        MobilityLevel::Wheelchair,
        MobilityLevel::Bedbound,
    ];
}

impl fmt::Display for MobilityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MobilityLevel::Ambulatory => write!(f, "Ambulatory"),
            MobilityLevel::Walker => write!(f, "Walker"),
            MobilityLevel::Wheelchair => write!(f, "Wheelchair"),
            MobilityLevel::Bedbound => write!(f, "Bedbound"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
}

impl Medication {
    /// Build a medication only when every part is non-blank
    pub fn new(name: &str, dosage: &str, frequency: &str) -> Option<Self> {
        let (name, dosage, frequency) = (name.trim(), dosage.trim(), frequency.trim());
        if name.is_empty() || dosage.is_empty() || frequency.is_empty() {
            return None;
        }
        Some(Self {
            name: name.to_string(),
            dosage: dosage.to_string(),
            frequency: frequency.to_string(),
        })
    }
}

impl fmt::Display for Medication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} {}", self.name, self.dosage, self.frequency)
    }
}

/// The aggregate record forwarded to the generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientRecord {
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub admission_date: NaiveDate,
    pub facility: String,

    pub primary_diagnosis: String,
    #[serde(default)]
    pub comorbidities: Selection,

    pub blood_pressure: String,
    pub heart_rate: u16,
    pub temperature: f64,
    pub oxygen_saturation: u8,
    pub pain_level: u8,

    #[serde(default)]
    pub current_medications: Vec<Medication>,
    #[serde(default)]
    pub allergies: Selection,

    #[serde(default)]
    pub symptoms: Selection,
    pub mobility_level: MobilityLevel,
    pub adl_independence: String,
    #[serde(default)]
    pub fall_risk_factors: Selection,
    pub cognitive_status: String,

    pub isolation_precautions: Option<String>,
    pub diet_restrictions: Option<String>,
}

/// Generated care plan returned by the service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarePlan {
    pub patient_name: String,
    pub care_plan_html: String,
    pub generated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub environment: String,
    pub version: String,
}

/// Format an ISO timestamp as "January 15, 2024 at 10:30 AM" in `tz`
///
/// Unparseable input is returned unchanged.
pub fn format_timestamp<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let parsed = DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(tz)).or_else(|_| {
        chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc().with_timezone(tz))
    });

    match parsed {
        Ok(dt) => dt.format("%B %-d, %Y at %I:%M %p").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
