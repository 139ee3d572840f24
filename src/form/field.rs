//! Field identities, focus order and static field metadata

/// Every focusable element of the form, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Age,
    Gender,
    AdmissionDate,
    Facility,
    PrimaryDiagnosis,
    Comorbidities,
    BloodPressure,
    HeartRate,
    Temperature,
    OxygenSaturation,
    PainLevel,
    MedName,
    MedDosage,
    MedFrequency,
    Medications,
    Allergies,
    Symptoms,
    MobilityLevel,
    AdlIndependence,
    FallRiskFactors,
    CognitiveStatus,
    IsolationPrecautions,
    DietRestrictions,
    Submit,
}

/// The four multi-select fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListField {
    Comorbidities,
    Allergies,
    Symptoms,
    FallRiskFactors,
}

impl ListField {
    pub const ALL: [ListField; 4] = [
        ListField::Comorbidities,
        ListField::Allergies,
        ListField::Symptoms,
        ListField::FallRiskFactors,
    ];

    pub fn index(self) -> usize {
        match self {
            ListField::Comorbidities => 0,
            ListField::Allergies => 1,
            ListField::Symptoms => 2,
            ListField::FallRiskFactors => 3,
        }
    }

    pub fn field_id(self) -> FieldId {
        match self {
            ListField::Comorbidities => FieldId::Comorbidities,
            ListField::Allergies => FieldId::Allergies,
            ListField::Symptoms => FieldId::Symptoms,
            ListField::FallRiskFactors => FieldId::FallRiskFactors,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ListField::Comorbidities => "Type to search or add custom comorbidity...",
            ListField::Allergies => "Type to search allergies or add custom...",
            ListField::Symptoms => "Type to search symptoms or add custom...",
            ListField::FallRiskFactors => "Type to search fall risks or add custom...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Choice,
    List(ListField),
    MedicationList,
    Button,
}

impl FieldId {
    pub const ALL: [FieldId; 25] = [
        FieldId::Name,
        FieldId::Age,
        FieldId::Gender,
        FieldId::AdmissionDate,
        FieldId::Facility,
        FieldId::PrimaryDiagnosis,
        FieldId::Comorbidities,
        FieldId::BloodPressure,
        FieldId::HeartRate,
        FieldId::Temperature,
        FieldId::OxygenSaturation,
        FieldId::PainLevel,
        FieldId::MedName,
        FieldId::MedDosage,
        FieldId::MedFrequency,
        FieldId::Medications,
        FieldId::Allergies,
        FieldId::Symptoms,
        FieldId::MobilityLevel,
        FieldId::AdlIndependence,
        FieldId::FallRiskFactors,
        FieldId::CognitiveStatus,
        FieldId::IsolationPrecautions,
        FieldId::DietRestrictions,
        FieldId::Submit,
    ];

    /// Text fields backed by a text input
    pub const TEXT_FIELDS: [FieldId; 17] = [
        FieldId::Name,
        FieldId::Age,
        FieldId::AdmissionDate,
        FieldId::Facility,
        FieldId::PrimaryDiagnosis,
        FieldId::BloodPressure,
        FieldId::HeartRate,
        FieldId::Temperature,
        FieldId::OxygenSaturation,
        FieldId::PainLevel,
        FieldId::MedName,
        FieldId::MedDosage,
        FieldId::MedFrequency,
        FieldId::AdlIndependence,
        FieldId::CognitiveStatus,
        FieldId::IsolationPrecautions,
        FieldId::DietRestrictions,
    ];

    fn position(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> FieldId {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> FieldId {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }

    pub fn kind(self) -> FieldKind {
        match self {
            FieldId::Gender | FieldId::MobilityLevel => FieldKind::Choice,
            FieldId::Comorbidities => FieldKind::List(ListField::Comorbidities),
            FieldId::Allergies => FieldKind::List(ListField::Allergies),
            FieldId::Symptoms => FieldKind::List(ListField::Symptoms),
            FieldId::FallRiskFactors => FieldKind::List(ListField::FallRiskFactors),
            FieldId::Medications => FieldKind::MedicationList,
            FieldId::Submit => FieldKind::Button,
            _ => FieldKind::Text,
        }
    }

    pub fn is_medication_input(self) -> bool {
        matches!(
            self,
            FieldId::MedName | FieldId::MedDosage | FieldId::MedFrequency
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::Name => "Patient Name",
            FieldId::Age => "Age",
            FieldId::Gender => "Gender",
            FieldId::AdmissionDate => "Admission Date",
            FieldId::Facility => "Facility",
            FieldId::PrimaryDiagnosis => "Primary Diagnosis",
            FieldId::Comorbidities => "Comorbidities",
            FieldId::BloodPressure => "Blood Pressure",
            FieldId::HeartRate => "Heart Rate (bpm)",
            FieldId::Temperature => "Temp (°F)",
            FieldId::OxygenSaturation => "O2 Sat (%)",
            FieldId::PainLevel => "Pain Level (0-10)",
            FieldId::MedName => "Medication Name",
            FieldId::MedDosage => "Dosage",
            FieldId::MedFrequency => "Frequency",
            FieldId::Medications => "Medications",
            FieldId::Allergies => "Allergies",
            FieldId::Symptoms => "Current Symptoms",
            FieldId::MobilityLevel => "Mobility Level",
            FieldId::AdlIndependence => "ADL Independence",
            FieldId::FallRiskFactors => "Fall Risk Factors",
            FieldId::CognitiveStatus => "Cognitive Status",
            FieldId::IsolationPrecautions => "Isolation Precautions",
            FieldId::DietRestrictions => "Diet Restrictions",
            FieldId::Submit => "Generate Care Plan",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(
            self,
            FieldId::Name
                | FieldId::Age
                | FieldId::Gender
                | FieldId::AdmissionDate
                | FieldId::Facility
                | FieldId::PrimaryDiagnosis
                | FieldId::BloodPressure
                | FieldId::HeartRate
                | FieldId::Temperature
                | FieldId::OxygenSaturation
                | FieldId::PainLevel
                | FieldId::MobilityLevel
                | FieldId::AdlIndependence
                | FieldId::CognitiveStatus
        )
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            FieldId::AdmissionDate => "YYYY-MM-DD",
            FieldId::PrimaryDiagnosis => "e.g., Congestive Heart Failure, Stroke, COPD",
            FieldId::BloodPressure => "120/80",
            FieldId::MedName => "Medication name",
            FieldId::MedDosage => "Dosage (e.g., 10mg)",
            FieldId::MedFrequency => "Frequency (e.g., BID)",
            FieldId::AdlIndependence => "e.g., Requires assistance with all ADLs",
            FieldId::CognitiveStatus => "e.g., Alert and oriented x3, or Confused",
            FieldId::IsolationPrecautions => "None (or specify type)",
            FieldId::DietRestrictions => "None (or specify restrictions)",
            _ => match self.kind() {
                FieldKind::List(list) => list.placeholder(),
                _ => "",
            },
        }
    }

    /// Heading of the form section that starts at this field
    pub fn section(self) -> Option<&'static str> {
        match self {
            FieldId::Name => Some("Patient Information"),
            FieldId::PrimaryDiagnosis => Some("Medical History"),
            FieldId::BloodPressure => Some("Vital Signs"),
            FieldId::MedName => Some("Current Medications"),
            FieldId::Allergies => Some("Allergies"),
            FieldId::Symptoms => Some("Symptoms & Functional Status"),
            FieldId::IsolationPrecautions => Some("Special Considerations"),
            _ => None,
        }
    }
}
