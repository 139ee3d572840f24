use std::collections::HashMap;

use chrono::{Local, NaiveDate};
use ratatui::layout::Rect;
use tui_textarea::TextArea;

use super::field::{FieldId, FieldKind, ListField};
use super::validation::{
    self, AGE_RANGE, FormError, HEART_RATE_RANGE, OXYGEN_RANGE, PAIN_RANGE, TEMPERATURE_RANGE,
};
use crate::patient::presets;
use crate::patient::{Gender, Medication, MobilityLevel, PatientRecord};
use crate::scroll::ScrollState;
use crate::select::{SearchableSelect, SelectAction, Selection};
use crate::widgets::text_input;

/// A select control together with the selection it edits
pub struct ListInput {
    pub select: SearchableSelect,
    pub selection: Selection,
}

impl ListInput {
    fn new(list: ListField) -> Self {
        let (label, candidates) = match list {
            ListField::Comorbidities => ("Comorbidities", presets::COMMON_COMORBIDITIES),
            ListField::Allergies => ("Allergies", presets::COMMON_ALLERGIES),
            ListField::Symptoms => ("Current Symptoms", presets::COMMON_SYMPTOMS),
            ListField::FallRiskFactors => {
                ("Fall Risk Factors", presets::COMMON_FALL_RISK_FACTORS)
            }
        };
        Self {
            select: SearchableSelect::new(label, presets::candidates(candidates))
                .with_placeholder(list.placeholder()),
            selection: Selection::new(),
        }
    }

    /// Apply an intent raised by the control
    pub fn apply(&mut self, action: SelectAction) {
        match action {
            SelectAction::Add(value) => {
                self.selection.add(&value);
            }
            SelectAction::Remove(index) => {
                self.selection.remove(index);
            }
        }
    }
}

/// Clickable regions recorded during the last render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormHit {
    Focus(FieldId),
    Choice(FieldId, usize),
    RemoveMedication(usize),
    Submit,
}

/// Everything the intake form holds between frames
pub struct FormState {
    pub(super) inputs: HashMap<FieldId, TextArea<'static>>,
    pub gender: Gender,
    pub mobility_level: MobilityLevel,
    pub(super) lists: [ListInput; 4],
    pub(super) medications: Vec<Medication>,
    pub(super) medication_cursor: Option<usize>,
    pub(super) focus: FieldId,
    pub scroll: ScrollState,
    pub(super) hits: Vec<(Rect, FormHit)>,
    /// Content-space top and height of each field from the last render
    pub(super) placements: Vec<(FieldId, u16, u16)>,
    pub(super) scroll_to_focus: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::new_with_date(Local::now().date_naive())
    }

    /// A blank form whose admission date defaults to `today`
    pub fn new_with_date(today: NaiveDate) -> Self {
        let inputs = FieldId::TEXT_FIELDS
            .iter()
            .map(|&field| (field, text_input::single_line(field.placeholder())))
            .collect();

        let mut form = Self {
            inputs,
            gender: Gender::default(),
            mobility_level: MobilityLevel::default(),
            lists: ListField::ALL.map(ListInput::new),
            medications: Vec::new(),
            medication_cursor: None,
            focus: FieldId::Name,
            scroll: ScrollState::new(),
            hits: Vec::new(),
            placements: Vec::new(),
            scroll_to_focus: false,
        };

        form.set_text(FieldId::Age, "65");
        form.set_text(FieldId::AdmissionDate, &today.format("%Y-%m-%d").to_string());
        form.set_text(FieldId::HeartRate, "75");
        form.set_text(FieldId::Temperature, "98.6");
        form.set_text(FieldId::OxygenSaturation, "98");
        form.set_text(FieldId::PainLevel, "0");
        form
    }

    /// Replace the whole form with `record`
    pub fn load(&mut self, record: &PatientRecord) {
        self.set_text(FieldId::Name, &record.name);
        self.set_text(FieldId::Age, &record.age.to_string());
        self.set_text(
            FieldId::AdmissionDate,
            &record.admission_date.format("%Y-%m-%d").to_string(),
        );
        self.set_text(FieldId::Facility, &record.facility);
        self.set_text(FieldId::PrimaryDiagnosis, &record.primary_diagnosis);
        self.set_text(FieldId::BloodPressure, &record.blood_pressure);
        self.set_text(FieldId::HeartRate, &record.heart_rate.to_string());
        self.set_text(FieldId::Temperature, &record.temperature.to_string());
        self.set_text(
            FieldId::OxygenSaturation,
            &record.oxygen_saturation.to_string(),
        );
        self.set_text(FieldId::PainLevel, &record.pain_level.to_string());
        self.set_text(FieldId::AdlIndependence, &record.adl_independence);
        self.set_text(FieldId::CognitiveStatus, &record.cognitive_status);
        self.set_text(
            FieldId::IsolationPrecautions,
            record.isolation_precautions.as_deref().unwrap_or(""),
        );
        self.set_text(
            FieldId::DietRestrictions,
            record.diet_restrictions.as_deref().unwrap_or(""),
        );
        for field in [FieldId::MedName, FieldId::MedDosage, FieldId::MedFrequency] {
            self.set_text(field, "");
        }

        self.gender = record.gender;
        self.mobility_level = record.mobility_level;

        for (list, selection) in [
            (ListField::Comorbidities, &record.comorbidities),
            (ListField::Allergies, &record.allergies),
            (ListField::Symptoms, &record.symptoms),
            (ListField::FallRiskFactors, &record.fall_risk_factors),
        ] {
            let input = &mut self.lists[list.index()];
            input.selection = selection.clone();
            input.select.reset();
        }

        self.medications = record.current_medications.clone();
        self.medication_cursor = None;
        self.focus = FieldId::Name;
        self.scroll.reset();
    }

    pub fn text(&self, field: FieldId) -> &str {
        self.inputs
            .get(&field)
            .map(text_input::text)
            .unwrap_or("")
    }

    pub fn set_text(&mut self, field: FieldId, value: &str) {
        if let Some(textarea) = self.inputs.get_mut(&field) {
            text_input::set_text(textarea, value);
        }
    }

    pub fn list(&self, list: ListField) -> &ListInput {
        &self.lists[list.index()]
    }

    pub fn list_mut(&mut self, list: ListField) -> &mut ListInput {
        &mut self.lists[list.index()]
    }

    pub fn selection(&self, list: ListField) -> &Selection {
        &self.list(list).selection
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn medication_cursor(&self) -> Option<usize> {
        self.medication_cursor
    }

    /// Append a medication from the three entry inputs
    ///
    /// Nothing happens unless all three parts are filled in; the inputs are
    /// cleared after a successful append.
    pub fn add_medication(&mut self) -> bool {
        let Some(medication) = Medication::new(
            self.text(FieldId::MedName),
            self.text(FieldId::MedDosage),
            self.text(FieldId::MedFrequency),
        ) else {
            return false;
        };

        self.medications.push(medication);
        for field in [FieldId::MedName, FieldId::MedDosage, FieldId::MedFrequency] {
            self.set_text(field, "");
        }
        true
    }

    pub fn remove_medication(&mut self, index: usize) -> Option<Medication> {
        if index >= self.medications.len() {
            return None;
        }
        let removed = self.medications.remove(index);
        self.medication_cursor = match self.medication_cursor {
            _ if self.medications.is_empty() => None,
            Some(cursor) => Some(cursor.min(self.medications.len() - 1)),
            None => None,
        };
        Some(removed)
    }

    pub fn focus(&self) -> FieldId {
        self.focus
    }

    /// Move focus, closing the panel of a select being left
    pub fn set_focus(&mut self, field: FieldId) {
        if field == self.focus {
            return;
        }
        if let FieldKind::List(list) = self.focus.kind() {
            self.list_mut(list).select.dismiss();
        }
        if let FieldKind::List(list) = field.kind() {
            self.list_mut(list).select.focus();
        }
        if field == FieldId::Medications && self.medication_cursor.is_none() && !self.medications.is_empty() {
            self.medication_cursor = Some(0);
        }
        self.focus = field;
        self.scroll_to_focus = true;
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_prev(&mut self) {
        self.set_focus(self.focus.prev());
    }

    /// Option labels of a choice field and the index of the current one
    pub fn choice_options(&self, field: FieldId) -> (Vec<String>, usize) {
        match field {
            FieldId::Gender => (
                Gender::ALL.iter().map(ToString::to_string).collect(),
                Gender::ALL.iter().position(|g| *g == self.gender).unwrap_or(0),
            ),
            FieldId::MobilityLevel => (
                MobilityLevel::ALL.iter().map(ToString::to_string).collect(),
                MobilityLevel::ALL
                    .iter()
                    .position(|m| *m == self.mobility_level)
                    .unwrap_or(0),
            ),
            _ => (Vec::new(), 0),
        }
    }

    pub fn set_choice(&mut self, field: FieldId, index: usize) {
        match field {
            FieldId::Gender => {
                if let Some(gender) = Gender::ALL.get(index) {
                    self.gender = *gender;
                }
            }
            FieldId::MobilityLevel => {
                if let Some(level) = MobilityLevel::ALL.get(index) {
                    self.mobility_level = *level;
                }
            }
            _ => {}
        }
    }

    /// Step a choice field forward or backward, wrapping at either end
    pub fn cycle_choice(&mut self, field: FieldId, forward: bool) {
        let (options, current) = self.choice_options(field);
        if options.is_empty() {
            return;
        }
        let len = options.len();
        let next = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
        self.set_choice(field, next);
    }

    /// The list field whose suggestion panel is currently open
    pub fn open_list(&self) -> Option<ListField> {
        match self.focus.kind() {
            FieldKind::List(list) if self.list(list).select.is_open() => Some(list),
            _ => None,
        }
    }

    /// Validate every scalar field and assemble the record
    pub fn to_record(&self) -> Result<PatientRecord, FormError> {
        let name = validation::required(FieldId::Name, self.text(FieldId::Name))?;
        let age = validation::number_in_range(FieldId::Age, self.text(FieldId::Age), AGE_RANGE)?;
        let admission_date =
            validation::date(FieldId::AdmissionDate, self.text(FieldId::AdmissionDate))?;
        let facility = validation::required(FieldId::Facility, self.text(FieldId::Facility))?;
        let primary_diagnosis = validation::required(
            FieldId::PrimaryDiagnosis,
            self.text(FieldId::PrimaryDiagnosis),
        )?;
        let blood_pressure =
            validation::required(FieldId::BloodPressure, self.text(FieldId::BloodPressure))?;
        let heart_rate = validation::number_in_range(
            FieldId::HeartRate,
            self.text(FieldId::HeartRate),
            HEART_RATE_RANGE,
        )?;
        let temperature = validation::number_in_range(
            FieldId::Temperature,
            self.text(FieldId::Temperature),
            TEMPERATURE_RANGE,
        )?;
        let oxygen_saturation = validation::number_in_range(
            FieldId::OxygenSaturation,
            self.text(FieldId::OxygenSaturation),
            OXYGEN_RANGE,
        )?;
        let pain_level = validation::number_in_range(
            FieldId::PainLevel,
            self.text(FieldId::PainLevel),
            PAIN_RANGE,
        )?;
        let adl_independence = validation::required(
            FieldId::AdlIndependence,
            self.text(FieldId::AdlIndependence),
        )?;
        let cognitive_status = validation::required(
            FieldId::CognitiveStatus,
            self.text(FieldId::CognitiveStatus),
        )?;

        Ok(PatientRecord {
            name,
            age,
            gender: self.gender,
            admission_date,
            facility,
            primary_diagnosis,
            comorbidities: self.selection(ListField::Comorbidities).clone(),
            blood_pressure,
            heart_rate,
            temperature,
            oxygen_saturation,
            pain_level,
            current_medications: self.medications.clone(),
            allergies: self.selection(ListField::Allergies).clone(),
            symptoms: self.selection(ListField::Symptoms).clone(),
            mobility_level: self.mobility_level,
            adl_independence,
            fall_risk_factors: self.selection(ListField::FallRiskFactors).clone(),
            cognitive_status,
            isolation_precautions: validation::optional(self.text(FieldId::IsolationPrecautions)),
            diet_restrictions: validation::optional(self.text(FieldId::DietRestrictions)),
        })
    }
}

#[cfg(test)]
#[path = "form_state_tests.rs"]
mod form_state_tests;
