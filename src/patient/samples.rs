//! Built-in sample patients for quick loading into the form

use chrono::NaiveDate;

use super::{Gender, Medication, MobilityLevel, PatientRecord};
use crate::select::Selection;

fn med(name: &str, dosage: &str, frequency: &str) -> Medication {
    Medication {
        name: name.to_string(),
        dosage: dosage.to_string(),
        frequency: frequency.to_string(),
    }
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn sample_patients() -> Vec<PatientRecord> {
    vec![
        PatientRecord {
            name: "John Doe".to_string(),
            age: 78,
            gender: Gender::Male,
            admission_date: date(2024, 1, 15),
            facility: "Sunrise Senior Living".to_string(),
            primary_diagnosis: "Stroke (CVA) with right-sided weakness".to_string(),
            comorbidities: Selection::from_iter(["Type 2 Diabetes", "Hypertension", "Hyperlipidemia"]),
            blood_pressure: "145/88".to_string(),
            heart_rate: 78,
            temperature: 98.6,
            oxygen_saturation: 96,
            pain_level: 3,
            current_medications: vec![
                med("Metformin", "500mg", "BID"),
                med("Lisinopril", "10mg", "QD"),
                med("Aspirin", "81mg", "QD"),
            ],
            allergies: Selection::from_iter(["Penicillin"]),
            symptoms: Selection::from_iter([
                "Right-sided weakness",
                "Difficulty with speech",
                "Confusion",
            ]),
            mobility_level: MobilityLevel::Wheelchair,
            adl_independence: "Requires assistance with all ADLs".to_string(),
            fall_risk_factors: Selection::from_iter([
                "History of falls",
                "Impaired mobility",
                "Confusion",
            ]),
            cognitive_status: "Alert but confused, follows simple commands".to_string(),
            isolation_precautions: None,
            diet_restrictions: Some("Diabetic diet, thickened liquids".to_string()),
        },
        PatientRecord {
            name: "Margaret Chen".to_string(),
            age: 84,
            gender: Gender::Female,
            admission_date: date(2024, 2, 3),
            facility: "Maple Grove Skilled Nursing".to_string(),
            primary_diagnosis: "Congestive Heart Failure exacerbation".to_string(),
            comorbidities: Selection::from_iter([
                "Atrial Fibrillation",
                "Chronic Kidney Disease",
                "Osteoarthritis",
            ]),
            blood_pressure: "132/76".to_string(),
            heart_rate: 92,
            temperature: 98.2,
            oxygen_saturation: 91,
            pain_level: 2,
            current_medications: vec![
                med("Furosemide", "40mg", "BID"),
                med("Metoprolol", "25mg", "BID"),
                med("Apixaban", "2.5mg", "BID"),
            ],
            allergies: Selection::from_iter(["Sulfa Drugs", "Latex"]),
            symptoms: Selection::from_iter(["Shortness of breath", "Edema", "Fatigue"]),
            mobility_level: MobilityLevel::Walker,
            adl_independence: "Independent with setup, needs help bathing".to_string(),
            fall_risk_factors: Selection::from_iter([
                "Assistive device use",
                "Orthostatic hypotension",
                "Polypharmacy",
            ]),
            cognitive_status: "Alert and oriented x3".to_string(),
            isolation_precautions: None,
            diet_restrictions: Some("2g sodium, 1.5L fluid restriction".to_string()),
        },
        PatientRecord {
            name: "Robert Alvarez".to_string(),
            age: 71,
            gender: Gender::Male,
            admission_date: date(2024, 3, 11),
            facility: "Lakeside Rehabilitation Center".to_string(),
            primary_diagnosis: "Right hip fracture, status post ORIF".to_string(),
            comorbidities: Selection::from_iter([
                "Chronic Obstructive Pulmonary Disease (COPD)",
                "Osteoporosis",
            ]),
            blood_pressure: "128/80".to_string(),
            heart_rate: 84,
            temperature: 99.1,
            oxygen_saturation: 93,
            pain_level: 6,
            current_medications: vec![
                med("Oxycodone", "5mg", "Q6H PRN"),
                med("Enoxaparin", "40mg", "QD"),
                med("Tiotropium", "18mcg", "QD"),
            ],
            allergies: Selection::new(),
            symptoms: Selection::from_iter(["Pain at surgical site", "Cough", "Constipation"]),
            mobility_level: MobilityLevel::Bedbound,
            adl_independence: "Dependent for transfers and toileting".to_string(),
            fall_risk_factors: Selection::from_iter(["Impaired mobility", "Sedative use"]),
            cognitive_status: "Alert, intermittently drowsy after opioids".to_string(),
            isolation_precautions: Some("Contact precautions (MRSA history)".to_string()),
            diet_restrictions: None,
        },
    ]
}
