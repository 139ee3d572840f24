//! Candidate lists offered by the searchable selects

pub const COMMON_COMORBIDITIES: &[&str] = &[
    "Alzheimer's Disease",
    "Anemia",
    "Anxiety Disorder",
    "Atrial Fibrillation",
    "Benign Prostatic Hyperplasia",
    "Chronic Kidney Disease",
    "Chronic Obstructive Pulmonary Disease (COPD)",
    "Congestive Heart Failure",
    "Coronary Artery Disease",
    "Deep Vein Thrombosis",
    "Dementia",
    "Depression",
    "Gastroesophageal Reflux Disease (GERD)",
    "Glaucoma",
    "Gout",
    "Hyperlipidemia",
    "Hypertension",
    "Hypothyroidism",
    "Macular Degeneration",
    "Obesity",
    "Osteoarthritis",
    "Osteoporosis",
    "Parkinson's Disease",
    "Peripheral Neuropathy",
    "Peripheral Vascular Disease",
    "Rheumatoid Arthritis",
    "Seizure Disorder",
    "Sleep Apnea",
    "Type 1 Diabetes",
    "Type 2 Diabetes",
    "Urinary Incontinence",
];

pub const COMMON_ALLERGIES: &[&str] = &[
    "ACE Inhibitors",
    "Aspirin",
    "Codeine",
    "Contrast Dye",
    "Eggs",
    "Iodine",
    "Latex",
    "Morphine",
    "NSAIDs",
    "Peanuts",
    "Penicillin",
    "Shellfish",
    "Sulfa Drugs",
    "Tetracycline",
    "Vancomycin",
];

pub const COMMON_SYMPTOMS: &[&str] = &[
    "Abdominal pain",
    "Agitation",
    "Anxiety",
    "Chest pain",
    "Confusion",
    "Constipation",
    "Cough",
    "Decreased appetite",
    "Diarrhea",
    "Difficulty swallowing",
    "Difficulty with speech",
    "Dizziness",
    "Edema",
    "Fatigue",
    "Fever",
    "Generalized weakness",
    "Headache",
    "Incontinence",
    "Insomnia",
    "Joint pain",
    "Left-sided weakness",
    "Memory loss",
    "Nausea",
    "Numbness",
    "Pain at surgical site",
    "Palpitations",
    "Pressure injury",
    "Restlessness",
    "Right-sided weakness",
    "Shortness of breath",
    "Tremor",
    "Unsteady gait",
    "Urinary frequency",
    "Vomiting",
    "Wheezing",
];

pub const COMMON_FALL_RISK_FACTORS: &[&str] = &[
    "Age over 65",
    "Assistive device use",
    "Cognitive impairment",
    "Confusion",
    "Dizziness",
    "Environmental hazards",
    "Foot problems",
    "Gait instability",
    "History of falls",
    "Impaired mobility",
    "Impaired vision",
    "Incontinence",
    "Muscle weakness",
    "Orthostatic hypotension",
    "Polypharmacy",
    "Psychotropic medications",
    "Sedative use",
    "Urinary urgency",
];

/// Convert a static list into owned candidates
pub fn candidates(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
