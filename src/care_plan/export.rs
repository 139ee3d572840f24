//! Standalone printable copy of a care plan

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::error::CarePlanError;
use crate::patient::CarePlan;

const PRINT_STYLE: &str = "\
body { font-family: Georgia, serif; max-width: 50rem; margin: 2rem auto; color: #111; }
header { border-bottom: 2px solid #dbeafe; margin-bottom: 1.5rem; }
h1, h2, h3 { color: #1e3a8a; }
@media print { body { margin: 0; } }";

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Lowercase ASCII slug of a patient name, for file names
pub fn slug(name: &str) -> String {
    let mut slug = String::new();
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let trimmed = slug.trim_end_matches('-');
    if trimmed.is_empty() {
        "patient".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Wrap the plan's HTML in a complete document
pub fn printable_document(plan: &CarePlan, generated_display: &str) -> String {
    let name = escape_html(&plan.patient_name);
    format!(
        "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>Care Plan - {name}</title>
<style>
{style}
</style>
</head>
<body>
<header>
<h1>Care Plan</h1>
<p>Patient: <strong>{name}</strong></p>
<p>Generated: {generated}</p>
</header>
<main>
{body}
</main>
</body>
</html>
",
        name = name,
        style = PRINT_STYLE,
        generated = escape_html(generated_display),
        body = plan.care_plan_html,
    )
}

/// Write the printable document into `dir`, returning the file path
pub fn save_printable(
    plan: &CarePlan,
    generated_display: &str,
    dir: &Path,
    now: NaiveDateTime,
) -> Result<PathBuf, CarePlanError> {
    fs::create_dir_all(dir)?;
    let file_name = format!(
        "care-plan-{}-{}.html",
        slug(&plan.patient_name),
        now.format("%Y%m%d-%H%M%S")
    );
    let path = dir.join(file_name);
    fs::write(&path, printable_document(plan, generated_display))?;
    log::info!("Saved printable care plan to {}", path.display());
    Ok(path)
}
