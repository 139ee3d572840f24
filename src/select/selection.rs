use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free list of confirmed values for one field
///
/// Values are stored trimmed and never empty. Equality is exact and
/// case-sensitive, so "Fatigue" and "fatigue" are distinct entries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection {
    values: Vec<String>,
}

/// Return the value to add, or `None` when the add must be a no-op
///
/// The value is trimmed; blank values and values already in `selected`
/// are rejected.
pub fn accept_entry(value: &str, selected: &[String]) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || selected.iter().any(|v| v == trimmed) {
        return None;
    }
    Some(trimmed.to_string())
}

impl Selection {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    /// Append `value` if it passes [`accept_entry`]; returns whether it was added
    pub fn add(&mut self, value: &str) -> bool {
        match accept_entry(value, &self.values) {
            Some(entry) => {
                self.values.push(entry);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.values.len() {
            Some(self.values.remove(index))
        } else {
            None
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        let mut selection = Selection::new();
        for value in &values {
            selection.add(value);
        }
        selection
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.values
    }
}

impl<'a> FromIterator<&'a str> for Selection {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for value in iter {
            selection.add(value);
        }
        selection
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod selection_tests;
