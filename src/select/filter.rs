//! Candidate filtering and the derived suggestion panel view

/// Maximum number of candidate rows shown at once
pub const MAX_VISIBLE_SUGGESTIONS: usize = 20;

/// One row of the suggestion panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelRow<'a> {
    Candidate {
        text: &'a str,
        already_selected: bool,
    },
    /// Offer to add the raw query when nothing matches
    Custom(&'a str),
}

impl PanelRow<'_> {
    /// Whether choosing this row can produce an add
    pub fn is_activatable(&self) -> bool {
        match self {
            PanelRow::Candidate {
                already_selected, ..
            } => !already_selected,
            PanelRow::Custom(_) => true,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            PanelRow::Candidate { text, .. } => text,
            PanelRow::Custom(query) => query,
        }
    }
}

/// What the suggestion panel shows for a query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionView<'a> {
    pub rows: Vec<PanelRow<'a>>,
    /// Matches beyond the display cap
    pub remaining: usize,
}

impl SuggestionView<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn is_custom_entry(&self) -> bool {
        matches!(self.rows.first(), Some(PanelRow::Custom(_)))
    }

    /// Index of the first activatable row after `from`, wrapping around
    pub fn next_activatable(&self, from: Option<usize>) -> Option<usize> {
        let len = self.rows.len();
        let start = from.map(|i| i + 1).unwrap_or(0);
        (0..len)
            .map(|offset| (start + offset) % len)
            .find(|&i| self.rows[i].is_activatable())
    }

    /// Index of the first activatable row before `from`, wrapping around
    pub fn prev_activatable(&self, from: Option<usize>) -> Option<usize> {
        let len = self.rows.len();
        let start = from.unwrap_or(0) + len;
        (1..=len)
            .map(|offset| (start - offset) % len)
            .find(|&i| self.rows[i].is_activatable())
    }
}

/// Case-insensitive substring filter over `candidates`
///
/// A blank query matches everything. Repeated candidates appear once, at
/// their first position.
pub fn filter_candidates<'a>(candidates: &'a [String], query: &str) -> Vec<&'a str> {
    let query_lower = query.to_lowercase();
    let match_all = query.trim().is_empty();

    let mut matches: Vec<&'a str> = Vec::new();
    for candidate in candidates {
        if matches.contains(&candidate.as_str()) {
            continue;
        }
        if match_all || candidate.to_lowercase().contains(&query_lower) {
            matches.push(candidate);
        }
    }
    matches
}

/// Build the panel for `query`, marking candidates already in `selected`
pub fn suggestion_view<'a>(
    candidates: &'a [String],
    selected: &[String],
    query: &'a str,
) -> SuggestionView<'a> {
    let matches = filter_candidates(candidates, query);

    if matches.is_empty() {
        let rows = if query.is_empty() {
            Vec::new()
        } else {
            vec![PanelRow::Custom(query)]
        };
        return SuggestionView { rows, remaining: 0 };
    }

    let remaining = matches.len().saturating_sub(MAX_VISIBLE_SUGGESTIONS);
    let rows = matches
        .into_iter()
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|text| PanelRow::Candidate {
            text,
            already_selected: selected.iter().any(|s| s == text),
        })
        .collect();

    SuggestionView { rows, remaining }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
