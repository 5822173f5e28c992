//! Query normalization — maps free-text industry / department / position input
//! onto the vocabulary used by the reference sheet.

pub mod dictionaries;
pub mod position;

use std::collections::HashMap;

use dictionaries::{DEPARTMENT_SYNONYMS, INDUSTRY_SYNONYMS, STOPWORDS};
pub use position::classify_position;

/// Immutable synonym tables, built once at startup and shared via `AppState`.
#[derive(Debug, Clone)]
pub struct Normalizer {
    industry: HashMap<&'static str, &'static str>,
    department: HashMap<&'static str, &'static str>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            industry: INDUSTRY_SYNONYMS.iter().copied().collect(),
            department: DEPARTMENT_SYNONYMS.iter().copied().collect(),
        }
    }

    pub fn normalize_industry(&self, value: &str) -> String {
        normalize_with(&self.industry, value)
    }

    pub fn normalize_department(&self, value: &str) -> String {
        normalize_with(&self.department, value)
    }

    /// Search term for the position column: the category label when the
    /// input classifies, otherwise the input itself (only ever empty).
    pub fn position_term(&self, position: &str) -> String {
        match classify_position(position) {
            Some(category) => category.sheet_label().to_string(),
            None => position.to_string(),
        }
    }
}

/// Exact synonym lookup on the trimmed value, falling back to keyword extraction.
fn normalize_with(table: &HashMap<&'static str, &'static str>, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    match table.get(value.trim()) {
        Some(canonical) => (*canonical).to_string(),
        None => extract_keywords(value),
    }
}

/// Strips filler words and particles, returning the trimmed remainder.
pub fn extract_keywords(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut keywords = text.trim().to_string();
    for word in STOPWORDS {
        keywords = keywords.replace(*word, "");
    }

    keywords.trim().to_string()
}
