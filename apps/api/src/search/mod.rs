//! Job description search — filters the reference sheet by normalized query terms.
//!
//! Flow: JobQuery → Normalizer (position category, synonyms, stopwords) →
//!       case-insensitive substring filter on three columns → first 10 hits.
//!
//! An empty hit list is a normal outcome: the caller decides whether to fall
//! back to generation.

pub mod handlers;
pub mod reference;

use serde::Deserialize;

use crate::catalog::JobCatalog;
use crate::models::job::{JobField, JobRecord};
use crate::normalize::Normalizer;

/// Max descriptions returned for a database hit.
pub const MAX_RESULTS: usize = 10;

/// Request body shared by the search and generate endpoints.
/// Missing fields default to the empty string.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct JobQuery {
    pub position: String,
    pub industry: String,
    pub department: String,
}

/// Query terms after normalization, lowercased for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub position: String,
    pub industry: String,
    pub department: String,
}

impl NormalizedQuery {
    pub fn from_query(query: &JobQuery, normalizer: &Normalizer) -> Self {
        Self {
            position: normalizer.position_term(&query.position).to_lowercase(),
            industry: normalizer.normalize_industry(&query.industry).to_lowercase(),
            department: normalizer
                .normalize_department(&query.department)
                .to_lowercase(),
        }
    }

    fn matches(&self, record: &JobRecord) -> bool {
        field_contains(record, JobField::Position, &self.position)
            && field_contains(record, JobField::Industry, &self.industry)
            && field_contains(record, JobField::Department, &self.department)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// Number of matching rows in the whole table.
    pub total: usize,
    /// Descriptions of the first `MAX_RESULTS` matches, in table order.
    pub descriptions: Vec<String>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Returns the rows whose position, industry and department all contain the
/// corresponding normalized term.
pub fn search(catalog: &JobCatalog, normalizer: &Normalizer, query: &JobQuery) -> MatchResult {
    let terms = NormalizedQuery::from_query(query, normalizer);
    tracing::debug!(
        "Normalized query: position='{}' industry='{}' department='{}'",
        terms.position,
        terms.industry,
        terms.department
    );

    let mut total = 0;
    let mut descriptions = Vec::new();
    for record in catalog.records().iter().filter(|r| terms.matches(r)) {
        total += 1;
        if descriptions.len() < MAX_RESULTS {
            descriptions.push(record.description.clone());
        }
    }

    MatchResult {
        total,
        descriptions,
    }
}

/// Case-insensitive substring test. `term` must already be lowercased.
/// Blank cells are missing values and never match, not even an empty term.
pub(crate) fn field_contains(record: &JobRecord, field: JobField, term: &str) -> bool {
    let value = record.field(field);
    !value.is_empty() && value.to_lowercase().contains(term)
}
