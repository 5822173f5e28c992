//! Position classifier — folds free-text job titles into management / staff.

use serde::{Deserialize, Serialize};

use super::dictionaries::{MANAGEMENT_KEYWORDS, STAFF_KEYWORDS};
use super::extract_keywords;

/// Coarse position category used to filter the sheet's position column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionCategory {
    Management,
    Staff,
}

impl PositionCategory {
    /// The label the reference sheet stores in its position column.
    pub fn sheet_label(&self) -> &'static str {
        match self {
            PositionCategory::Management => "管理職",
            PositionCategory::Staff => "スタッフ",
        }
    }
}

/// Infers the category of a free-text position.
///
/// Returns `None` only for empty input. Keywords are compared in both
/// directions (keyword inside the input, or input inside the keyword),
/// management first. Anything that matches neither list is `Staff`.
pub fn classify_position(position: &str) -> Option<PositionCategory> {
    if position.is_empty() {
        return None;
    }

    let extracted = extract_keywords(position);
    let probe = if extracted.is_empty() {
        position.to_lowercase()
    } else {
        extracted.to_lowercase()
    };

    if matches_any(&probe, MANAGEMENT_KEYWORDS) {
        return Some(PositionCategory::Management);
    }
    if matches_any(&probe, STAFF_KEYWORDS) {
        return Some(PositionCategory::Staff);
    }

    Some(PositionCategory::Staff)
}

fn matches_any(probe: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| {
        let keyword = keyword.to_lowercase();
        probe.contains(&keyword) || keyword.contains(probe)
    })
}
