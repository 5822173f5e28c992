//! Job catalog — the reference sheet, loaded once at startup and read-only afterwards.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};
use tracing::info;

use crate::models::job::JobRecord;

pub const POSITION_COLUMN: &str = "ポジション";
pub const INDUSTRY_COLUMN: &str = "業界";
pub const DEPARTMENT_COLUMN: &str = "部門";
pub const DESCRIPTION_COLUMN: &str = "職務内容";

/// Immutable, ordered table of job records.
#[derive(Debug, Clone, Default)]
pub struct JobCatalog {
    records: Vec<JobRecord>,
}

impl JobCatalog {
    pub fn from_records(records: Vec<JobRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[JobRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Reads `sheet` from the workbook at `path` into a `JobCatalog`.
///
/// The first row is the header; columns are located by name. Fails if the
/// file, the sheet, or any of the four required columns is missing.
pub fn load_catalog(path: impl AsRef<Path>, sheet: &str) -> Result<JobCatalog> {
    let path = path.as_ref();
    info!("Loading job table from {} (sheet '{sheet}')...", path.display());

    let mut workbook = open_workbook_auto(path)
        .with_context(|| format!("Failed to open job table '{}'", path.display()))?;
    let range = workbook
        .worksheet_range(sheet)
        .with_context(|| format!("Failed to read sheet '{sheet}' from '{}'", path.display()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .with_context(|| format!("Sheet '{sheet}' has no header row"))?;

    let position = column_index(header, POSITION_COLUMN)?;
    let industry = column_index(header, INDUSTRY_COLUMN)?;
    let department = column_index(header, DEPARTMENT_COLUMN)?;
    let description = column_index(header, DESCRIPTION_COLUMN)?;

    let records: Vec<JobRecord> = rows
        .map(|row| JobRecord {
            position: cell_text(row.get(position)),
            industry: cell_text(row.get(industry)),
            department: cell_text(row.get(department)),
            description: cell_text(row.get(description)),
        })
        .filter(|r| {
            !(r.position.is_empty()
                && r.industry.is_empty()
                && r.department.is_empty()
                && r.description.is_empty())
        })
        .collect();

    info!("Job table loaded: {} records", records.len());
    Ok(JobCatalog::from_records(records))
}

fn column_index(header: &[Data], name: &str) -> Result<usize> {
    header
        .iter()
        .position(|cell| matches!(cell, Data::String(s) if s.trim() == name))
        .with_context(|| format!("Job table is missing required column '{name}'"))
}

/// Display text of a cell; blank and error cells become the empty string.
fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) | Some(Data::Error(_)) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
