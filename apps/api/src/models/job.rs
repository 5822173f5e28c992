use serde::{Deserialize, Serialize};

/// One row of the job-description reference sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRecord {
    pub position: String,
    pub industry: String,
    pub department: String,
    pub description: String,
}

/// The three columns a query can filter on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobField {
    Position,
    Industry,
    Department,
}

impl JobRecord {
    pub fn field(&self, field: JobField) -> &str {
        match field {
            JobField::Position => &self.position,
            JobField::Industry => &self.industry,
            JobField::Department => &self.department,
        }
    }
}
