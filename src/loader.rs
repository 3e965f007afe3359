//! Loading an initial chart from JSON.
//!
//! ```json
//! {"id": 1, "name": "CEO", "subordinates": [{"id": 2, "name": "CTO"}]}
//! ```
//!
//! `subordinates` may be omitted for leaf employees.

use std::fs;
use std::path::Path;

use crate::chart::navigator;
use crate::error::ChartError;
use crate::models::Employee;

/// Parse a chart and check that every id is unique.
pub fn parse_chart(json: &str) -> Result<Employee, ChartError> {
    let ceo: Employee = serde_json::from_str(json)?;

    if let Some(id) = navigator::find_duplicate_id(&ceo) {
        return Err(ChartError::DuplicateId(id));
    }

    Ok(ceo)
}

/// Read and parse a chart file.
pub fn load_chart(path: &Path) -> Result<Employee, ChartError> {
    let content = fs::read_to_string(path).map_err(|source| ChartError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_chart(&content)
}
