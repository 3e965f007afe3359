//! Textual steps applied to a chart by the `orgchart` binary.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::chart::OrgChart;
use crate::error::ChartError;
use crate::models::EmployeeId;

/// One instruction: `move:<employee>:<supervisor>`, `undo` or `redo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Move {
        employee_id: EmployeeId,
        supervisor_id: EmployeeId,
    },
    Undo,
    Redo,
}

impl Step {
    pub fn apply(&self, chart: &mut OrgChart) {
        debug!(step = %self, "Applying step");
        match *self {
            Self::Move {
                employee_id,
                supervisor_id,
            } => chart.move_employee(employee_id, supervisor_id),
            Self::Undo => chart.undo(),
            Self::Redo => chart.redo(),
        }
    }
}

impl FromStr for Step {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChartError::InvalidStep(s.to_string());

        match s.trim() {
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            other => {
                let rest = other.strip_prefix("move:").ok_or_else(invalid)?;
                let (employee, supervisor) = rest.split_once(':').ok_or_else(invalid)?;
                Ok(Self::Move {
                    employee_id: employee.parse().map_err(|_| invalid())?,
                    supervisor_id: supervisor.parse().map_err(|_| invalid())?,
                })
            }
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Move {
                employee_id,
                supervisor_id,
            } => write!(f, "move:{}:{}", employee_id, supervisor_id),
            Self::Undo => f.write_str("undo"),
            Self::Redo => f.write_str("redo"),
        }
    }
}
