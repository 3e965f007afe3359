//! The organization chart and its move history.

mod command;
pub mod navigator;

pub use command::{MoveEmployeeCommand, MoveRecord};

use tracing::{debug, warn};

use crate::error::MoveError;
use crate::models::{Employee, EmployeeId};

/// Owns the chart rooted at the CEO and the undo/redo history of moves.
///
/// `command_stack` holds executed moves eligible for undo, most recent last.
/// `redo_stack` holds undone moves eligible for redo and is cleared by every
/// new successful move.
#[derive(Debug, Clone)]
pub struct OrgChart {
    ceo: Employee,
    command_stack: Vec<MoveEmployeeCommand>,
    redo_stack: Vec<MoveEmployeeCommand>,
}

impl OrgChart {
    pub fn new(ceo: Employee) -> Self {
        Self {
            ceo,
            command_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    /// The current root of the chart.
    pub fn ceo(&self) -> &Employee {
        &self.ceo
    }

    pub fn into_ceo(self) -> Employee {
        self.ceo
    }

    /// Move an employee under a new supervisor.
    ///
    /// Invalid moves leave the chart unchanged and are only logged; use
    /// [`OrgChart::try_move_employee`] to observe the reason.
    pub fn move_employee(&mut self, employee_id: EmployeeId, supervisor_id: EmployeeId) {
        if let Err(e) = self.try_move_employee(employee_id, supervisor_id) {
            warn!(employee_id, supervisor_id, error = %e, "Move rejected");
        }
    }

    /// Like [`OrgChart::move_employee`], but reports why a move was rejected.
    /// Rejected moves are not recorded in the history.
    pub fn try_move_employee(
        &mut self,
        employee_id: EmployeeId,
        supervisor_id: EmployeeId,
    ) -> Result<(), MoveError> {
        let mut command = MoveEmployeeCommand::new(employee_id, supervisor_id);
        command.execute(&mut self.ceo)?;

        self.command_stack.push(command);
        self.redo_stack.clear();
        Ok(())
    }

    /// Revert the most recent move. Does nothing when there is none.
    pub fn undo(&mut self) {
        let Some(command) = self.command_stack.pop() else {
            debug!("Nothing to undo");
            return;
        };

        command.undo(&mut self.ceo);
        self.redo_stack.push(command);
    }

    /// Re-apply the most recently undone move. Does nothing when there is none.
    pub fn redo(&mut self) {
        let Some(mut command) = self.redo_stack.pop() else {
            debug!("Nothing to redo");
            return;
        };

        if let Err(e) = command.execute(&mut self.ceo).map(|_| ()) {
            warn!(
                employee_id = command.employee_id(),
                supervisor_id = command.new_supervisor_id(),
                error = %e,
                "Redo failed; dropping move from history"
            );
            return;
        }

        self.command_stack.push(command);
    }

    pub fn can_undo(&self) -> bool {
        !self.command_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.command_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// What the move on top of the undo stack did.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.command_stack.last().and_then(|c| c.record())
    }
}
