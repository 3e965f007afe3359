use tracing::{debug, warn};

use super::navigator;
use crate::error::MoveError;
use crate::models::{Employee, EmployeeId};

/// What a successful move did to the tree, kept so it can be reversed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    /// The moved employee, without subordinates.
    pub moved: Employee,
    pub old_supervisor_id: EmployeeId,
    pub new_supervisor_id: EmployeeId,
    /// The moved employee's former subordinates, as they were when promoted
    /// to the old supervisor.
    pub promoted: Vec<Employee>,
}

impl MoveRecord {
    pub fn promoted_ids(&self) -> Vec<EmployeeId> {
        self.promoted.iter().map(|e| e.id).collect()
    }
}

/// Relocates one employee under a new supervisor.
///
/// The employee moves alone: its former subordinates are promoted to report
/// directly to its old supervisor, and a copy of the employee with no
/// subordinates is appended to the new supervisor.
///
/// Moves to the current supervisor or to a descendant are not rejected; the
/// steps above run as-is.
#[derive(Debug, Clone)]
pub struct MoveEmployeeCommand {
    employee_id: EmployeeId,
    new_supervisor_id: EmployeeId,
    record: Option<MoveRecord>,
}

impl MoveEmployeeCommand {
    pub fn new(employee_id: EmployeeId, new_supervisor_id: EmployeeId) -> Self {
        Self {
            employee_id,
            new_supervisor_id,
            record: None,
        }
    }

    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    pub fn new_supervisor_id(&self) -> EmployeeId {
        self.new_supervisor_id
    }

    /// The record of the last successful execution.
    pub fn record(&self) -> Option<&MoveRecord> {
        self.record.as_ref()
    }

    /// Apply the move to `root`.
    ///
    /// Every lookup happens before the first mutation, so on error the tree is
    /// untouched. Running it again (redo) re-resolves everything against the
    /// current tree and replaces the record.
    pub fn execute(&mut self, root: &mut Employee) -> Result<&MoveRecord, MoveError> {
        let employee_id = self.employee_id;
        let new_supervisor_id = self.new_supervisor_id;

        let moved = navigator::find_by_id(root, employee_id)
            .ok_or(MoveError::EmployeeNotFound(employee_id))?
            .detached();
        let old_supervisor_id = navigator::find_parent_of(root, employee_id)
            .ok_or(MoveError::CannotMoveRoot(employee_id))?
            .id;
        if navigator::find_by_id(root, new_supervisor_id).is_none() {
            return Err(MoveError::SupervisorNotFound(new_supervisor_id));
        }

        let old_supervisor = navigator::find_by_id_mut(root, old_supervisor_id)
            .ok_or(MoveError::CannotMoveRoot(employee_id))?;
        let position = old_supervisor
            .subordinates
            .iter()
            .position(|e| e.id == employee_id)
            .ok_or(MoveError::EmployeeNotFound(employee_id))?;

        let mut removed = old_supervisor.subordinates.remove(position);
        let promoted = std::mem::take(&mut removed.subordinates);
        old_supervisor.subordinates.extend(promoted.iter().cloned());

        // Resolved after promotion: a former subordinate is now under the old
        // supervisor and can receive the employee.
        match navigator::find_by_id_mut(root, new_supervisor_id) {
            Some(new_supervisor) => new_supervisor.subordinates.push(moved.clone()),
            None => warn!(
                employee_id,
                "Employee moved under itself; it leaves the chart until undone"
            ),
        }

        debug!(
            employee_id,
            old_supervisor_id,
            new_supervisor_id,
            promoted = promoted.len(),
            "Moved employee"
        );

        Ok(&*self.record.insert(MoveRecord {
            moved,
            old_supervisor_id,
            new_supervisor_id,
            promoted,
        }))
    }

    /// Reverse the last execution.
    ///
    /// The employee is appended back to its old supervisor with its former
    /// subordinates, so sibling order may differ from before the move. A
    /// command that never executed successfully does nothing.
    pub fn undo(&self, root: &mut Employee) {
        let Some(record) = &self.record else {
            return;
        };

        if let Some(new_supervisor) = navigator::find_by_id_mut(root, record.new_supervisor_id) {
            new_supervisor
                .subordinates
                .retain(|e| e.id != record.moved.id);
        }

        let Some(old_supervisor) = navigator::find_by_id_mut(root, record.old_supervisor_id)
        else {
            warn!(
                employee_id = record.moved.id,
                old_supervisor_id = record.old_supervisor_id,
                "Old supervisor missing; cannot restore employee"
            );
            return;
        };

        let promoted_ids = record.promoted_ids();
        old_supervisor
            .subordinates
            .retain(|e| !promoted_ids.contains(&e.id));
        old_supervisor.subordinates.push(
            record
                .moved
                .clone()
                .with_subordinates(record.promoted.clone()),
        );

        debug!(
            employee_id = record.moved.id,
            old_supervisor_id = record.old_supervisor_id,
            "Reverted employee move"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample_chart;

    fn subordinates_of(root: &Employee, id: EmployeeId) -> Vec<EmployeeId> {
        navigator::find_by_id(root, id).unwrap().subordinate_ids()
    }

    #[test]
    fn test_execute_moves_employee_alone() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(5, 12);

        let record = command.execute(&mut chart).unwrap().clone();

        assert_eq!(subordinates_of(&chart, 12), vec![13, 5]);
        assert_eq!(subordinates_of(&chart, 3), vec![4, 6]);
        assert!(subordinates_of(&chart, 5).is_empty());
        assert_eq!(subordinates_of(&chart, 6), vec![7]);

        assert_eq!(record.moved, Employee::new(5, "Bob Saget"));
        assert_eq!(record.old_supervisor_id, 3);
        assert_eq!(record.new_supervisor_id, 12);
        assert_eq!(record.promoted_ids(), vec![6]);
    }

    #[test]
    fn test_execute_direct_report_of_root() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(12, 11);

        command.execute(&mut chart).unwrap();

        assert_eq!(subordinates_of(&chart, 1), vec![2, 10, 11, 13]);
        assert_eq!(subordinates_of(&chart, 11), vec![12]);
    }

    #[test]
    fn test_missing_employee_leaves_tree_untouched() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(999, 6);

        let err = command.execute(&mut chart).unwrap_err();

        assert_eq!(err, MoveError::EmployeeNotFound(999));
        assert_eq!(chart, sample_chart());
        assert!(command.record().is_none());
    }

    #[test]
    fn test_missing_supervisor_leaves_tree_untouched() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(3, 999);

        let err = command.execute(&mut chart).unwrap_err();

        assert_eq!(err, MoveError::SupervisorNotFound(999));
        assert_eq!(chart, sample_chart());
    }

    #[test]
    fn test_root_cannot_move() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(1, 3);

        let err = command.execute(&mut chart).unwrap_err();

        assert_eq!(err, MoveError::CannotMoveRoot(1));
        assert_eq!(chart, sample_chart());
    }

    #[test]
    fn test_root_check_precedes_supervisor_check() {
        let mut chart = sample_chart();
        let err = MoveEmployeeCommand::new(1, 999)
            .execute(&mut chart)
            .unwrap_err();
        assert_eq!(err, MoveError::CannotMoveRoot(1));
    }

    #[test]
    fn test_undo_restores_membership() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(5, 12);
        command.execute(&mut chart).unwrap();

        command.undo(&mut chart);

        assert_eq!(chart.sorted(), sample_chart().sorted());
        assert_eq!(subordinates_of(&chart, 3), vec![4, 5]);
        assert_eq!(subordinates_of(&chart, 5), vec![6]);
    }

    #[test]
    fn test_undo_appends_instead_of_restoring_position() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(2, 12);
        command.execute(&mut chart).unwrap();

        command.undo(&mut chart);

        assert_eq!(subordinates_of(&chart, 1), vec![10, 11, 12, 2]);
        assert_eq!(chart.sorted(), sample_chart().sorted());
    }

    #[test]
    fn test_undo_without_execute_is_noop() {
        let mut chart = sample_chart();
        MoveEmployeeCommand::new(5, 12).undo(&mut chart);
        assert_eq!(chart, sample_chart());
    }

    #[test]
    fn test_move_under_itself_and_back() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(5, 5);

        command.execute(&mut chart).unwrap();

        assert!(navigator::find_by_id(&chart, 5).is_none());
        assert_eq!(subordinates_of(&chart, 3), vec![4, 6]);

        command.undo(&mut chart);

        assert_eq!(chart.sorted(), sample_chart().sorted());
    }

    #[test]
    fn test_execute_again_replaces_record() {
        let mut chart = sample_chart();
        let mut command = MoveEmployeeCommand::new(13, 11);
        command.execute(&mut chart).unwrap();
        command.undo(&mut chart);

        let record = command.execute(&mut chart).unwrap();

        assert_eq!(record.old_supervisor_id, 12);
        assert_eq!(subordinates_of(&chart, 11), vec![13]);
        assert!(subordinates_of(&chart, 12).is_empty());
    }
}
