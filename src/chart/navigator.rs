//! Read-only searches over an employee tree.
//!
//! All searches are depth-first pre-order: a node is checked before its
//! subordinates, and subordinates are visited left to right. Ids are assumed
//! unique; with duplicates the first match in that order wins.

use std::collections::HashSet;

use crate::models::{Employee, EmployeeId};

/// Find the employee with `id` in the subtree rooted at `root`.
pub fn find_by_id(root: &Employee, id: EmployeeId) -> Option<&Employee> {
    if root.id == id {
        return Some(root);
    }
    root.subordinates.iter().find_map(|e| find_by_id(e, id))
}

/// Mutable counterpart of [`find_by_id`].
pub fn find_by_id_mut(root: &mut Employee, id: EmployeeId) -> Option<&mut Employee> {
    if root.id == id {
        return Some(root);
    }
    root.subordinates
        .iter_mut()
        .find_map(|e| find_by_id_mut(e, id))
}

/// Find the direct supervisor of `target_id`.
///
/// Returns `None` when `target_id` is the root itself or is not in the tree.
pub fn find_parent_of(root: &Employee, target_id: EmployeeId) -> Option<&Employee> {
    if root.supervises(target_id) {
        return Some(root);
    }
    root.subordinates
        .iter()
        .find_map(|e| find_parent_of(e, target_id))
}

/// All ids in pre-order.
pub fn employee_ids(root: &Employee) -> Vec<EmployeeId> {
    fn collect(node: &Employee, ids: &mut Vec<EmployeeId>) {
        ids.push(node.id);
        for subordinate in &node.subordinates {
            collect(subordinate, ids);
        }
    }

    let mut ids = Vec::new();
    collect(root, &mut ids);
    ids
}

/// The first id that appears twice in pre-order, if any.
pub fn find_duplicate_id(root: &Employee) -> Option<EmployeeId> {
    let mut seen = HashSet::new();
    employee_ids(root).into_iter().find(|id| !seen.insert(*id))
}
