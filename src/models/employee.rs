use serde::{Deserialize, Serialize};

/// Unique, immutable identifier of an employee within one chart.
pub type EmployeeId = u64;

/// A node of the organization chart.
///
/// Employees form a single rooted tree through `subordinates`. Nodes carry no
/// back-reference to their supervisor; the supervisor of an employee is found
/// by searching from the root (see [`crate::chart::navigator`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub name: String,
    /// Direct reports, in display order.
    #[serde(default)]
    pub subordinates: Vec<Employee>,
}

impl Employee {
    /// Create an employee with no subordinates.
    pub fn new(id: EmployeeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            subordinates: Vec::new(),
        }
    }

    pub fn with_subordinates(mut self, subordinates: Vec<Employee>) -> Self {
        self.subordinates = subordinates;
        self
    }

    /// A fresh node with the same id and name and no subordinates.
    pub fn detached(&self) -> Self {
        Self::new(self.id, self.name.clone())
    }

    pub fn subordinate_ids(&self) -> Vec<EmployeeId> {
        self.subordinates.iter().map(|e| e.id).collect()
    }

    /// Whether `id` is a direct report of this employee.
    pub fn supervises(&self, id: EmployeeId) -> bool {
        self.subordinates.iter().any(|e| e.id == id)
    }

    /// Deep copy with every subordinate list ordered by id.
    ///
    /// Two charts with the same membership at every level compare equal after
    /// sorting, regardless of sibling order.
    pub fn sorted(&self) -> Self {
        let mut subordinates: Vec<Employee> =
            self.subordinates.iter().map(Employee::sorted).collect();
        subordinates.sort_by_key(|e| e.id);
        Self {
            id: self.id,
            name: self.name.clone(),
            subordinates,
        }
    }
}
