//! In-memory organization chart with undoable employee moves.
//!
//! # Core Concepts
//!
//! - [`models::Employee`]: a node of the chart. The chart is a single rooted tree
//!   whose root is the CEO.
//! - [`chart::OrgChart`]: owns the tree and the undo/redo history.
//! - [`chart::MoveEmployeeCommand`]: one relocation, reversible.
//! - [`steps::Step`]: textual instructions applied by the `orgchart` binary.

pub mod chart;
pub mod error;
pub mod loader;
pub mod models;
pub mod steps;
