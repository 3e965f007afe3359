//! Domain models for the organization chart.
//!
//! - [`Employee`]: a node of the chart; the root is the CEO.
//! - [`sample_chart`]: a small reference chart used by the CLI and tests.

mod employee;
mod sample;

pub use employee::*;
pub use sample::*;
