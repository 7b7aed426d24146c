//! Shared types for the ice planner
//!
//! Holds the budget data model exchanged between the planner and the
//! results display, the common error type and logging setup.

pub mod types;
pub mod errors;
pub mod logging;

pub use types::*;
pub use errors::*;
