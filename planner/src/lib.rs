//! Ice-time team budget planner
//!
//! Collects a handful of team inputs (players, ice cost per hour, hours,
//! coaches), computes the season budget breakdown and encodes the inputs as
//! a shareable link. The results view is a plain formatter over the computed
//! totals.

pub mod config;
pub mod core;
pub mod error;
pub mod planner_impl;
pub mod results;
pub mod services;
pub mod session;
pub mod traits;

// Re-export main types
pub use config::{ConfigOverrides, PlannerConfig, RecomputePolicy};
pub use error::{PlannerError, PlannerResult};
pub use planner_impl::Planner;
pub use results::ResultsView;
pub use session::{Flow, Session};

// Re-export trait definitions and their mocks
pub use traits::{Clipboard, MockClipboard, MockNotifier, Notice, Notifier};

// Re-export service implementations
pub use services::{CommandClipboard, ConsoleNotifier};
