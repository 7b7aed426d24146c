//! Pure planner logic: calculation, edits, share links and commands

pub mod calculator;
pub mod command;
pub mod edit;
pub mod share;

pub use calculator::calculate_totals;
pub use command::{PlannerCommand, parse_command};
pub use edit::{FieldEdit, InputPolicy, apply_edit};
pub use share::{LoadReport, build_share_url, load_from_query, parse_base_url};
