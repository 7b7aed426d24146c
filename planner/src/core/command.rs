//! Interactive command parsing

use shared::InputField;

use super::edit::FieldEdit;
use crate::error::{PlannerError, PlannerResult};

/// One user action in the interactive session
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerCommand {
    /// Edit a single field
    Set(FieldEdit),
    /// Recompute totals from the current inputs
    Calculate,
    /// Print the current inputs and last results
    Show,
    /// Print the share link
    Share,
    /// Copy the share link to the clipboard
    Copy,
    /// Apply a query string or share link
    Load(String),
    /// Restore default inputs
    Reset,
    Help,
    Quit,
    /// Blank line
    Empty,
}

pub const HELP_TEXT: &str = "\
Commands:
  set <field> <value>   edit a field (team, players, iceCost, hours, coaches)
  calc                  calculate totals
  show                  show inputs and last results
  share                 print the share link
  copy                  copy the share link to the clipboard
  load <query|url>      apply share-link parameters
  reset                 restore defaults
  help                  show this message
  quit                  leave the planner";

/// Parse one input line into a command
pub fn parse_command(line: &str) -> PlannerResult<PlannerCommand> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(PlannerCommand::Empty);
    }

    let (verb, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (trimmed, ""),
    };

    let unknown = || PlannerError::UnknownCommand {
        input: trimmed.to_string(),
    };

    match verb.to_lowercase().as_str() {
        "set" => {
            let (name, value) = rest
                .split_once(char::is_whitespace)
                .map(|(name, value)| (name, value.trim()))
                .unwrap_or((rest, ""));
            if name.is_empty() {
                return Err(unknown());
            }
            let field: InputField = name.parse()?;
            Ok(PlannerCommand::Set(FieldEdit::new(field, value)))
        }
        "calc" | "calculate" => Ok(PlannerCommand::Calculate),
        "show" => Ok(PlannerCommand::Show),
        "share" => Ok(PlannerCommand::Share),
        "copy" => Ok(PlannerCommand::Copy),
        "load" if !rest.is_empty() => Ok(PlannerCommand::Load(rest.to_string())),
        "reset" => Ok(PlannerCommand::Reset),
        "help" | "?" => Ok(PlannerCommand::Help),
        "quit" | "exit" | "q" => Ok(PlannerCommand::Quit),
        _ => Err(unknown()),
    }
}
