//! Interactive planner session
//!
//! Reads one command per line, applies it to the planner and writes the
//! response. This plays the part of the host page: every line is one UI
//! event handled synchronously, except clipboard copies which run as
//! independent tasks and report through the notifier when they finish.

use std::io::Write;

use shared::logging::ComponentId;
use shared::{BudgetInputs, planner_debug, planner_warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::task::JoinHandle;
use url::Url;

use crate::core::command::{HELP_TEXT, PlannerCommand, parse_command};
use crate::error::PlannerResult;
use crate::planner_impl::Planner;
use crate::traits::{Clipboard, Notifier};

/// Whether the session keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Line-driven front end around a planner
pub struct Session<C, N>
where
    C: Clipboard + 'static,
    N: Notifier + 'static,
{
    planner: Planner<C, N>,
    logo_url: Option<Url>,
    pending_copies: Vec<JoinHandle<PlannerResult<String>>>,
}

impl<C, N> Session<C, N>
where
    C: Clipboard + 'static,
    N: Notifier + 'static,
{
    pub fn new(planner: Planner<C, N>) -> Self {
        Self {
            planner,
            logo_url: None,
            pending_copies: Vec::new(),
        }
    }

    /// Team logo shown in the banner
    pub fn with_logo(mut self, logo_url: Option<Url>) -> Self {
        self.logo_url = logo_url;
        self
    }

    pub fn planner(&self) -> &Planner<C, N> {
        &self.planner
    }

    pub fn planner_mut(&mut self) -> &mut Planner<C, N> {
        &mut self.planner
    }

    /// Write the startup banner
    pub fn write_banner<W: Write>(&self, out: &mut W) -> PlannerResult<()> {
        writeln!(out, "{} Hockey Planner", BudgetInputs::DEFAULT_TEAM)?;
        if let Some(logo) = &self.logo_url {
            writeln!(out, "Logo: {logo}")?;
        }
        writeln!(out, "Type 'help' for commands.")?;
        Ok(())
    }

    /// Read commands until `quit` or end of input
    pub async fn run<R, W>(&mut self, reader: R, out: &mut W) -> PlannerResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        self.write_banner(out)?;
        let mut lines = reader.lines();

        while let Some(line) = lines.next_line().await? {
            if self.handle_line(&line, out)? == Flow::Quit {
                break;
            }
        }

        self.finish_copies().await;
        Ok(())
    }

    /// Handle one input line; command errors are reported, not returned
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> PlannerResult<Flow> {
        match parse_command(line) {
            Ok(command) => self.handle_command(command, out),
            Err(e) => {
                writeln!(out, "Error: {e}")?;
                Ok(Flow::Continue)
            }
        }
    }

    /// Apply one command to the planner
    ///
    /// `copy` starts its clipboard write on the current tokio runtime and
    /// returns at once; outside a runtime it prints an error instead.
    pub fn handle_command<W: Write>(&mut self, command: PlannerCommand, out: &mut W) -> PlannerResult<Flow> {
        planner_debug!(ComponentId::Session, "Handling {:?}", command);
        self.pending_copies.retain(|handle| !handle.is_finished());

        match command {
            PlannerCommand::Set(edit) => {
                if let Err(e) = self.planner.apply_edit(&edit) {
                    writeln!(out, "Error: {e}")?;
                }
            }
            PlannerCommand::Calculate => match self.planner.calculate_totals() {
                Ok(_) => writeln!(out, "{}", self.planner.results())?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            PlannerCommand::Show => self.write_state(out)?,
            PlannerCommand::Share => writeln!(out, "{}", self.planner.build_share_url())?,
            PlannerCommand::Copy => match self.planner.spawn_copy_share_link() {
                Ok(handle) => self.pending_copies.push(handle),
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            PlannerCommand::Load(query) => {
                let report = self.planner.load_from_url(&query);
                writeln!(out, "Loaded {} field(s)", report.applied.len())?;
                for (name, value) in &report.rejected {
                    writeln!(out, "Ignored {name}={value}")?;
                }
                for name in &report.unknown {
                    writeln!(out, "Unknown parameter {name}")?;
                }
            }
            PlannerCommand::Reset => {
                self.planner.reset();
                writeln!(out, "Inputs reset to defaults")?;
            }
            PlannerCommand::Help => writeln!(out, "{HELP_TEXT}")?,
            PlannerCommand::Quit => return Ok(Flow::Quit),
            PlannerCommand::Empty => {}
        }
        Ok(Flow::Continue)
    }

    /// Wait for outstanding clipboard writes so their notices are shown
    pub async fn finish_copies(&mut self) {
        for handle in self.pending_copies.drain(..) {
            if let Err(e) = handle.await {
                planner_warn!(ComponentId::Session, "Copy task ended abnormally: {}", e);
            }
        }
    }

    fn write_state<W: Write>(&self, out: &mut W) -> PlannerResult<()> {
        let inputs = self.planner.inputs();
        writeln!(out, "Team: {}", inputs.team_name)?;
        writeln!(out, "Players: {}", inputs.player_amount)?;
        writeln!(out, "Ice cost per hour: {}", inputs.ice_cost_per_hour)?;
        writeln!(out, "Total ice hours: {}", inputs.total_hours)?;
        writeln!(out, "Coaches: {}", inputs.coach_amount)?;
        writeln!(out, "{}", self.planner.results())?;
        Ok(())
    }
}
