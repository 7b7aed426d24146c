//! Ice planner command-line entry point

use anyhow::Context;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;
use tokio::io::BufReader;
use tokio::signal;

use planner::core::edit::InputPolicy;
use planner::{
    CommandClipboard, ConfigOverrides, ConsoleNotifier, Planner, PlannerConfig, RecomputePolicy, Session,
};
use shared::logging::{self, ComponentId};
use shared::{InputField, planner_debug, planner_info};

/// Team ice-time budget planner
#[derive(Parser, Debug)]
#[command(name = "ice-planner")]
#[command(about = "Plan a hockey team's season budget and share it as a link")]
struct Args {
    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL share links are built on
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Jersey cost per player
    #[arg(long, global = true)]
    jersey_cost: Option<f64>,

    /// Coach cost per coach
    #[arg(long, global = true)]
    coach_cost: Option<f64>,

    /// Overhead rate as a fraction (0.02 = 2%)
    #[arg(long, global = true)]
    overhead_rate: Option<f64>,

    /// Out-of-range edits: reject or clamp
    #[arg(long, global = true)]
    input_policy: Option<InputPolicy>,

    /// When totals recompute: ondemand or live
    #[arg(long, global = true)]
    recompute: Option<RecomputePolicy>,

    /// Clipboard command line (defaults to the platform utility)
    #[arg(long, global = true)]
    clipboard_cmd: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate and print the budget breakdown
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the share link for the given inputs
    Share {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Copy the share link to the clipboard
    Copy {
        #[command(flatten)]
        inputs: InputArgs,
    },
    /// Edit inputs interactively (default)
    Interactive {
        /// Share link or query string to start from
        #[arg(long)]
        url: Option<String>,
    },
}

/// Input values given as flags
#[derive(ClapArgs, Debug, Default)]
struct InputArgs {
    /// Share link or query string to start from
    #[arg(long)]
    url: Option<String>,

    /// Team name
    #[arg(long)]
    team: Option<String>,

    /// Number of players
    #[arg(long)]
    players: Option<String>,

    /// Ice cost per hour
    #[arg(long)]
    ice_cost: Option<String>,

    /// Total ice hours
    #[arg(long)]
    hours: Option<String>,

    /// Number of coaches
    #[arg(long)]
    coaches: Option<String>,
}

impl InputArgs {
    fn edits(&self) -> Vec<(InputField, &str)> {
        [
            (InputField::Team, &self.team),
            (InputField::Players, &self.players),
            (InputField::IceCost, &self.ice_cost),
            (InputField::Hours, &self.hours),
            (InputField::Coaches, &self.coaches),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.as_deref().map(|v| (field, v)))
        .collect()
    }
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            base_url: self.base_url.clone(),
            jersey_cost: self.jersey_cost,
            coach_cost: self.coach_cost,
            overhead_rate: self.overhead_rate,
            input_policy: self.input_policy,
            recompute_policy: self.recompute,
            clipboard_command: self.clipboard_cmd.clone(),
            log_level: self.log_level.clone(),
        }
    }
}

type CliPlanner = Planner<CommandClipboard, ConsoleNotifier>;

fn build_planner(config: &PlannerConfig) -> anyhow::Result<CliPlanner> {
    let clipboard = match &config.clipboard_command {
        Some(command) => CommandClipboard::from_command_line(command)?,
        None => CommandClipboard::detect(),
    };
    planner_debug!(ComponentId::Planner, "Using clipboard command: {}", clipboard.program());
    Ok(Planner::new(config, clipboard, ConsoleNotifier::new()))
}

/// Load the starting link, then apply flag edits on top
fn apply_inputs(planner: &mut CliPlanner, inputs: &InputArgs) -> anyhow::Result<()> {
    if let Some(url) = &inputs.url {
        planner.load_from_url(url);
    }
    for (field, value) in inputs.edits() {
        planner
            .set_field(field.param_name(), value)
            .with_context(|| format!("invalid {} value", field))?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = PlannerConfig::load(&args.overrides()).context("failed to load configuration")?;
    logging::init_tracing(Some(&config.log_level));

    let mut planner = build_planner(&config)?;

    match args.command.unwrap_or(Command::Interactive { url: None }) {
        Command::Calculate { inputs, json } => {
            apply_inputs(&mut planner, &inputs)?;
            planner.calculate_totals()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&planner.results())?);
            } else {
                println!("{}", planner.results());
            }
        }
        Command::Share { inputs } => {
            apply_inputs(&mut planner, &inputs)?;
            println!("{}", planner.build_share_url());
        }
        Command::Copy { inputs } => {
            apply_inputs(&mut planner, &inputs)?;
            planner.copy_share_link().await?;
        }
        Command::Interactive { url } => {
            logging::log_startup(ComponentId::Session, "interactive planner");
            if let Some(url) = url {
                planner.load_from_url(&url);
            }

            let mut session = Session::new(planner).with_logo(config.logo_url.clone());
            let reader = BufReader::new(tokio::io::stdin());
            let mut out = std::io::stdout();

            tokio::select! {
                result = session.run(reader, &mut out) => {
                    result?;
                    logging::log_shutdown(ComponentId::Session, "end of input");
                }
                res = signal::ctrl_c() => {
                    match res {
                        Ok(()) => logging::log_shutdown(ComponentId::Session, "Received Ctrl+C signal"),
                        Err(err) => logging::log_error(ComponentId::Session, "Signal handling", &err),
                    }
                }
            }
            // A Ctrl+C drops the read loop before it reaches its own wait
            session.finish_copies().await;
            planner_info!(ComponentId::Session, "Planner session closed");
        }
    }

    Ok(())
}
