//! Console notice output

use std::io::Write;
use std::sync::{Arc, Mutex};

use crate::traits::{Notice, Notifier};
use shared::logging::ComponentId;
use shared::{planner_info, planner_warn};

/// Prints notices to stdout, or to any shared writer
#[derive(Clone)]
pub struct ConsoleNotifier {
    out: Arc<Mutex<dyn Write + Send>>,
}

impl ConsoleNotifier {
    pub fn new() -> Self {
        Self {
            out: Arc::new(Mutex::new(std::io::stdout())),
        }
    }

    /// Write notices to a custom sink
    pub fn with_writer(out: Arc<Mutex<dyn Write + Send>>) -> Self {
        Self { out }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        match &notice {
            Notice::LinkCopied { url } => {
                planner_info!(ComponentId::Planner, "Share link copied: {}", url);
            }
            Notice::CopyFailed { reason } => {
                planner_warn!(ComponentId::Planner, "Share link copy failed: {}", reason);
            }
        }

        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => {
                planner_warn!(ComponentId::Planner, "Notice output lock was poisoned; writing anyway");
                poisoned.into_inner()
            }
        };
        if let Err(e) = writeln!(out, "{}", notice.message()).and_then(|()| out.flush()) {
            planner_warn!(ComponentId::Planner, "Could not show notice {:?}: {}", notice.message(), e);
        }
    }
}
