//! Real clipboard service implementation
//!
//! Pipes the text into a platform clipboard utility (`pbcopy`, `clip`,
//! `wl-copy` or `xclip`) or a user-supplied command.

use std::process::Stdio;
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use crate::error::{PlannerError, PlannerResult};
use crate::traits::Clipboard;
use shared::logging::ComponentId;
use shared::planner_debug;

/// Clipboard backed by an external command reading stdin
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from a whitespace-separated command line such as `xclip -selection clipboard`
    pub fn from_command_line(command_line: &str) -> PlannerResult<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts
            .next()
            .ok_or_else(|| PlannerError::config("clipboard_command", command_line))?;
        Ok(Self::new(program, parts.collect()))
    }

    /// Pick the usual clipboard utility for this platform
    pub fn detect() -> Self {
        if cfg!(target_os = "macos") {
            Self::new("pbcopy", vec![])
        } else if cfg!(target_os = "windows") {
            Self::new("clip", vec![])
        } else if std::env::var_os("WAYLAND_DISPLAY").is_some() {
            Self::new("wl-copy", vec![])
        } else {
            Self::new("xclip", vec!["-selection".to_string(), "clipboard".to_string()])
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[async_trait]
impl Clipboard for CommandClipboard {
    async fn write_text(&self, text: &str) -> PlannerResult<()> {
        planner_debug!(ComponentId::Planner, "Writing {} bytes via {}", text.len(), self.describe());

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PlannerError::clipboard(format!("failed to start {}: {}", self.program, e)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .await
                .map_err(|e| PlannerError::clipboard(format!("failed to write to {}: {}", self.program, e)))?;
            // Dropping stdin closes the pipe so the utility can finish
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| PlannerError::clipboard(format!("{} did not finish: {}", self.program, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PlannerError::clipboard(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }

    fn describe(&self) -> String {
        if self.args.is_empty() {
            self.program.clone()
        } else {
            format!("{} {}", self.program, self.args.join(" "))
        }
    }
}
