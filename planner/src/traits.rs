//! Service trait definitions for dependency injection
//!
//! The clipboard and the user-facing notice channel are the only I/O the
//! planner performs. Both sit behind traits so tests can swap in mocks.

use async_trait::async_trait;

use crate::error::PlannerResult;

/// Clipboard write access
#[mockall::automock]
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Place `text` on the system clipboard
    async fn write_text(&self, text: &str) -> PlannerResult<()>;

    /// Short description for logs
    fn describe(&self) -> String;
}

/// Visible notices shown to the user
#[mockall::automock]
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: Notice);
}

/// Outcome notices for user-triggered actions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    LinkCopied { url: String },
    CopyFailed { reason: String },
}

impl Notice {
    /// Text shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Notice::LinkCopied { .. } => "Link copied to clipboard!",
            Notice::CopyFailed { .. } => "Could not copy link. Please try again.",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Notice::CopyFailed { .. })
    }
}
