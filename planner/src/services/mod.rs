//! Service implementations
//!
//! Real implementations of the service traits. These handle the actual
//! clipboard and console I/O.

pub mod clipboard;
pub mod notifier;

#[cfg(test)]
mod tests;

// Re-export all service implementations
pub use clipboard::CommandClipboard;
pub use notifier::ConsoleNotifier;
