//! Telegram delivery and command handling.
//!
//! Command parsing, command execution and message formatting are plain Rust;
//! only the transport and the listener talk to the Bot API and need the
//! `telegram` feature.

pub mod command;
pub mod control;
pub mod format;

#[cfg(feature = "telegram")]
mod listener;
#[cfg(feature = "telegram")]
mod transport;

pub use command::{parse_command, parse_command_for, CommandParseError, TrackerCommand};
pub use control::TrackingControl;
#[cfg(feature = "telegram")]
pub use listener::run_command_listener;
#[cfg(feature = "telegram")]
pub use transport::TelegramTransport;
