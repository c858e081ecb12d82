//! Command layer
//!
//! Parses interactive input into commands and runs them against the contact
//! service, formatting every outcome as text.

pub mod command;
pub mod shell;

pub use command::{parse_input, Command, CommandError};
pub use shell::{format_upcoming, Reply, Shell};
