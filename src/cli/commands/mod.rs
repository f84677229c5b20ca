//! Command implementations for Symlist
//!
//! Each command is implemented in its own module.

pub mod config;
pub mod folder;
pub mod kinds;
pub mod list;

use crate::cli::OutputContext;
use crate::error::SymlistError;

/// Warn about a missing target and abort the command without output
pub(crate) fn missing_context(ctx: &OutputContext, message: String) -> anyhow::Error {
    ctx.print_warning(&message);
    SymlistError::missing_context(message).into()
}
