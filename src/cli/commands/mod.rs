//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Loads the route config through the [`Context`]
//! 2. Calls the breadcrumb service or route table
//! 3. Formats and displays output
//!
//! Handlers never write files; all commands are read-only.

mod check;
mod completion;
mod routes;
mod trail;

pub use check::check;
pub use completion::completion;
pub use routes::routes;
pub use trail::trail;

use anyhow::Result;

use super::args::Command;
use super::Context;

/// Dispatch a command to its handler.
pub fn dispatch(command: Command, ctx: &Context) -> Result<()> {
    match command {
        Command::Trail {
            route,
            params,
            format,
        } => trail::trail(ctx, &route, params, format),
        Command::Routes => routes::routes(ctx),
        Command::Check => check::check(ctx),
        Command::Completion { shell } => completion::completion(shell),
    }
}
