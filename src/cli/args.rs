//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--config <path>`: Use this route config file
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::types::RouteParams;

/// crumbs - Breadcrumb trails for named, nested route tables
#[derive(Parser, Debug)]
#[command(name = "crumbs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Route config file (default: search standard locations)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve and render the breadcrumb trail of a route
    #[command(
        name = "trail",
        long_about = "Resolve and render the breadcrumb trail of a named route.\n\n\
            The trail starts from the route's matched chain (its ancestors in the \
            route tree) and splices in the ancestor chains of any parent overrides \
            declared in breadcrumb metadata. Route parameters fill `:param` tokens \
            in paths and label templates.",
        after_help = "\
EXAMPLES:
    # Labels of the trail, separated by '>'
    crumbs trail user-edit -p id=42

    # Markup as rendered by the breadcrumb component
    crumbs trail user-edit -p id=42 --format html

    # Machine-readable slots (null for unlabeled entries)
    crumbs trail user-edit -p id=42 --format json"
    )]
    Trail {
        /// Route name
        route: String,

        /// Route parameter (repeatable)
        #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", value_parser = parse_param)]
        params: Vec<(String, String)>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = TrailFormat::Text)]
        format: TrailFormat,
    },

    /// List named routes with their full paths and breadcrumbs
    Routes,

    /// Validate the route config and every route's trail
    #[command(
        name = "check",
        long_about = "Validate the route config.\n\n\
            Loads the config, reports warnings (malformed breadcrumbs, parents that \
            name no route) and resolves the trail of every named route without \
            parameters. Fails if any trail cannot be resolved, e.g. because of a \
            parent cycle."
    )]
    Check,

    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Output formats of the `trail` command.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrailFormat {
    /// Labels on one line
    #[default]
    Text,
    /// Component markup
    Html,
    /// JSON slots
    Json,
}

/// Supported shells for completion.
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

fn parse_param(s: &str) -> Result<(String, String), String> {
    RouteParams::parse_pair(s).map_err(|e| e.to_string())
}
