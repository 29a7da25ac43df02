//! cli
//!
//! Command-line interface layer for routecrumbs.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Install logging
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap, loads the route
//! config and hands a [`crate::service::BreadcrumbService`] to the command
//! handlers.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell, TrailFormat};

use std::path::PathBuf;

use anyhow::{Context as _, Result};
use tracing_subscriber::EnvFilter;

use crate::core::config::{Config, ConfigLoadResult};
use crate::core::router::RouteTable;
use crate::service::BreadcrumbService;
use crate::ui::output::{self, Verbosity};

/// Execution context derived from global flags.
#[derive(Debug, Clone, Default)]
pub struct Context {
    /// Explicit config file.
    pub config: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
}

impl Context {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }

    /// Load the route config, printing its warnings.
    pub fn load_config(&self) -> Result<Config> {
        let ConfigLoadResult { config, warnings } =
            Config::load(self.config.as_deref()).context("failed to load route config")?;

        for warning in &warnings {
            output::warn(warning, self.verbosity());
        }

        match config.loaded_from() {
            Some(path) => tracing::debug!(path = %path.display(), "using route config"),
            None => tracing::debug!("no route config found"),
        }

        Ok(config)
    }

    /// Build the breadcrumb service from the route config.
    pub fn service(&self) -> Result<BreadcrumbService<RouteTable>> {
        let config = self.load_config()?;
        let table = config
            .route_table()
            .context("failed to build route table")?;
        Ok(BreadcrumbService::new(table, config.render_options()))
    }
}

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`.
pub fn run() -> Result<()> {
    let cli = Cli::parse_args();
    init_logging(cli.debug);

    let ctx = Context {
        config: cli.config.clone(),
        debug: cli.debug,
        quiet: cli.quiet,
    };

    commands::dispatch(cli.command, &ctx)
}

/// Install the stderr log subscriber.
///
/// `--debug` enables debug events of this crate; otherwise `RUST_LOG`
/// applies, defaulting to warnings only.
fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("routecrumbs=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber installed by an embedding process stays in place.
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
    {
        tracing::debug!(error = %e, "log subscriber already installed");
    }
}
