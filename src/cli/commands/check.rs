//! check command - Validate the route config

use anyhow::{bail, Context as _, Result};

use crate::cli::Context;
use crate::core::resolver::compute_breadcrumbs;
use crate::core::types::RouteParams;
use crate::ui::output;

/// Resolve every named route's trail and report failures.
pub fn check(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let table = config
        .route_table()
        .context("failed to build route table")?;

    let no_params = RouteParams::new();
    let mut failures = Vec::new();

    for route in table.routes() {
        if let Err(e) = compute_breadcrumbs(route.chain, &no_params, &table) {
            failures.push(format!("{}: {}", route.name, e));
        }
    }

    if !failures.is_empty() {
        for failure in &failures {
            output::error(failure);
        }
        bail!("{} of {} route(s) failed to resolve", failures.len(), table.len());
    }

    output::print(
        format!("ok: {} route(s) resolved", table.len()),
        ctx.verbosity(),
    );
    Ok(())
}
