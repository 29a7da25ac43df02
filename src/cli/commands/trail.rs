//! trail command - Resolve and render a route's breadcrumb trail

use anyhow::{Context as _, Result};
use serde::Serialize;

use crate::cli::args::TrailFormat;
use crate::cli::Context;
use crate::core::types::RouteParams;
use crate::ui::output;
use crate::ui::render::CrumbItem;

/// JSON shape of the trail command.
#[derive(Debug, Serialize)]
struct TrailReport<'a> {
    route: &'a str,
    params: &'a RouteParams,
    /// One slot per trail entry; `null` for unlabeled entries
    items: Vec<Option<CrumbItem>>,
}

/// Resolve and print the breadcrumb trail of a route.
pub fn trail(
    ctx: &Context,
    route: &str,
    params: Vec<(String, String)>,
    format: TrailFormat,
) -> Result<()> {
    let service = ctx.service()?;
    let params: RouteParams = params.into_iter().collect();

    let current = service.resolver().current(route, params)?;
    tracing::debug!(
        route,
        matched = current.matched.len(),
        "resolving trail"
    );

    match format {
        TrailFormat::Text => {
            let items: Vec<CrumbItem> = service.items(&current)?.into_iter().flatten().collect();
            output::data(output::format_trail(&items, ctx.verbosity()));
        }
        TrailFormat::Html => {
            output::data(service.render(&current)?);
        }
        TrailFormat::Json => {
            let report = TrailReport {
                route,
                params: &current.params,
                items: service.items(&current)?,
            };
            let json = serde_json::to_string_pretty(&report).context("failed to encode trail")?;
            output::data(json);
        }
    }

    Ok(())
}
