//! routes command - List named routes

use anyhow::{Context as _, Result};

use crate::cli::Context;
use crate::core::types::RouteParams;
use crate::ui::output;

/// List named routes in declaration order.
///
/// Each line shows the route name, its full path template and how its
/// breadcrumb is defined. Computed labels are shown evaluated without
/// parameters.
pub fn routes(ctx: &Context) -> Result<()> {
    let config = ctx.load_config()?;
    let table = config
        .route_table()
        .context("failed to build route table")?;

    if table.is_empty() {
        output::print("No routes configured.", ctx.verbosity());
        return Ok(());
    }

    let width = table.routes().map(|r| r.name.as_str().len()).max().unwrap_or(0);
    let no_params = RouteParams::new();

    let lines: Vec<String> = table
        .routes()
        .map(|route| {
            let record = route.record();
            let path = record.map(|r| r.path.as_str()).unwrap_or("");
            let path = if path.is_empty() { "/" } else { path };

            let breadcrumb = record
                .and_then(|r| r.breadcrumb.as_ref())
                .map(|meta| {
                    let bc = meta.evaluate(&no_params);
                    match bc.declared_parent() {
                        Some(parent) => {
                            format!("{} {:?} (parent: {})", meta.kind(), bc.label, parent)
                        }
                        None => format!("{} {:?}", meta.kind(), bc.label),
                    }
                })
                .unwrap_or_else(|| "-".to_string());

            format!(
                "{:width$}  {}  {}",
                route.name.as_str(),
                path,
                breadcrumb,
                width = width
            )
        })
        .collect();

    output::data(output::format_list(&lines, ""));
    Ok(())
}
