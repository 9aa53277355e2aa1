//! List the route table.

use std::sync::Arc;

use anyhow::Result;
use serde::Serialize;

use storefront_catalog::Catalog;
use storefront_render::Storefront;

use crate::context::Context;

#[derive(Debug, PartialEq, Serialize)]
struct RouteRow<'a> {
    pattern: &'a str,
    page: Option<&'static str>,
    bound: bool,
}

fn route_rows(storefront: &Storefront) -> Vec<RouteRow<'_>> {
    storefront
        .routes()
        .into_iter()
        .map(|r| RouteRow {
            pattern: r.pattern,
            page: r.page.map(|p| p.as_str()),
            bound: r.bound,
        })
        .collect()
}

/// Run the routes command.
pub async fn run(ctx: &Context) -> Result<()> {
    let base_path = ctx.base_path(None);
    let storefront = ctx.storefront(Arc::new(Catalog::default()), &base_path)?;
    let rows = route_rows(&storefront);

    if ctx.output.is_json() {
        ctx.output.json(&rows);
        return Ok(());
    }

    ctx.output.header("Routes");
    if !storefront.base_path().is_empty() {
        ctx.output.kv("base path", storefront.base_path());
    }

    let widths = [16, 16, 8];
    ctx.output.table_row(&["PATTERN", "PAGE", "BOUND"], &widths);
    for row in &rows {
        let page = row.page.unwrap_or("(404)");
        let bound = if row.bound { "yes" } else { "no" };
        ctx.output.table_row(&[row.pattern, page, bound], &widths);
    }

    Ok(())
}
