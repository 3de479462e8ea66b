use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use chrono::Datelike;
use folio_runtime::{RouteOutcome, follow_route};
use folio_types::Route;
use std::path::PathBuf;

pub fn handle(ctx: &HandlerContext, route: Option<&str>, output: Option<PathBuf>) -> Result<()> {
    let workspace = ctx.workspace()?;
    let requested = match route {
        Some(route) => Route::parse(route),
        None => Route::Portfolio(workspace.config().render.default_page.clone()),
    };

    let year = chrono::Local::now().year();
    let (visited, outcome) = follow_route(&workspace.snapshot(), requested.clone(), year);
    tracing::debug!(
        requested = %requested,
        hops = visited.len(),
        "route resolved"
    );

    if let Some(path) = &output {
        if let RouteOutcome::Render { html, .. } | RouteOutcome::TemplateNotFound { html, .. } =
            &outcome
        {
            std::fs::write(path, html)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "html written");
        }
    }

    ctx.render(presenters::present_open(&requested, &visited, outcome, output))
}
