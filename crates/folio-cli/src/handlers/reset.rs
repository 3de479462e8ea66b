use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let mut workspace = ctx.workspace()?;
    let removed = workspace.reset()?;
    tracing::info!(removed, "stored values removed");
    ctx.render(presenters::present_reset(removed))
}
