use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::Result;

pub fn handle(ctx: &HandlerContext) -> Result<()> {
    let workspace = ctx.workspace()?;
    let view_model = presenters::present_overview(ctx.data_dir(), &workspace.snapshot());
    ctx.render(view_model)
}
