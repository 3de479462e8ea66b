use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use folio_runtime::Config;

pub fn handle(ctx: &HandlerContext, refresh: bool) -> Result<()> {
    let data_dir = ctx.data_dir();
    let config_path = Config::default_path(data_dir);

    std::fs::create_dir_all(folio_core::storage_dir(data_dir))
        .with_context(|| format!("Failed to create {}", data_dir.display()))?;

    let config_written = if refresh || !config_path.exists() {
        Config::default().save_to(&config_path)?;
        tracing::info!(path = %config_path.display(), "config written");
        true
    } else {
        false
    };

    let (workspace, recovered) = ctx.workspace_with_recoveries()?;
    let stored_keys = workspace.stored_keys()?;

    let view_model =
        presenters::present_init(data_dir, &config_path, config_written, stored_keys, recovered);
    ctx.render(view_model)
}
