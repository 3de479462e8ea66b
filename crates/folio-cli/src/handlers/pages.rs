use crate::handlers::HandlerContext;
use crate::handlers::details::to_index;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use folio_types::{PageEditor, toggle_section};

pub fn list(ctx: &HandlerContext) -> Result<()> {
    let workspace = ctx.workspace()?;
    ctx.render(presenters::present_pages(workspace.pages(), None))
}

pub fn toggle(ctx: &HandlerContext, id: &str) -> Result<()> {
    let mut workspace = ctx.workspace()?;
    let mut editor = PageEditor::new(workspace.pages().to_vec());
    let enabled = editor.toggle(id)?;
    workspace.set_pages(editor.into_pages());

    tracing::info!(page = id, enabled, "page toggled");
    let label = format!("{} {}", if enabled { "Enabled" } else { "Disabled" }, id);
    ctx.render_saved(
        &workspace,
        presenters::present_pages(workspace.pages(), Some(label)),
    )
}

pub fn move_page(ctx: &HandlerContext, from: usize, to: usize) -> Result<()> {
    let mut workspace = ctx.workspace()?;
    let len = workspace.pages().len();
    for position in [from, to] {
        if position == 0 || position > len {
            bail!("Position {} is out of range (1..={})", position, len);
        }
    }

    let mut editor = PageEditor::new(workspace.pages().to_vec());
    editor.move_page(to_index(from)?, to_index(to)?)?;
    workspace.set_pages(editor.into_pages());

    tracing::info!(from, to, "page moved");
    let label = format!("Moved position {} to {}", from, to);
    ctx.render_saved(
        &workspace,
        presenters::present_pages(workspace.pages(), Some(label)),
    )
}

pub fn sections_list(ctx: &HandlerContext, page: Option<&str>) -> Result<()> {
    let workspace = ctx.workspace()?;
    if let Some(page) = page
        && !workspace.pages().iter().any(|p| p.id == page)
    {
        bail!("Unknown page: {}", page);
    }
    ctx.render(presenters::present_sections(workspace.sections(), page, None))
}

pub fn sections_toggle(ctx: &HandlerContext, id: &str) -> Result<()> {
    let mut workspace = ctx.workspace()?;
    let sections = toggle_section(workspace.sections(), id)?;
    let enabled = sections.iter().any(|s| s.id == id && s.enabled);
    workspace.set_sections(sections);

    let label = format!("{} section {}", if enabled { "Enabled" } else { "Disabled" }, id);
    ctx.render_saved(
        &workspace,
        presenters::present_sections(workspace.sections(), None, Some(label)),
    )
}
