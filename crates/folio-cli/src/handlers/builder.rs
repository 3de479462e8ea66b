use crate::handlers::HandlerContext;
use crate::presentation::presenters;
use anyhow::{Result, bail};
use folio_runtime::{ColorChoice, Workspace};
use folio_types::{StyleId, color_combos, find_color_combo};

pub(crate) fn parse_style(input: &str) -> Result<StyleId> {
    match StyleId::parse(input) {
        Some(style) => Ok(style),
        None => bail!(
            "Unknown style '{}'. Expected one of: minimal, creative, corporate",
            input
        ),
    }
}

pub fn style_list(ctx: &HandlerContext) -> Result<()> {
    let workspace = ctx.workspace()?;
    let snapshot = workspace.snapshot();
    let view_model = presenters::present_style_list(
        snapshot.style.as_deref(),
        false,
        snapshot.colors().is_some(),
    );
    ctx.render(view_model)
}

pub fn style_set(ctx: &HandlerContext, style: &str) -> Result<()> {
    let style = parse_style(style)?;
    let mut workspace = ctx.workspace()?;
    workspace.set_style(style);
    tracing::info!(style = %style, "style selected");

    let snapshot = workspace.snapshot();
    let view_model = presenters::present_style_list(
        Some(style.as_str()),
        true,
        snapshot.colors().is_some(),
    );
    ctx.render_saved(&workspace, view_model)
}

pub fn colors_list(ctx: &HandlerContext, style: Option<&str>) -> Result<()> {
    let workspace = ctx.workspace()?;
    let snapshot = workspace.snapshot();

    let style = match style {
        Some(style) => parse_style(style)?,
        None => match snapshot.style_id() {
            Some(style) => style,
            None => bail!("No style chosen yet. Pass --style or run `folio style set <STYLE>`"),
        },
    };

    let view_model =
        presenters::present_color_list(style, snapshot.color_combo_name.as_deref());
    ctx.render(view_model)
}

pub fn colors_set(ctx: &HandlerContext, primary: &str, secondary: &str) -> Result<()> {
    let mut workspace = ctx.workspace()?;
    let choice = ColorChoice {
        combo: None,
        primary: primary.trim().to_string(),
        secondary: secondary.trim().to_string(),
    };
    save_colors(ctx, &mut workspace, choice)
}

pub fn colors_apply(ctx: &HandlerContext, combo: &str) -> Result<()> {
    let mut workspace = ctx.workspace()?;
    let in_style = workspace.snapshot().style_id().and_then(|style| {
        color_combos(style)
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(combo.trim()))
    });

    let Some(found) = in_style.or_else(|| find_color_combo(combo)) else {
        bail!("Unknown color combo '{}'. See `folio colors list`", combo);
    };
    save_colors(ctx, &mut workspace, found.into())
}

fn save_colors(ctx: &HandlerContext, workspace: &mut Workspace, choice: ColorChoice) -> Result<()> {
    workspace.set_colors(&choice.primary, &choice.secondary, choice.combo.as_deref());
    tracing::info!(primary = %choice.primary, secondary = %choice.secondary, "colors selected");
    ctx.render_saved(workspace, presenters::present_colors(&choice))
}
