use crate::handlers::HandlerContext;
use crate::handlers::builder::parse_style;
use crate::handlers::details::read_details_file;
use crate::presentation::presenters;
use anyhow::{Context, Result};
use folio_runtime::Wizard;
use std::path::Path;

/// Palette for the colors step: a named combo or a custom pair.
pub enum Palette {
    Combo(String),
    Custom { primary: String, secondary: String },
}

pub fn handle(
    ctx: &HandlerContext,
    style: &str,
    palette: Palette,
    details: Option<&Path>,
) -> Result<()> {
    let style = parse_style(style)?;
    let mut workspace = ctx.workspace()?;
    let mut wizard = Wizard::new(workspace.user().clone());

    wizard.choose_style(style);
    wizard.next();

    match &palette {
        Palette::Combo(name) => {
            wizard.choose_combo(name)?;
        }
        Palette::Custom { primary, secondary } => {
            wizard.choose_custom_colors(primary.trim(), secondary.trim());
        }
    }
    wizard.next();

    if let Some(path) = details {
        let details = read_details_file(path, wizard.details())?;
        wizard.set_details(details);
    }
    wizard.next();

    let route = wizard
        .finish(&mut workspace)
        .context("Failed to generate portfolio")?;
    tracing::info!(style = %style, route = %route.path(), "portfolio generated");

    let colors = wizard
        .colors()
        .cloned()
        .context("Colors missing after the wizard finished")?;
    let view_model =
        presenters::present_wizard_result(style, &colors, &wizard.details().name, &route);
    ctx.render_saved(&workspace, view_model)
}
