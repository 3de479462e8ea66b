use crate::presentation::view_models::{
    ColorComboEntry, ColorListViewModel, ColorsViewModel, CommandResultViewModel, Guidance,
    StatusBadge, StyleEntry, StyleListViewModel, WizardResultViewModel, WizardStepEntry,
};
use folio_runtime::{ColorChoice, WizardStep};
use folio_types::{Route, StyleId, color_combos};

pub fn present_style_list(
    current: Option<&str>,
    changed: bool,
    colors_chosen: bool,
) -> CommandResultViewModel<StyleListViewModel> {
    let styles = StyleId::ALL
        .iter()
        .map(|style| StyleEntry {
            id: style.as_str().to_string(),
            name: style.display_name().to_string(),
            description: style.description().to_string(),
            current: current == Some(style.as_str()),
        })
        .collect();

    let mut result = CommandResultViewModel::new(StyleListViewModel { styles });

    match (current.and_then(StyleId::parse), changed) {
        (Some(style), true) => {
            result = result.with_badge(StatusBadge::success(format!(
                "Style set to {}",
                style.display_name()
            )));
            if !colors_chosen {
                result = result.with_suggestion(
                    Guidance::new("Pick a color combo")
                        .with_command(format!("folio colors list --style {}", style)),
                );
            }
        }
        (None, _) => {
            result = result.with_suggestion(
                Guidance::new("Choose a style").with_command("folio style set minimal"),
            );
        }
        _ => {}
    }

    result
}

pub fn present_color_list(
    style: StyleId,
    current_combo: Option<&str>,
) -> CommandResultViewModel<ColorListViewModel> {
    let combos = color_combos(style)
        .into_iter()
        .map(|combo| ColorComboEntry {
            current: current_combo.is_some_and(|name| name == combo.name),
            name: combo.name,
            primary: combo.primary,
            secondary: combo.secondary,
        })
        .collect();

    CommandResultViewModel::new(ColorListViewModel {
        style: style.as_str().to_string(),
        combos,
    })
    .with_suggestion(Guidance::new("Apply a combo").with_command("folio colors apply <NAME>"))
    .with_suggestion(
        Guidance::new("Or use your own colors")
            .with_command("folio colors set <PRIMARY> <SECONDARY>"),
    )
}

pub fn present_colors(choice: &ColorChoice) -> CommandResultViewModel<ColorsViewModel> {
    let label = match &choice.combo {
        Some(name) => format!("Applied color combo {}", name),
        None => "Custom colors set".to_string(),
    };

    CommandResultViewModel::new(ColorsViewModel {
        primary: choice.primary.clone(),
        secondary: choice.secondary.clone(),
        combo: choice.combo.clone(),
    })
    .with_badge(StatusBadge::success(label))
}

pub fn present_wizard_result(
    style: StyleId,
    colors: &ColorChoice,
    name: &str,
    route: &Route,
) -> CommandResultViewModel<WizardResultViewModel> {
    let colors_value = match &colors.combo {
        Some(combo) => format!("{} ({} / {})", combo, colors.primary, colors.secondary),
        None => format!("{} / {}", colors.primary, colors.secondary),
    };

    let steps = [
        (WizardStep::Style, style.display_name().to_string()),
        (WizardStep::Colors, colors_value),
        (WizardStep::Details, name.to_string()),
        (WizardStep::Generate, route.path()),
    ]
    .into_iter()
    .map(|(step, value)| WizardStepEntry {
        number: step.number(),
        title: step.title().to_string(),
        value,
    })
    .collect();

    let mut result = CommandResultViewModel::new(WizardResultViewModel {
        steps,
        route: route.path(),
    });

    if *route == Route::BuilderRoot {
        result = result
            .with_badge(StatusBadge::warning("Portfolio saved, but no page is enabled"))
            .with_suggestion(
                Guidance::new("Enable a page").with_command("folio pages toggle about"),
            );
    } else {
        result = result
            .with_badge(StatusBadge::success("Portfolio generated"))
            .with_suggestion(
                Guidance::new("Render it")
                    .with_command(format!("folio open {} --output index.html", route.path())),
            );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_list_marks_current() {
        let result = present_style_list(Some("creative"), false, false);
        let current: Vec<&str> = result
            .content
            .styles
            .iter()
            .filter(|s| s.current)
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(current, vec!["creative"]);
        assert!(result.badge.is_none());
    }

    #[test]
    fn test_style_set_suggests_colors_when_missing() {
        let result = present_style_list(Some("minimal"), true, false);
        assert!(result.badge.is_some());
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("folio colors list --style minimal")
        );
    }

    #[test]
    fn test_wizard_result_lists_four_steps() {
        let colors = ColorChoice {
            combo: Some("Navy".to_string()),
            primary: "#0f172a".to_string(),
            secondary: "#2563eb".to_string(),
        };
        let result = present_wizard_result(
            StyleId::Corporate,
            &colors,
            "Alex Morgan",
            &Route::Portfolio("home".to_string()),
        );
        let numbers: Vec<u8> = result.content.steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(result.content.route, "/portfolio/home");
    }
}
