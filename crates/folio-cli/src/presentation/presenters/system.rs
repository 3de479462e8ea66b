use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, InitViewModel, OverviewViewModel, RecoveredKey,
    ResetViewModel, StatusBadge,
};
use folio_types::StoredConfig;
use std::path::Path;

pub fn present_init(
    data_dir: &Path,
    config_path: &Path,
    config_written: bool,
    stored_keys: Vec<String>,
    recovered: Vec<(String, String)>,
) -> CommandResultViewModel<InitViewModel> {
    let recovered: Vec<RecoveredKey> = recovered
        .into_iter()
        .map(|(key, reason)| RecoveredKey { key, reason })
        .collect();
    let had_recoveries = !recovered.is_empty();
    let fresh = stored_keys.is_empty();

    let mut result = CommandResultViewModel::new(InitViewModel {
        data_dir: data_dir.to_path_buf(),
        config_path: config_path.to_path_buf(),
        config_written,
        stored_keys,
        recovered,
    });

    if had_recoveries {
        result = result
            .with_badge(StatusBadge::warning("Some stored values were unreadable"))
            .with_suggestion(
                Guidance::new("Check what was kept").with_command("folio details show"),
            );
    } else {
        result = result.with_badge(StatusBadge::success("Workspace ready"));
    }

    if fresh {
        result = result.with_suggestion(
            Guidance::new("Build your portfolio in one step")
                .with_command("folio wizard --style minimal --combo Monochrome"),
        );
    }

    result
}

pub fn present_reset(removed: usize) -> CommandResultViewModel<ResetViewModel> {
    let badge = if removed == 0 {
        StatusBadge::info("Nothing stored")
    } else {
        StatusBadge::success("Stored values removed")
    };
    CommandResultViewModel::new(ResetViewModel { removed }).with_badge(badge)
}

pub fn present_overview(
    data_dir: &Path,
    config: &StoredConfig,
) -> CommandResultViewModel<OverviewViewModel> {
    let ready = config.style.is_some() && config.colors().is_some();
    let navigation: Vec<String> = config.navigation().into_iter().map(|p| p.id).collect();
    let first_page = navigation.first().cloned();

    let mut result = CommandResultViewModel::new(OverviewViewModel {
        data_dir: data_dir.to_path_buf(),
        style: config.style.clone(),
        primary_color: config.primary_color.clone(),
        secondary_color: config.secondary_color.clone(),
        name: config.user_details.name.clone(),
        details_complete: config.user_details.is_complete(),
        navigation,
        ready,
    });

    if ready {
        if let Some(page) = first_page {
            result = result.with_suggestion(
                Guidance::new("Render your portfolio")
                    .with_command(format!("folio open /portfolio/{} --output index.html", page)),
            );
        }
        result = result
            .with_suggestion(Guidance::new("Reorder pages").with_command("folio pages list"));
    } else {
        result = result
            .with_suggestion(
                Guidance::new("Build your portfolio in one step")
                    .with_command("folio wizard --style minimal --combo Monochrome"),
            )
            .with_suggestion(Guidance::new("Or step by step").with_command("folio style list"));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_of_fresh_store_points_at_wizard() {
        let result = present_overview(Path::new("/tmp/folio"), &StoredConfig::default());
        assert!(!result.content.ready);
        assert_eq!(result.content.navigation.len(), 6);
        assert!(
            result.suggestions[0]
                .command
                .as_deref()
                .unwrap()
                .starts_with("folio wizard")
        );
    }
}
