pub mod builder;
pub mod details;
pub mod open;
pub mod pages;
pub mod system;

pub use builder::{
    present_color_list, present_colors, present_style_list, present_wizard_result,
};
pub use details::present_details;
pub use open::present_open;
pub use pages::{present_pages, present_sections};
pub use system::{present_init, present_overview, present_reset};

use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge};
use folio_runtime::PersistFailure;
use serde::Serialize;

/// Downgrade the badge to a warning when any write failed this run.
pub fn with_persist_failures<T>(
    result: CommandResultViewModel<T>,
    failures: &[PersistFailure],
) -> CommandResultViewModel<T>
where
    T: Serialize,
{
    if failures.is_empty() {
        return result;
    }

    let label = if failures.len() == 1 {
        "Saved for this run only: 1 value could not be stored".to_string()
    } else {
        format!(
            "Saved for this run only: {} values could not be stored",
            failures.len()
        )
    };

    let guides = failures
        .iter()
        .map(|failure| Guidance::new(format!("{}: {}", failure.key, failure.reason)))
        .collect();

    result
        .with_badge(StatusBadge::warning(label))
        .with_suggestions(guides)
        .with_suggestion(
            Guidance::new("Free space by removing large images")
                .with_command("folio details clear-image background"),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::{ResetViewModel, StatusLevel};

    #[test]
    fn test_failures_replace_badge() {
        let result = CommandResultViewModel::new(ResetViewModel { removed: 0 })
            .with_badge(StatusBadge::success("Done"));
        let failures = vec![PersistFailure {
            key: "userDetails".to_string(),
            reason: "storage quota exceeded".to_string(),
        }];

        let result = with_persist_failures(result, &failures);
        let badge = result.badge.unwrap();
        assert_eq!(badge.level, StatusLevel::Warning);
        assert!(result.suggestions[0].description.starts_with("userDetails:"));
    }

    #[test]
    fn test_no_failures_keeps_result() {
        let result = CommandResultViewModel::new(ResetViewModel { removed: 0 })
            .with_badge(StatusBadge::success("Done"));
        let result = with_persist_failures(result, &[]);
        assert_eq!(result.badge.unwrap().level, StatusLevel::Success);
        assert!(result.suggestions.is_empty());
    }
}
