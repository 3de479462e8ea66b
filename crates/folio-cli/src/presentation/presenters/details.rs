use crate::presentation::view_models::{
    CommandResultViewModel, DetailsViewModel, Guidance, StatusBadge,
};
use folio_types::UserDetails;

/// `label` is the success message for an edit; `None` for a plain show.
pub fn present_details(
    user: &UserDetails,
    label: Option<String>,
) -> CommandResultViewModel<DetailsViewModel> {
    let missing_fields: Vec<String> = user
        .missing_fields()
        .into_iter()
        .map(String::from)
        .collect();

    let mut result = CommandResultViewModel::new(DetailsViewModel {
        details: user.clone(),
        complete: missing_fields.is_empty(),
        missing_fields: missing_fields.clone(),
    });

    if let Some(label) = label {
        result = result.with_badge(StatusBadge::success(label));
    }

    if let Some(field) = missing_fields.first() {
        result = result.with_suggestion(
            Guidance::new(format!("Fill in your {}", field))
                .with_command(format!("folio details set --{} <VALUE>", field)),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incomplete_details_suggest_first_missing_field() {
        let mut user = UserDetails::sample();
        user.email.clear();
        user.phone.clear();

        let result = present_details(&user, None);
        assert!(!result.content.complete);
        assert_eq!(result.content.missing_fields, vec!["email", "phone"]);
        assert_eq!(
            result.suggestions[0].command.as_deref(),
            Some("folio details set --email <VALUE>")
        );
    }
}
