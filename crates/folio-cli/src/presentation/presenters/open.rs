use crate::presentation::view_models::{
    CommandResultViewModel, Guidance, OpenOutcome, OpenViewModel, StatusBadge,
};
use folio_runtime::RouteOutcome;
use folio_types::Route;
use std::path::PathBuf;

pub fn present_open(
    requested: &Route,
    visited: &[Route],
    outcome: RouteOutcome,
    output: Option<PathBuf>,
) -> CommandResultViewModel<OpenViewModel> {
    let visited_paths: Vec<String> = visited.iter().map(Route::path).collect();
    let redirected = visited.len() > 1;
    let to_stdout = output.is_none();

    let (kind, style, page_id, html) = match outcome {
        RouteOutcome::Render {
            style,
            page_id,
            html,
        } => (
            OpenOutcome::Rendered,
            Some(style.as_str().to_string()),
            Some(page_id),
            Some(html),
        ),
        RouteOutcome::TemplateNotFound { style, html } => {
            (OpenOutcome::TemplateNotFound, Some(style), None, Some(html))
        }
        RouteOutcome::Builder | RouteOutcome::Redirect(_) => {
            (OpenOutcome::Builder, None, None, None)
        }
    };

    let content = OpenViewModel {
        requested: requested.path(),
        visited: visited_paths.clone(),
        outcome: kind,
        style,
        page_id: page_id.clone(),
        output,
        html: if to_stdout { html } else { None },
    };
    let mut result = CommandResultViewModel::new(content);

    match kind {
        OpenOutcome::Builder => {
            result = result
                .with_badge(StatusBadge::info("Portfolio not generated yet"))
                .with_suggestion(
                    Guidance::new("Run the builder")
                        .with_command("folio wizard --style minimal --combo Monochrome"),
                );
        }
        OpenOutcome::TemplateNotFound => {
            result = result
                .with_badge(StatusBadge::warning("Template not found"))
                .with_suggestion(
                    Guidance::new("Pick a known style").with_command("folio style list"),
                );
        }
        // Piped HTML gets no decoration.
        OpenOutcome::Rendered if to_stdout => {}
        OpenOutcome::Rendered => {
            let page = page_id.unwrap_or_default();
            let label = if redirected {
                format!("Rendered {} (redirected from {})", page, requested.path())
            } else {
                format!("Rendered {}", page)
            };
            result = result.with_badge(StatusBadge::success(label));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::StyleId;

    #[test]
    fn test_rendered_to_stdout_has_no_badge() {
        let route = Route::Portfolio("home".to_string());
        let result = present_open(
            &route,
            std::slice::from_ref(&route),
            RouteOutcome::Render {
                style: StyleId::Minimal,
                page_id: "home".to_string(),
                html: "<html></html>".to_string(),
            },
            None,
        );
        assert!(result.badge.is_none());
        assert!(result.suggestions.is_empty());
        assert_eq!(result.content.html.as_deref(), Some("<html></html>"));
    }

    #[test]
    fn test_redirect_noted_when_written_to_file() {
        let requested = Route::Portfolio("contact".to_string());
        let visited = vec![requested.clone(), Route::Portfolio("home".to_string())];
        let result = present_open(
            &requested,
            &visited,
            RouteOutcome::Render {
                style: StyleId::Creative,
                page_id: "home".to_string(),
                html: String::new(),
            },
            Some(PathBuf::from("out.html")),
        );
        assert!(result.content.html.is_none());
        assert_eq!(
            result.badge.unwrap().label,
            "Rendered home (redirected from /portfolio/contact)"
        );
    }
}
