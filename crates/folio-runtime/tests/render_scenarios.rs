use folio_runtime::{Config, MemoryStore, RouteOutcome, Wizard, Workspace, follow_route};
use folio_types::{PageEditor, Project, Route, StyleId, UserDetails, keys};
use std::sync::Arc;

fn hydrated(memory: Arc<MemoryStore>) -> Workspace {
    let mut workspace = Workspace::with_store(memory, Config::default());
    workspace.hydrate();
    workspace
}

fn rendered_html(outcome: RouteOutcome) -> String {
    match outcome {
        RouteOutcome::Render { html, .. } => html,
        other => panic!("expected a rendered page, got {:?}", other),
    }
}

#[test]
fn test_minimal_projects_page_lists_stored_projects() -> anyhow::Result<()> {
    let stored = serde_json::json!({
        "name": "Sam Rivera",
        "projects": [
            { "title": "Weather Station", "description": "Sensors", "tags": ["Rust"], "image": null },
            { "title": "Recipe Box", "description": "Cooking", "tags": [] }
        ]
    });
    let memory = Arc::new(MemoryStore::seeded([
        (keys::PORTFOLIO_STYLE, "\"minimal\"".to_string()),
        (keys::PRIMARY_COLOR, "\"#111827\"".to_string()),
        (keys::SECONDARY_COLOR, "\"#6b7280\"".to_string()),
        (keys::USER_DETAILS, stored.to_string()),
    ]));
    let workspace = hydrated(memory);

    let (visited, outcome) = follow_route(
        &workspace.snapshot(),
        Route::parse("/portfolio/projects"),
        2026,
    );
    assert_eq!(visited.len(), 1);
    let html = rendered_html(outcome);

    let first = html.find("Weather Station").unwrap();
    let second = html.find("Recipe Box").unwrap();
    assert!(first < second);
    assert!(html.contains("Sam Rivera"));
    // Fields missing from storage keep their sample values.
    assert!(html.contains("Full Stack Developer"));
    Ok(())
}

#[test]
fn test_unfinished_builder_redirects_every_portfolio_route() {
    let workspace = hydrated(Arc::new(MemoryStore::new()));
    for page in ["home", "about", "nope"] {
        let (visited, outcome) =
            follow_route(&workspace.snapshot(), Route::Portfolio(page.to_string()), 2026);
        assert_eq!(visited.last(), Some(&Route::BuilderRoot));
        assert_eq!(outcome, RouteOutcome::Builder);
    }
}

#[test]
fn test_wizard_then_page_edits_shape_navigation() -> anyhow::Result<()> {
    let memory = Arc::new(MemoryStore::new());
    let mut workspace = hydrated(memory.clone());

    let mut details = UserDetails::sample();
    details.add_project(Project {
        title: "Folio".to_string(),
        description: "Portfolio generator".to_string(),
        tags: vec!["Rust".to_string()],
        image: String::new(),
    });

    let mut wizard = Wizard::new(workspace.user().clone());
    wizard.choose_style(StyleId::Corporate);
    wizard.choose_combo("Charcoal")?;
    wizard.set_details(details);
    let landing = wizard.finish(&mut workspace)?;
    assert_eq!(landing, Route::Portfolio("home".to_string()));

    let mut editor = PageEditor::new(workspace.pages().to_vec());
    editor.toggle("experience")?;
    editor.move_page(5, 1)?;
    workspace.set_pages(editor.into_pages());

    // Reopen from the same storage to read through persistence.
    let reopened = hydrated(memory);
    let snapshot = reopened.snapshot();
    let nav: Vec<String> = snapshot.navigation().into_iter().map(|p| p.id).collect();
    assert_eq!(nav, vec!["home", "contact", "about", "projects", "skills"]);

    let (visited, outcome) = follow_route(&snapshot, Route::parse("/portfolio/experience"), 2026);
    assert_eq!(visited.last(), Some(&Route::Portfolio("home".to_string())));
    let html = rendered_html(outcome);
    assert!(html.contains("#1f2937"));
    assert!(!html.contains("/portfolio/experience"));

    let projects = rendered_html(
        follow_route(&snapshot, Route::parse("/portfolio/projects"), 2026).1,
    );
    assert!(projects.contains("Portfolio generator"));
    Ok(())
}
