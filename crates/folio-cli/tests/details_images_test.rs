use folio_testing::{TestWorld, fixtures};
use folio_types::keys;

#[test]
fn test_oversized_image_is_rejected() {
    let world = TestWorld::new();
    let big = world.path("big.jpg");
    fixtures::write_jpeg_of_size(&big, 3 * 1024 * 1024).unwrap();

    let result = world
        .run(&["details", "image", "profile", big.to_str().unwrap()])
        .unwrap();

    assert!(!result.success());
    assert!(
        result.stderr().contains("File size should be less than 2MB"),
        "stderr: {}",
        result.stderr()
    );
    let profile = world
        .stored_json(keys::USER_DETAILS)
        .and_then(|user| user["profileImage"].as_str().map(String::from))
        .unwrap_or_default();
    assert_eq!(profile, "");
}

#[test]
fn test_non_image_is_rejected() {
    let world = TestWorld::new();
    let notes = world.path("notes.txt");
    fixtures::write_text(&notes, "not an image").unwrap();

    let result = world
        .run(&["details", "image", "background", notes.to_str().unwrap()])
        .unwrap();

    assert!(!result.success());
    assert!(result.stderr().contains("Please upload an image file"));
}

#[test]
fn test_png_becomes_data_uri() {
    let world = TestWorld::new();
    let png = world.path("me.png");
    fixtures::write_png(&png).unwrap();

    let result = world
        .run(&["details", "image", "profile", png.to_str().unwrap()])
        .unwrap();
    assert!(result.success(), "stderr: {}", result.stderr());

    let user = world.stored_json(keys::USER_DETAILS).expect("user stored");
    assert!(
        user["profileImage"]
            .as_str()
            .unwrap()
            .starts_with("data:image/png;base64,")
    );
}

#[test]
fn test_details_set_reports_missing_fields() {
    let world = TestWorld::new();

    let json = world
        .run_json(&["details", "set", "--name", "Sam Rivera", "--phone", ""])
        .expect("details set failed");

    assert_eq!(json["content"]["details"]["name"], "Sam Rivera");
    assert_eq!(json["content"]["complete"], false);
    assert_eq!(json["content"]["missing_fields"][0], "phone");
}

#[test]
fn test_skills_and_projects_edit_stored_record() {
    let world = TestWorld::new();

    assert!(world.run(&["skill", "add", "Rust"]).unwrap().success());
    assert!(!world.run(&["skill", "add", "Rust"]).unwrap().success());
    assert!(
        world
            .run(&["project", "add", "--title", "Folio", "--tag", "Rust", "--tag", "CLI"])
            .unwrap()
            .success()
    );

    let user = world.stored_json(keys::USER_DETAILS).expect("user stored");
    let skills: Vec<&str> = user["skills"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|s| s.as_str())
        .collect();
    assert_eq!(skills.iter().filter(|s| **s == "Rust").count(), 1);

    let last = user["projects"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["title"], "Folio");
    assert_eq!(last["tags"], serde_json::json!(["Rust", "CLI"]));
}

#[test]
fn test_quota_failure_is_a_warning() {
    let world = TestWorld::new().with_config("[storage]\nquota_bytes = 64\n");

    let json = world
        .run_json(&["details", "set", "--name", "Sam Rivera"])
        .expect("details set should still succeed");

    assert_eq!(json["badge"]["level"], "warning");
    assert_eq!(json["content"]["details"]["name"], "Sam Rivera");
    assert!(world.raw_value(keys::USER_DETAILS).is_none());
}
