mod common;

use common::fixtures::*;
use common::{TEMPLATE_KEYS, TestResult, init_logger, node_by_id, render};
use vitae::{Resume, Theme};

#[test]
fn test_basics_document_renders_in_every_template() -> TestResult {
    init_logger();
    let resume = Resume::from_json_value(legacy_basics_json())?;
    assert_eq!(resume.person.first_name, "Grace");
    assert_eq!(resume.person.last_name, "Hopper");

    for key in TEMPLATE_KEYS {
        let tree = render(key, &resume, &Theme::default())?;
        assert_tree_contains_text!(tree, "Grace");
        assert_tree_contains_text!(tree, "Arlington, VA");
        assert_tree_contains_text!(node_by_id(&tree, "w1")?, "US Navy");
        assert_eq!(tree.count_by_id("contact-website"), 0, "template '{}'", key);
        assert_eq!(tree.count_by_id("education"), 0);
    }
    Ok(())
}

#[test]
fn test_bare_skills_get_positional_ids() -> TestResult {
    init_logger();
    let resume = Resume::from_json_value(legacy_basics_json())?;
    let tree = render("onyx", &resume, &Theme::default())?;
    let skills = node_by_id(&tree, "skills")?;
    assert_eq!(common::ids_in_order(skills, &["skill-1", "skill-2"]), vec!["skill-1", "skill-2"]);
    assert_tree_contains_text!(skills, "COBOL");
    Ok(())
}

#[test]
fn test_missing_enable_flags_hide_sections_and_items() -> TestResult {
    init_logger();
    let mut doc = legacy_basics_json();
    doc["work"].as_object_mut().ok_or("work object")?.remove("enable");
    doc["work"]["items"][0].as_object_mut().ok_or("work item")?.remove("enable");
    doc["education"] = serde_json::json!({
        "heading": "Education",
        "enable": true,
        "items": [{ "id": "e1", "name": "Yale" }]
    });
    let resume = Resume::from_json_value(doc)?;

    for key in TEMPLATE_KEYS {
        let tree = render(key, &resume, &Theme::default())?;
        assert_eq!(tree.count_by_id("work"), 0, "template '{}' showed an unflagged section", key);
        assert_eq!(tree.count_by_id("w1"), 0);
        assert_eq!(tree.count_by_id("education"), 1);
        assert_eq!(tree.count_by_id("e1"), 0, "template '{}' showed an unflagged item", key);
        assert_tree_lacks_text!(tree, "Yale");
        assert_eq!(tree.count_by_id("skills"), 1);
    }
    Ok(())
}
