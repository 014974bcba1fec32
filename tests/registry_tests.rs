mod common;

use common::fixtures::*;
use common::{TEMPLATE_KEYS, TestResult, init_logger, render};
use serde_json::json;
use vitae::{
    EngineConfig, NodeMetadata, RegistryBuilder, RenderContext, RenderNode, Resume, SchemaViolation, TemplateError,
    Theme, global_registry,
};

#[test]
fn test_global_registry_holds_builtins() {
    init_logger();
    let mut expected = TEMPLATE_KEYS.to_vec();
    expected.sort_unstable();
    assert_eq!(global_registry().keys(), expected);
}

#[test]
fn test_unknown_template_is_not_found() {
    init_logger();
    let err = render("nonexistent-template", &full_resume(), &Theme::default()).unwrap_err();
    match err {
        TemplateError::NotFound { key } => assert_eq!(key, "nonexistent-template"),
        other => panic!("expected NotFound, got {:?}", other),
    }
}

#[test]
fn test_top_level_render_uses_global_registry() -> TestResult {
    init_logger();
    let via_fn = vitae::render("onyx", &full_resume(), &Theme::default())?;
    let via_registry = global_registry().render("onyx", &full_resume(), &Theme::default())?;
    assert_eq!(via_fn, via_registry);
    Ok(())
}

#[test]
fn test_rendering_is_deterministic() -> TestResult {
    init_logger();
    let resume = full_resume();
    let theme = theme_with_accent("#3f51b5");
    for key in TEMPLATE_KEYS {
        let first = serde_json::to_string(&render(key, &resume, &theme)?)?;
        let second = serde_json::to_string(&render(key, &resume, &theme)?)?;
        assert_eq!(first, second, "template '{}' is not deterministic", key);
    }
    Ok(())
}

#[test]
fn test_parallel_renders_match_sequential() -> TestResult {
    init_logger();
    let resume = full_resume();
    let theme = Theme::default();
    let mut sequential = Vec::new();
    for key in TEMPLATE_KEYS {
        sequential.push(serde_json::to_string(&render(key, &resume, &theme)?)?);
    }

    let parallel: Vec<String> = std::thread::scope(|scope| {
        let handles: Vec<_> = TEMPLATE_KEYS
            .iter()
            .map(|key| {
                let (resume, theme) = (&resume, &theme);
                scope.spawn(move || {
                    let tree = global_registry().render(key, resume, theme).expect("render succeeds");
                    serde_json::to_string(&tree).expect("tree serializes")
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().expect("render thread panicked")).collect()
    });

    assert_eq!(sequential, parallel);
    Ok(())
}

fn marker(ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
    Ok(RenderNode::Root { meta: NodeMetadata::with_id(ctx.person().full_name()), children: vec![] })
}

#[test]
fn test_custom_template_overrides_builtin() -> TestResult {
    init_logger();
    let registry = RegistryBuilder::new().register("onyx", marker).build();
    assert_eq!(registry.len(), TEMPLATE_KEYS.len());
    let tree = registry.render("onyx", &full_resume(), &Theme::default())?;
    assert_eq!(tree.id(), Some("Ada Lovelace"));
    Ok(())
}

#[test]
fn test_register_after_build() -> TestResult {
    init_logger();
    let mut registry = RegistryBuilder::new().with_builtins(false).build();
    assert!(!registry.contains("marker"));
    registry.register("marker", marker);
    assert_eq!(registry.keys(), vec!["marker"]);
    assert!(registry.render("onyx", &full_resume(), &Theme::default()).is_err());
    Ok(())
}

#[test]
fn test_duplicate_ids_fail_validation() {
    init_logger();
    let resume = resume_with("/sections/work/items/1/id", json!("job-engineer"));
    let err = render("onyx", &resume, &Theme::default()).unwrap_err();
    assert!(matches!(
        err,
        TemplateError::SchemaViolation(SchemaViolation::DuplicateId { section: "work", ref id }) if id == "job-engineer"
    ));
}

#[test]
fn test_layout_ids_fail_validation() {
    init_logger();
    for reserved in ["contact-email", "education", "main"] {
        let resume = resume_with("/sections/awards/items/0/id", json!(reserved));
        let err = render("pikachu", &resume, &Theme::default()).unwrap_err();
        assert!(
            matches!(
                err,
                TemplateError::SchemaViolation(SchemaViolation::ReservedId { section: "awards", ref id }) if id == reserved
            ),
            "'{}' was accepted as an item id",
            reserved
        );
    }
}

#[test]
fn test_validation_can_be_disabled() -> TestResult {
    init_logger();
    let resume = resume_with("/sections/work/items/1/id", json!("job-engineer"));
    let config = EngineConfig { validate: false, ..EngineConfig::default() };
    let registry = RegistryBuilder::new().with_config(config).build();
    let tree = registry.render("onyx", &resume, &Theme::default())?;
    assert_eq!(tree.count_by_id("job-engineer"), 2);
    Ok(())
}

#[test]
fn test_document_without_person_is_rejected() {
    init_logger();
    let err = Resume::from_json_value(json!({ "sections": {} })).unwrap_err();
    assert!(matches!(err, SchemaViolation::MissingField { ref field } if field == "person"));
}

fn name_only(ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
    use vitae::dsl::TemplateBuilder;
    use vitae::dsl::builders::*;
    Ok(Root::new().child(Heading::new(1, ctx.person().full_name())).into_node())
}

#[test]
fn test_dsl_template_registers_alongside_builtins() -> TestResult {
    init_logger();
    let registry = RegistryBuilder::new().register("name-only", name_only).build();
    assert_eq!(registry.len(), TEMPLATE_KEYS.len() + 1);
    let tree = registry.render("name-only", &full_resume(), &Theme::default())?;
    assert_tree_contains_text!(tree, "Ada Lovelace");
    Ok(())
}
