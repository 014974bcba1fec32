mod common;

use common::fixtures::*;
use common::{TEMPLATE_KEYS, TestResult, init_logger, render};
use serde_json::json;
use vitae::{InlineNode, RenderNode, Theme};

fn hrefs(tree: &RenderNode) -> Vec<String> {
    fn collect(nodes: &[InlineNode], out: &mut Vec<String>) {
        for node in nodes {
            match node {
                InlineNode::Hyperlink { href, children } => {
                    out.push(href.clone());
                    collect(children, out);
                }
                InlineNode::Strong { children }
                | InlineNode::Emphasis { children }
                | InlineNode::Span { children, .. } => collect(children, out),
                _ => {}
            }
        }
    }
    let mut out = Vec::new();
    for node in tree.descendants() {
        collect(node.inline_children(), &mut out);
    }
    out
}

#[test]
fn test_empty_phone_omits_only_the_phone_row() -> TestResult {
    init_logger();
    let resume = resume_with("/person/phone", json!(""));
    for key in TEMPLATE_KEYS {
        let tree = render(key, &resume, &Theme::default())?;
        assert_eq!(tree.count_by_id("contact-phone"), 0, "template '{}'", key);
        assert_eq!(tree.count_by_id("contact-email"), 1, "template '{}'", key);
        assert_eq!(tree.count_by_id("contact-website"), 1, "template '{}'", key);
        assert_eq!(tree.count_by_id("contact-address"), 1, "template '{}'", key);
    }
    Ok(())
}

#[test]
fn test_empty_email_omits_only_the_email_row() -> TestResult {
    init_logger();
    let resume = resume_with("/person/email", json!("   "));
    for key in TEMPLATE_KEYS {
        let tree = render(key, &resume, &Theme::default())?;
        assert_eq!(tree.count_by_id("contact-email"), 0, "template '{}'", key);
        assert_eq!(tree.count_by_id("contact-phone"), 1, "template '{}'", key);
    }
    Ok(())
}

#[test]
fn test_social_rows_show_shortened_urls() -> TestResult {
    init_logger();
    let resume = full_resume();
    for key in ["onyx", "charizard"] {
        let tree = render(key, &resume, &Theme::default())?;
        let github = tree.find_by_id("contact-github").ok_or("github row")?;
        assert_tree_contains_text!(github, "github.com/ada");
        let linkedin = tree.find_by_id("contact-linkedin").ok_or("linkedin row")?;
        assert_tree_contains_text!(linkedin, "linkedin.com/in/ada");
        assert_tree_lacks_text!(linkedin, "https://");
        assert!(hrefs(linkedin).contains(&"https://www.linkedin.com/in/ada/".to_string()));
    }
    Ok(())
}

#[test]
fn test_missing_social_links_are_omitted() -> TestResult {
    init_logger();
    let resume = resume_with("/person/social", json!({}));
    for key in ["onyx", "charizard"] {
        let tree = render(key, &resume, &Theme::default())?;
        assert_eq!(tree.count_by_id("contact-github"), 0);
        assert_eq!(tree.count_by_id("contact-linkedin"), 0);
    }
    Ok(())
}

#[test]
fn test_contact_links_use_schemes() -> TestResult {
    init_logger();
    let tree = render("onyx", &full_resume(), &Theme::default())?;
    let links = hrefs(&tree);
    assert!(links.contains(&"tel:+44 20 7946 0000".to_string()), "{:?}", links);
    assert!(links.contains(&"mailto:ada@example.com".to_string()), "{:?}", links);
    assert!(links.contains(&"http://ada.example.com".to_string()), "{:?}", links);
    Ok(())
}
