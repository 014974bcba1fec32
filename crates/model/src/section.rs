use serde::{Deserialize, Serialize};
use std::fmt;

/// The seven content sections, in editor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    Objective,
    Work,
    Education,
    Awards,
    Certifications,
    Skills,
    References,
}

impl SectionKey {
    pub const ALL: [SectionKey; 7] = [
        SectionKey::Objective,
        SectionKey::Work,
        SectionKey::Education,
        SectionKey::Awards,
        SectionKey::Certifications,
        SectionKey::Skills,
        SectionKey::References,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::Objective => "objective",
            SectionKey::Work => "work",
            SectionKey::Education => "education",
            SectionKey::Awards => "awards",
            SectionKey::Certifications => "certifications",
            SectionKey::Skills => "skills",
            SectionKey::References => "references",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ids the templates give their own layout containers.
pub const LAYOUT_IDS: [&str; 6] = ["header", "identity", "summary", "sidebar", "main", "contact"];

/// Prefix of contact row ids (`contact-phone`, `contact-email`, ...).
pub const CONTACT_ID_PREFIX: &str = "contact-";

/// Whether `id` belongs to the render tree's structure rather than to an item.
pub fn is_reserved_id(id: &str) -> bool {
    SectionKey::ALL.iter().any(|key| key.as_str() == id)
        || LAYOUT_IDS.contains(&id)
        || id.starts_with(CONTACT_ID_PREFIX)
}

/// Common surface of every item kind, used by the section composer.
pub trait SectionItem {
    fn id(&self) -> &str;

    /// Items without an enable flag are always shown.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// A named, independently toggleable group of items.
///
/// A missing enable flag means the section is hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section<I> {
    #[serde(default)]
    pub heading: String,
    #[serde(alias = "enable", default)]
    pub enabled: bool,
    #[serde(default = "Vec::new")]
    pub items: Vec<I>,
}

impl<I> Default for Section<I> {
    fn default() -> Self {
        Self { heading: String::new(), enabled: false, items: Vec::new() }
    }
}

impl<I: SectionItem> Section<I> {
    pub fn new(heading: impl Into<String>, items: Vec<I>) -> Self {
        Self { heading: heading.into(), enabled: true, items }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Items that should appear in output, in declaration order.
    ///
    /// Yields nothing when the section itself is disabled.
    pub fn visible_items(&self) -> impl Iterator<Item = &I> {
        self.items.iter().filter(move |item| self.enabled && item.is_enabled())
    }
}

/// The objective has a single body instead of items.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Objective {
    #[serde(alias = "enable", default)]
    pub enabled: bool,
    #[serde(default)]
    pub heading: String,
    #[serde(default)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::WorkItem;

    fn work(id: &str, enabled: bool) -> WorkItem {
        WorkItem { id: id.into(), enabled, ..Default::default() }
    }

    #[test]
    fn visible_items_keep_declaration_order() {
        let section = Section::new("Work", vec![work("b", true), work("a", false), work("c", true)]);
        let ids: Vec<_> = section.visible_items().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["b", "c"]);
    }

    #[test]
    fn disabled_section_yields_nothing() {
        let section = Section::new("Work", vec![work("a", true)]).disabled();
        assert_eq!(section.visible_items().count(), 0);
    }

    #[test]
    fn enable_is_accepted_as_alias() {
        let s: Section<WorkItem> =
            serde_json::from_str(r#"{"heading":"Work","enable":false,"items":[]}"#).unwrap();
        assert!(!s.enabled);
    }

    #[test]
    fn missing_enable_flag_hides_the_section() {
        let s: Section<WorkItem> =
            serde_json::from_str(r#"{"heading":"Work","items":[{"id":"w1","title":"Engineer"}]}"#).unwrap();
        assert!(!s.enabled);
        assert!(!s.items[0].enabled);
        assert_eq!(s.visible_items().count(), 0);

        let objective: Objective = serde_json::from_str(r#"{"heading":"Objective","body":"Build"}"#).unwrap();
        assert!(!objective.enabled);
    }

    #[test]
    fn structural_ids_are_reserved() {
        assert!(is_reserved_id("work"));
        assert!(is_reserved_id("sidebar"));
        assert!(is_reserved_id("contact-phone"));
        assert!(!is_reserved_id("work-1"));
        assert!(!is_reserved_id("contacts"));
    }

    #[test]
    fn keys_are_in_editor_order() {
        let names: Vec<_> = SectionKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            ["objective", "work", "education", "awards", "certifications", "skills", "references"]
        );
    }
}
