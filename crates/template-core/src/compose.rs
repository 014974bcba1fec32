//! The shared section algorithm.
//!
//! Every template renders sections the same way: nothing at all for an absent
//! or disabled section, otherwise a block carrying the section key as its id,
//! an optional heading, and the enabled items in declaration order. Templates
//! only supply the visual pieces through callbacks.

use vitae_idf::{NodeMetadata, RenderNode};
use vitae_model::{Objective, Section, SectionItem, SectionKey};
use vitae_style::ElementStyle;

type HeadingFn<'f> = Box<dyn FnOnce(&str) -> RenderNode + 'f>;
type ContainerFn<'f> = Box<dyn FnOnce(Vec<RenderNode>) -> RenderNode + 'f>;

pub const SECTION_CLASS: &str = "section";

struct Frame<'f> {
    key: SectionKey,
    heading: Option<HeadingFn<'f>>,
    style: ElementStyle,
}

impl<'f> Frame<'f> {
    fn new(key: SectionKey) -> Self {
        Self { key, heading: None, style: ElementStyle::default() }
    }

    fn assemble(self, title: &str, body: impl IntoIterator<Item = RenderNode>) -> RenderNode {
        let mut children = Vec::new();
        if let Some(heading) = self.heading
            && !title.trim().is_empty()
        {
            children.push(heading(title));
        }
        children.extend(body);

        RenderNode::Block {
            meta: NodeMetadata {
                id: Some(self.key.as_str().to_string()),
                classes: vec![SECTION_CLASS.to_string()],
                style: self.style,
            },
            children,
        }
    }
}

/// Composes one item section.
///
/// ```ignore
/// SectionComposer::new(SectionKey::Work, ctx.sections().work.as_ref())
///     .heading(|title| section_heading(ctx, title))
///     .compose(|item| work_item(ctx, item))
/// ```
pub struct SectionComposer<'s, 'f, I> {
    frame: Frame<'f>,
    section: Option<&'s Section<I>>,
    container: Option<ContainerFn<'f>>,
}

impl<'s, 'f, I: SectionItem> SectionComposer<'s, 'f, I> {
    pub fn new(key: SectionKey, section: Option<&'s Section<I>>) -> Self {
        Self { frame: Frame::new(key), section, container: None }
    }

    /// Renders the section heading. Without this the section has no heading.
    pub fn heading(mut self, render: impl FnOnce(&str) -> RenderNode + 'f) -> Self {
        self.frame.heading = Some(Box::new(render));
        self
    }

    /// Wraps the rendered items in a container (a grid, a list) instead of
    /// placing them directly under the section block.
    pub fn items_in(mut self, wrap: impl FnOnce(Vec<RenderNode>) -> RenderNode + 'f) -> Self {
        self.container = Some(Box::new(wrap));
        self
    }

    pub fn style(mut self, style: ElementStyle) -> Self {
        self.frame.style = style;
        self
    }

    /// Runs the composition. Returns `None` for an absent or disabled section.
    ///
    /// Item nodes that carry no id of their own are given the item's id.
    pub fn compose(self, mut render_item: impl FnMut(&I) -> RenderNode) -> Option<RenderNode> {
        let section = self.section.filter(|s| s.enabled)?;

        let items: Vec<RenderNode> = section
            .visible_items()
            .map(|item| {
                let mut node = render_item(item);
                node.meta_mut().id.get_or_insert_with(|| item.id().to_string());
                node
            })
            .collect();

        let body = match self.container {
            Some(wrap) => vec![wrap(items)],
            None => items,
        };
        Some(self.frame.assemble(&section.heading, body))
    }
}

/// Composes the objective, which has a body instead of items.
pub struct ObjectiveComposer<'s, 'f> {
    frame: Frame<'f>,
    objective: Option<&'s Objective>,
}

impl<'s, 'f> ObjectiveComposer<'s, 'f> {
    pub fn new(objective: Option<&'s Objective>) -> Self {
        Self { frame: Frame::new(SectionKey::Objective), objective }
    }

    pub fn heading(mut self, render: impl FnOnce(&str) -> RenderNode + 'f) -> Self {
        self.frame.heading = Some(Box::new(render));
        self
    }

    pub fn style(mut self, style: ElementStyle) -> Self {
        self.frame.style = style;
        self
    }

    /// `render_body` receives the raw body text and may return nothing for a
    /// blank body; the objective block itself still appears.
    pub fn compose(self, render_body: impl FnOnce(&str) -> Option<RenderNode>) -> Option<RenderNode> {
        let objective = self.objective.filter(|o| o.enabled)?;
        Some(self.frame.assemble(&objective.heading, render_body(&objective.body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_idf::InlineNode;
    use vitae_model::{SkillItem, WorkItem};

    fn title(text: &str) -> RenderNode {
        RenderNode::Heading { meta: NodeMetadata::default(), level: 2, children: vec![InlineNode::text(text)] }
    }

    fn line(text: &str) -> RenderNode {
        RenderNode::Paragraph { meta: NodeMetadata::default(), children: vec![InlineNode::text(text)] }
    }

    fn work(id: &str, title: &str, enabled: bool) -> WorkItem {
        WorkItem { id: id.into(), title: title.into(), enabled, ..Default::default() }
    }

    #[test]
    fn enabled_items_in_declaration_order_with_ids() {
        let section = Section::new("Work", vec![work("b", "B", true), work("x", "X", false), work("a", "A", true)]);
        let node = SectionComposer::new(SectionKey::Work, Some(&section))
            .heading(title)
            .compose(|w| line(&w.title))
            .expect("section");

        assert_eq!(node.id(), Some("work"));
        assert_eq!(node.text_content(), "Work\nB\nA\n");
        let ids: Vec<_> = node.children()[1..].iter().map(|c| c.id()).collect();
        assert_eq!(ids, [Some("b"), Some("a")]);
    }

    #[test]
    fn absent_or_disabled_sections_produce_nothing() {
        let disabled = Section::new("Work", vec![work("a", "A", true)]).disabled();
        assert!(SectionComposer::new(SectionKey::Work, Some(&disabled)).compose(|w| line(&w.title)).is_none());
        assert!(SectionComposer::<WorkItem>::new(SectionKey::Work, None).compose(|w| line(&w.title)).is_none());
    }

    #[test]
    fn skills_are_never_filtered() {
        let section = Section::new(
            "Skills",
            vec![SkillItem { id: "s1".into(), skill: "Rust".into() }, SkillItem { id: "s2".into(), skill: "Go".into() }],
        );
        let node = SectionComposer::new(SectionKey::Skills, Some(&section))
            .items_in(|items| RenderNode::Grid { meta: NodeMetadata::default(), columns: 2, children: items })
            .compose(|s| line(&s.skill))
            .expect("section");
        assert_eq!(node.children().len(), 1);
        assert_eq!(node.children()[0].children().len(), 2);
        assert_eq!(node.count_by_id("s2"), 1);
    }

    #[test]
    fn blank_heading_is_skipped() {
        let section = Section::new("  ", vec![work("a", "A", true)]);
        let node = SectionComposer::new(SectionKey::Work, Some(&section))
            .heading(title)
            .compose(|w| line(&w.title))
            .expect("section");
        assert_eq!(node.children().len(), 1);
    }

    #[test]
    fn objective_respects_enable_flag() {
        let mut objective = Objective { enabled: true, heading: "Objective".into(), body: "Build".into() };
        let node = ObjectiveComposer::new(Some(&objective)).heading(title).compose(|b| Some(line(b)));
        assert_eq!(node.map(|n| n.text_content()), Some("Objective\nBuild\n".to_string()));

        objective.enabled = false;
        assert!(ObjectiveComposer::new(Some(&objective)).compose(|b| Some(line(b))).is_none());
    }
}
