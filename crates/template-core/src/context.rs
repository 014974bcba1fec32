use crate::palette::{DEFAULT_TINT_ALPHA, Palette};
use vitae_idf::{NodeMetadata, RenderNode};
use vitae_markdown::{InlineRenderer, InlineSequence, render_or_plain};
use vitae_model::{Person, Resume, Sections, Theme};

/// Everything a template may read during one render call.
///
/// The snapshots are borrowed immutably; a template cannot mutate them.
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub resume: &'a Resume,
    pub theme: &'a Theme,
    pub palette: Palette,
    markdown: &'a dyn InlineRenderer,
}

impl<'a> RenderContext<'a> {
    pub fn new(resume: &'a Resume, theme: &'a Theme, markdown: &'a dyn InlineRenderer) -> Self {
        Self::with_tint_alpha(resume, theme, markdown, DEFAULT_TINT_ALPHA)
    }

    pub fn with_tint_alpha(
        resume: &'a Resume,
        theme: &'a Theme,
        markdown: &'a dyn InlineRenderer,
        tint_alpha: f32,
    ) -> Self {
        Self { resume, theme, palette: Palette::resolve(theme, tint_alpha), markdown }
    }

    pub fn person(&self) -> &'a Person {
        &self.resume.person
    }

    pub fn sections(&self) -> &'a Sections {
        &self.resume.sections
    }

    /// Formats free text through the markdown capability.
    pub fn inline(&self, text: &str) -> InlineSequence {
        render_or_plain(self.markdown, text)
    }

    /// Wraps formatted free text in a `Markdown` block.
    ///
    /// Blank text produces no block.
    pub fn markdown(&self, text: &str) -> Option<RenderNode> {
        if text.trim().is_empty() {
            return None;
        }
        let children = self.inline(text).into_nodes();
        if children.is_empty() {
            return None;
        }
        Some(RenderNode::Markdown { meta: NodeMetadata::default(), children })
    }
}
