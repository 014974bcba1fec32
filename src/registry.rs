//! Dispatch from template keys to renderers.
//!
//! A [`TemplateRegistry`] is filled once at startup (usually through
//! [`RegistryBuilder`]) and only read afterwards. Rendering borrows it
//! immutably, so one registry can serve any number of threads.

use crate::config::EngineConfig;
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use vitae_idf::RenderNode;
use vitae_markdown::InlineRenderer;
use vitae_model::{Resume, Theme};
use vitae_template_core::{RenderContext, Template, TemplateError};

pub struct TemplateRegistry {
    templates: HashMap<String, Arc<dyn Template>>,
    markdown: Arc<dyn InlineRenderer>,
    config: EngineConfig,
}

impl TemplateRegistry {
    /// An empty registry. See [`RegistryBuilder`] for one with the built-ins.
    pub fn new(config: EngineConfig) -> Self {
        Self { templates: HashMap::new(), markdown: config.markdown_renderer(), config }
    }

    /// Registers `template` under `key`. A key that is already present is
    /// overwritten and a warning is logged.
    pub fn register(&mut self, key: impl Into<String>, template: impl Template + 'static) -> &mut Self {
        self.register_shared(key, Arc::new(template))
    }

    pub fn register_shared(&mut self, key: impl Into<String>, template: Arc<dyn Template>) -> &mut Self {
        let key = key.into();
        if self.templates.insert(key.clone(), template).is_some() {
            warn!("template '{}' re-registered; previous renderer replaced", key);
        }
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.templates.contains_key(key)
    }

    /// Registered keys in lexical order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.templates.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Renders `resume` with `theme` through the template registered under `key`.
    ///
    /// Fails with [`TemplateError::NotFound`] for an unknown key; no fallback
    /// template is substituted. A template whose tree does not start at a
    /// `root` node fails with [`TemplateError::Render`].
    pub fn render(&self, key: &str, resume: &Resume, theme: &Theme) -> Result<RenderNode, TemplateError> {
        let template = self
            .templates
            .get(key)
            .ok_or_else(|| TemplateError::NotFound { key: key.to_string() })?;

        if self.config.validate {
            resume.validate()?;
        }

        let ctx = RenderContext::with_tint_alpha(resume, theme, self.markdown.as_ref(), self.config.tint_alpha);
        let tree = template.render(&ctx)?;
        if !matches!(tree, RenderNode::Root { .. }) {
            return Err(TemplateError::Render(format!(
                "template '{}' returned a '{}' node; a render tree must start at 'root'",
                key,
                tree.kind()
            )));
        }
        debug!("rendered template '{}' ({} nodes)", key, tree.descendants().len());
        Ok(tree)
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TemplateRegistry")
            .field("templates", &self.keys())
            .field("markdown", &self.markdown.name())
            .field("config", &self.config)
            .finish()
    }
}

/// Fluent construction of a [`TemplateRegistry`].
pub struct RegistryBuilder {
    config: EngineConfig,
    builtins: bool,
    extra: Vec<(String, Arc<dyn Template>)>,
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self { config: EngineConfig::default(), builtins: true, extra: Vec::new() }
    }
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Whether the seven built-in templates are registered. Defaults to `true`.
    pub fn with_builtins(mut self, enabled: bool) -> Self {
        self.builtins = enabled;
        self
    }

    /// Adds a template. Registered after the built-ins, so it may replace one.
    pub fn register(mut self, key: impl Into<String>, template: impl Template + 'static) -> Self {
        self.extra.push((key.into(), Arc::new(template)));
        self
    }

    pub fn build(self) -> TemplateRegistry {
        let mut registry = TemplateRegistry::new(self.config);
        if self.builtins {
            for (key, template) in vitae_templates::builtin() {
                registry.register_shared(key, template);
            }
        }
        for (key, template) in self.extra {
            registry.register_shared(key, template);
        }
        info!(
            "Template registry ready: {} templates, {} markdown",
            registry.len(),
            registry.markdown.name()
        );
        registry
    }
}

static GLOBAL_REGISTRY: Lazy<TemplateRegistry> = Lazy::new(|| RegistryBuilder::new().build());

/// The process-wide registry holding the built-in templates and the default config.
pub fn global_registry() -> &'static TemplateRegistry {
    &GLOBAL_REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitae_idf::NodeMetadata;

    fn stub(_ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        Ok(RenderNode::Root { meta: NodeMetadata::with_id("stub"), children: vec![] })
    }

    #[test]
    fn unknown_key_is_not_found() {
        let registry = TemplateRegistry::new(EngineConfig::default());
        let err = registry.render("nope", &Resume::default(), &Theme::default()).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound { ref key } if key == "nope"));
    }

    #[test]
    fn builder_registers_builtins_and_extras() {
        let registry = RegistryBuilder::new().register("stub", stub).build();
        assert_eq!(registry.len(), 8);
        assert!(registry.contains("onyx"));
        assert!(registry.contains("stub"));
        assert_eq!(registry.keys().first(), Some(&"castform"));
    }

    #[test]
    fn re_registering_replaces_the_renderer() {
        let mut registry = RegistryBuilder::new().build();
        registry.register("onyx", stub);
        let tree = registry.render("onyx", &Resume::default(), &Theme::default()).unwrap();
        assert_eq!(tree.id(), Some("stub"));
        assert_eq!(registry.len(), 7);
    }

    fn bare_block(_ctx: &RenderContext<'_>) -> Result<RenderNode, TemplateError> {
        Ok(RenderNode::Block { meta: NodeMetadata::default(), children: vec![] })
    }

    #[test]
    fn tree_without_root_is_a_render_error() {
        let mut registry = TemplateRegistry::new(EngineConfig::default());
        registry.register("bare", bare_block);
        let err = registry.render("bare", &Resume::default(), &Theme::default()).unwrap_err();
        assert!(matches!(err, TemplateError::Render(ref msg) if msg.contains("'block'")));
    }

    #[test]
    fn builtins_can_be_left_out() {
        let registry = RegistryBuilder::new().with_builtins(false).build();
        assert!(registry.is_empty());
    }
}
