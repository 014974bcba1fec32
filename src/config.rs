use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Arc;
use vitae_markdown::{CommonMarkRenderer, DEFAULT_MAX_INPUT_LEN, InlineRenderer, PlainTextRenderer};
use vitae_template_core::DEFAULT_TINT_ALPHA;

/// Selects the backend behind the inline markdown capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkdownMode {
    /// CommonMark inline formatting via `pulldown-cmark`. (Default)
    #[default]
    #[serde(rename = "commonmark")]
    CommonMark,
    /// No formatting; blank lines still separate paragraphs.
    Plain,
}

/// Engine-wide settings shared by every render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    pub markdown: MarkdownMode,
    /// Free text longer than this is shown unformatted.
    pub max_markdown_input: usize,
    /// Alpha of the accent tint behind tinted regions.
    pub tint_alpha: f32,
    /// Check item ids before every render.
    pub validate: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            markdown: MarkdownMode::default(),
            max_markdown_input: DEFAULT_MAX_INPUT_LEN,
            tint_alpha: DEFAULT_TINT_ALPHA,
            validate: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = serde_json::from_str(json)?;
        if !(0.0..=1.0).contains(&config.tint_alpha) {
            return Err(EngineError::Config(format!(
                "tintAlpha must be between 0 and 1, got {}",
                config.tint_alpha
            )));
        }
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let source = crate::read_input(path.as_ref(), "config")?;
        Self::from_json_str(&source)
    }

    /// Instantiates the configured markdown backend.
    pub fn markdown_renderer(&self) -> Arc<dyn InlineRenderer> {
        match self.markdown {
            MarkdownMode::CommonMark => {
                Arc::new(CommonMarkRenderer::new().with_max_input_len(self.max_markdown_input))
            }
            MarkdownMode::Plain => Arc::new(PlainTextRenderer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{"markdown":"plain","tintAlpha":0.2}"#).unwrap();
        assert_eq!(config.markdown, MarkdownMode::Plain);
        assert_eq!(config.tint_alpha, 0.2);
        assert!(config.validate);
        assert_eq!(config.max_markdown_input, 16 * 1024);
        assert_eq!(config.markdown_renderer().name(), "plain");
    }

    #[test]
    fn commonmark_is_the_default_backend() {
        let config = EngineConfig::from_json_str("{}").unwrap();
        assert_eq!(config.markdown, MarkdownMode::CommonMark);
        assert_eq!(config.markdown_renderer().name(), "commonmark");
    }

    #[test]
    fn out_of_range_alpha_is_rejected() {
        assert!(matches!(EngineConfig::from_json_str(r#"{"tintAlpha":1.5}"#), Err(EngineError::Config(_))));
    }

    #[test]
    fn unknown_backend_is_a_json_error() {
        assert!(matches!(EngineConfig::from_json_str(r#"{"markdown":"html"}"#), Err(EngineError::Json(_))));
    }
}
