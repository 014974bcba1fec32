pub mod fixtures;
pub mod tree_assertions;

use vitae::{RenderNode, Resume, Theme, TemplateError, global_registry};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Every built-in template key.
pub const TEMPLATE_KEYS: [&str; 7] = ["onyx", "pikachu", "gengar", "castform", "glalie", "celebi", "charizard"];

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn render(key: &str, resume: &Resume, theme: &Theme) -> Result<RenderNode, TemplateError> {
    global_registry().render(key, resume, theme)
}

/// Ids of `tree`'s descendants that appear in `wanted`, in document order.
pub fn ids_in_order<'a>(tree: &'a RenderNode, wanted: &[&str]) -> Vec<&'a str> {
    tree.descendants()
        .into_iter()
        .filter_map(|node| node.id())
        .filter(|id| wanted.contains(id))
        .collect()
}

/// The subtree carrying `id`, or a descriptive error.
pub fn node_by_id<'a>(tree: &'a RenderNode, id: &str) -> Result<&'a RenderNode, String> {
    tree.find_by_id(id).ok_or_else(|| format!("no node with id '{}'", id))
}
