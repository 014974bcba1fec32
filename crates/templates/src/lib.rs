//! The built-in résumé templates.
//!
//! Each template is a unit struct implementing [`Template`]. They share the
//! section composer and the layout pieces in [`parts`]; only their region
//! arrangement, typography and per-item layouts differ.

pub mod castform;
pub mod celebi;
pub mod charizard;
pub mod gengar;
pub mod glalie;
pub mod onyx;
pub mod parts;
pub mod pikachu;

pub use castform::Castform;
pub use celebi::Celebi;
pub use charizard::Charizard;
pub use gengar::Gengar;
pub use glalie::Glalie;
pub use onyx::Onyx;
pub use pikachu::Pikachu;

use std::sync::Arc;
use vitae_template_core::Template;

/// Every built-in template with its registry key, in display order.
pub fn builtin() -> Vec<(&'static str, Arc<dyn Template>)> {
    fn entry(key: &'static str, template: impl Template + 'static) -> (&'static str, Arc<dyn Template>) {
        (key, Arc::new(template))
    }

    vec![
        entry(onyx::KEY, Onyx),
        entry(pikachu::KEY, Pikachu),
        entry(gengar::KEY, Gengar),
        entry(castform::KEY, Castform),
        entry(glalie::KEY, Glalie),
        entry(celebi::KEY, Celebi),
        entry(charizard::KEY, Charizard),
    ]
}
