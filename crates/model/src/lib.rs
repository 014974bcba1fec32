//! Résumé and theme data model.
//!
//! Both snapshots are produced upstream by the editing layer and treated as
//! immutable by the renderers. [`Resume::from_json_value`] is the single
//! normalization point: it accepts the canonical `person` shape as well as
//! the older `basics` and `profile` shapes and always yields a canonical
//! [`Resume`].

pub mod error;
pub mod items;
mod legacy;
pub mod person;
pub mod resume;
pub mod section;
pub mod theme;

pub use error::SchemaViolation;
pub use items::{AwardItem, CertificationItem, EducationItem, ReferenceItem, SkillItem, WorkItem};
pub use person::{Address, Person, Social};
pub use resume::{Resume, Sections};
pub use section::{Objective, Section, SectionItem, SectionKey, is_reserved_id};
pub use theme::{Colors, Font, Theme};
