use crate::section::SectionItem;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start: String,
    pub end: String,
    #[serde(alias = "enable")]
    pub enabled: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EducationItem {
    pub id: String,
    pub name: String,
    pub major: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub grade: String,
    pub start: String,
    pub end: String,
    #[serde(alias = "enable")]
    pub enabled: bool,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AwardItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    #[serde(alias = "enable")]
    pub enabled: bool,
    pub description: String,
}

/// Certifications share the award layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CertificationItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    #[serde(alias = "enable")]
    pub enabled: bool,
    pub description: String,
}

/// A skill has no enable flag of its own.
///
/// Older documents store skills as bare strings; those are accepted and get
/// an id from their position when the section is normalized.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SkillItem {
    pub id: String,
    pub skill: String,
}

impl<'de> Deserialize<'de> for SkillItem {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Bare(String),
            Full {
                #[serde(default)]
                id: String,
                #[serde(default)]
                skill: String,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Bare(skill) => SkillItem { id: String::new(), skill },
            Repr::Full { id, skill } => SkillItem { id, skill },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferenceItem {
    pub id: String,
    pub name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
    #[serde(alias = "enable")]
    pub enabled: bool,
    pub description: String,
}

macro_rules! impl_section_item {
    ($($item:ty),* $(,)?) => {
        $(
            impl SectionItem for $item {
                fn id(&self) -> &str {
                    &self.id
                }

                fn is_enabled(&self) -> bool {
                    self.enabled
                }
            }
        )*
    };
}

impl_section_item!(WorkItem, EducationItem, AwardItem, CertificationItem, ReferenceItem);

impl SectionItem for SkillItem {
    fn id(&self) -> &str {
        &self.id
    }
}
