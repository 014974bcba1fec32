use crate::error::SchemaViolation;
use crate::items::{AwardItem, CertificationItem, EducationItem, ReferenceItem, SkillItem, WorkItem};
use crate::legacy;
use crate::person::Person;
use crate::section::{Objective, Section, SectionItem, SectionKey, is_reserved_id};
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// All content sections. An absent section renders exactly like a disabled one.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sections {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<Objective>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work: Option<Section<WorkItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<Section<EducationItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub awards: Option<Section<AwardItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<Section<CertificationItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Section<SkillItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Section<ReferenceItem>>,
}

impl Sections {
    /// Whether the section exists and is switched on.
    pub fn is_enabled(&self, key: SectionKey) -> bool {
        fn on<I>(s: &Option<Section<I>>) -> bool {
            s.as_ref().is_some_and(|s| s.enabled)
        }
        match key {
            SectionKey::Objective => self.objective.as_ref().is_some_and(|o| o.enabled),
            SectionKey::Work => on(&self.work),
            SectionKey::Education => on(&self.education),
            SectionKey::Awards => on(&self.awards),
            SectionKey::Certifications => on(&self.certifications),
            SectionKey::Skills => on(&self.skills),
            SectionKey::References => on(&self.references),
        }
    }

    /// Keys of every enabled section, in editor order.
    pub fn enabled_keys(&self) -> Vec<SectionKey> {
        SectionKey::ALL.into_iter().filter(|k| self.is_enabled(*k)).collect()
    }

    /// Gives position-based ids to skills that arrived without one.
    ///
    /// A generated id never repeats an id already present in the section.
    pub(crate) fn assign_skill_ids(&mut self) {
        let Some(skills) = self.skills.as_mut() else {
            return;
        };
        let mut taken: HashSet<String> =
            skills.items.iter().filter(|s| !s.id.is_empty()).map(|s| s.id.clone()).collect();
        for (index, skill) in skills.items.iter_mut().enumerate() {
            if !skill.id.is_empty() {
                continue;
            }
            let base = format!("skill-{}", index + 1);
            let mut id = base.clone();
            let mut n = 2;
            while taken.contains(&id) {
                id = format!("{base}-{n}");
                n += 1;
            }
            taken.insert(id.clone());
            skill.id = id;
        }
    }
}

/// The canonical résumé snapshot.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Resume {
    pub person: Person,
    #[serde(default)]
    pub sections: Sections,
}

impl Resume {
    /// Parses any supported document shape into the canonical form.
    ///
    /// Documents carrying `person` are canonical. Documents carrying `basics`
    /// or `profile` use the older flat layout with sections at the top level
    /// and are normalized. Anything else is missing its person block.
    pub fn from_json_value(value: Value) -> Result<Self, SchemaViolation> {
        let Value::Object(map) = &value else {
            return Err(SchemaViolation::missing("person"));
        };

        let mut resume = if map.contains_key("person") {
            serde_json::from_value::<Resume>(value)?
        } else if map.contains_key("basics") {
            legacy::from_basics(value)?
        } else if map.contains_key("profile") {
            legacy::from_profile(value)?
        } else {
            return Err(SchemaViolation::missing("person"));
        };

        resume.sections.assign_skill_ids();
        Ok(resume)
    }

    pub fn from_json_str(json: &str) -> Result<Self, SchemaViolation> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json_value(value)
    }

    /// Checks item identity: ids must be non-empty and unique per section.
    pub fn validate(&self) -> Result<(), SchemaViolation> {
        let s = &self.sections;
        check_ids(SectionKey::Work, s.work.as_ref())?;
        check_ids(SectionKey::Education, s.education.as_ref())?;
        check_ids(SectionKey::Awards, s.awards.as_ref())?;
        check_ids(SectionKey::Certifications, s.certifications.as_ref())?;
        check_ids(SectionKey::Skills, s.skills.as_ref())?;
        check_ids(SectionKey::References, s.references.as_ref())?;
        Ok(())
    }
}

fn check_ids<I: SectionItem>(key: SectionKey, section: Option<&Section<I>>) -> Result<(), SchemaViolation> {
    let Some(section) = section else {
        return Ok(());
    };
    if section.items.iter().any(|item| item.id().trim().is_empty()) {
        return Err(SchemaViolation::EmptyId { section: key.as_str() });
    }
    if let Some(item) = section.items.iter().find(|item| is_reserved_id(item.id())) {
        return Err(SchemaViolation::ReservedId { section: key.as_str(), id: item.id().to_string() });
    }
    if let Some(id) = section.items.iter().map(SectionItem::id).duplicates().next() {
        return Err(SchemaViolation::DuplicateId { section: key.as_str(), id: id.to_string() });
    }
    Ok(())
}
