//! Normalization of the older flat document layouts.

use crate::error::SchemaViolation;
use crate::person::{Address, Person, Social};
use crate::resume::{Resume, Sections};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Location {
    address: String,
    city: String,
    region: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Basics {
    name: String,
    label: String,
    location: Location,
    phone: String,
    email: String,
    website: String,
    github: Option<String>,
    linkedin: Option<String>,
}

#[derive(Debug, Deserialize)]
struct BasicsDocument {
    basics: Basics,
    #[serde(flatten)]
    sections: Sections,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Profile {
    first_name: String,
    last_name: String,
    subtitle: String,
    address: Address,
    phone: String,
    email: String,
    website: String,
    github: Option<String>,
    linkedin: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProfileDocument {
    profile: Profile,
    #[serde(flatten)]
    sections: Sections,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn from_basics(value: Value) -> Result<Resume, SchemaViolation> {
    let BasicsDocument { basics, sections } = serde_json::from_value(value)?;
    log::debug!("normalizing 'basics' document for '{}'", basics.name);

    let name = basics.name.trim();
    let (first_name, last_name) = match name.split_once(char::is_whitespace) {
        Some((first, rest)) => (first.to_string(), rest.trim_start().to_string()),
        None => (name.to_string(), String::new()),
    };

    let Location { address, city, region } = basics.location;
    let line3 = if region.is_empty() { city } else { format!("{city}, {region}") };

    Ok(Resume {
        person: Person {
            first_name,
            last_name,
            subtitle: basics.label,
            address: Address { line1: address, line2: None, line3 },
            phone: basics.phone,
            email: basics.email,
            website: basics.website,
            social: Social { github: non_empty(basics.github), linkedin: non_empty(basics.linkedin) },
        },
        sections,
    })
}

pub(crate) fn from_profile(value: Value) -> Result<Resume, SchemaViolation> {
    let ProfileDocument { profile, sections } = serde_json::from_value(value)?;
    let Profile { first_name, last_name, subtitle, address, phone, email, website, github, linkedin } = profile;

    Ok(Resume {
        person: Person {
            first_name,
            last_name,
            subtitle,
            address,
            phone,
            email,
            website,
            social: Social { github: non_empty(github), linkedin: non_empty(linkedin) },
        },
        sections,
    })
}

#[cfg(test)]
mod tests {
    use crate::resume::Resume;
    use crate::section::SectionKey;
    use serde_json::json;

    #[test]
    fn basics_are_split_into_person() {
        let resume = Resume::from_json_value(json!({
            "basics": {
                "name": "Ada King Lovelace",
                "label": "Analyst",
                "location": { "address": "12 St James's Square", "city": "London", "region": "UK" },
                "phone": "+44 1", "email": "ada@example.com", "website": "",
                "github": "", "linkedin": "https://www.linkedin.com/in/ada"
            },
            "objective": { "enable": true, "heading": "Objective", "body": "Engines." },
            "work": { "enable": false, "heading": "Work", "items": [] },
            "skills": { "enable": true, "heading": "Skills", "items": ["Mathematics"] }
        }))
        .unwrap();

        let p = &resume.person;
        assert_eq!(p.first_name, "Ada");
        assert_eq!(p.last_name, "King Lovelace");
        assert_eq!(p.subtitle, "Analyst");
        assert_eq!(p.address.line1, "12 St James's Square");
        assert_eq!(p.address.line3, "London, UK");
        assert_eq!(p.social.github, None);
        assert_eq!(p.social.linkedin.as_deref(), Some("https://www.linkedin.com/in/ada"));
        assert_eq!(resume.sections.enabled_keys(), vec![SectionKey::Objective, SectionKey::Skills]);
        assert_eq!(resume.sections.skills.unwrap().items[0].id, "skill-1");
    }

    #[test]
    fn city_without_region_has_no_comma() {
        let resume = Resume::from_json_value(json!({
            "basics": { "name": "Cher", "location": { "city": "Paris" } }
        }))
        .unwrap();
        assert_eq!(resume.person.first_name, "Cher");
        assert_eq!(resume.person.last_name, "");
        assert_eq!(resume.person.address.line3, "Paris");
    }

    #[test]
    fn profile_documents_keep_split_names() {
        let resume = Resume::from_json_value(json!({
            "profile": {
                "heading": "Profile",
                "firstName": "Grace", "lastName": "Hopper", "subtitle": "Rear Admiral",
                "address": { "line1": "Arlington", "line2": "", "line3": "VA" },
                "github": "https://github.com/grace"
            },
            "education": { "enable": true, "heading": "Education", "items": [
                { "id": "e1", "name": "Yale", "enable": true }
            ]}
        }))
        .unwrap();
        assert_eq!(resume.person.full_name(), "Grace Hopper");
        assert_eq!(resume.person.address.lines(), vec!["Arlington", "VA"]);
        assert_eq!(resume.person.social.github.as_deref(), Some("https://github.com/grace"));
        assert!(resume.sections.is_enabled(SectionKey::Education));
    }
}
