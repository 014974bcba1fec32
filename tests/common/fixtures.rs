use serde_json::{Value, json};
use vitae::{Resume, Theme};

/// A résumé with every section enabled and populated.
pub fn full_resume_json() -> Value {
    json!({
        "person": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "subtitle": "Analytical Engineer",
            "address": { "line1": "12 St James's Square", "line2": "", "line3": "London, UK" },
            "phone": "+44 20 7946 0000",
            "email": "ada@example.com",
            "website": "ada.example.com",
            "social": {
                "github": "https://github.com/ada",
                "linkedin": "https://www.linkedin.com/in/ada/"
            }
        },
        "sections": {
            "objective": {
                "enabled": true,
                "heading": "Objective",
                "body": "Build engines that compute **anything**."
            },
            "work": {
                "heading": "Work Experience",
                "enabled": true,
                "items": [
                    {
                        "id": "job-engineer",
                        "title": "Engineer",
                        "role": "Lead",
                        "start": "2020",
                        "end": "2022",
                        "enabled": true,
                        "description": "Designed the *difference* engine."
                    },
                    {
                        "id": "job-analyst",
                        "title": "Analyst",
                        "role": "Consultant",
                        "location": "Cambridge",
                        "start": "2018",
                        "end": "2020",
                        "enabled": true,
                        "description": ""
                    },
                    {
                        "id": "job-hidden",
                        "title": "Secret Project",
                        "role": "Ghost",
                        "start": "2016",
                        "end": "2018",
                        "enabled": false,
                        "description": "Never shown."
                    }
                ]
            },
            "education": {
                "heading": "Education",
                "enabled": true,
                "items": [
                    {
                        "id": "edu-1",
                        "name": "University of London",
                        "major": "Mathematics",
                        "grade": "First",
                        "start": "2012",
                        "end": "2016",
                        "enabled": true,
                        "description": "Studied calculus."
                    }
                ]
            },
            "awards": {
                "heading": "Awards",
                "enabled": true,
                "items": [
                    { "id": "award-1", "title": "Royal Medal", "subtitle": "Royal Society", "enabled": true, "description": "" }
                ]
            },
            "certifications": {
                "heading": "Certifications",
                "enabled": true,
                "items": [
                    { "id": "cert-1", "title": "Loom Operator", "subtitle": "Jacquard", "enabled": true, "description": "" }
                ]
            },
            "skills": {
                "heading": "Skills",
                "enabled": true,
                "items": [
                    { "id": "skill-notes", "skill": "Note G" },
                    { "id": "skill-loops", "skill": "Loops" }
                ]
            },
            "references": {
                "heading": "References",
                "enabled": true,
                "items": [
                    {
                        "id": "ref-1",
                        "name": "Charles Babbage",
                        "position": "Inventor",
                        "phone": "+44 20 7946 0001",
                        "email": "charles@example.com",
                        "enabled": true,
                        "description": ""
                    }
                ]
            }
        }
    })
}

pub fn full_resume() -> Resume {
    Resume::from_json_value(full_resume_json()).expect("fixture résumé parses")
}

/// The full résumé with one JSON pointer location replaced.
pub fn resume_with(pointer: &str, value: Value) -> Resume {
    let mut doc = full_resume_json();
    *doc.pointer_mut(pointer).expect("pointer exists in fixture") = value;
    Resume::from_json_value(doc).expect("modified fixture parses")
}

pub fn theme_with_accent(accent: &str) -> Theme {
    Theme::default().with_accent(accent)
}

/// The same person in the older flat `basics` layout.
pub fn legacy_basics_json() -> Value {
    json!({
        "basics": {
            "name": "Grace Hopper",
            "label": "Rear Admiral",
            "location": { "address": "1 Navy Way", "city": "Arlington", "region": "VA" },
            "phone": "555-0100",
            "email": "grace@example.com",
            "website": "",
            "github": "",
            "linkedin": ""
        },
        "work": {
            "heading": "Work",
            "enable": true,
            "items": [
                { "id": "w1", "title": "US Navy", "role": "Programmer", "start": "1943", "end": "1986", "enable": true }
            ]
        },
        "skills": {
            "heading": "Skills",
            "enable": true,
            "items": ["COBOL", "Debugging"]
        }
    })
}
