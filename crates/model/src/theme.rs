use crate::error::SchemaViolation;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
}

/// Theme colors as authored: hex strings, not yet validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Colors {
    pub background: String,
    pub primary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub font: Font,
    pub colors: Colors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: Font { family: "Montserrat".to_string() },
            colors: Colors {
                background: "#ffffff".to_string(),
                primary: "#212121".to_string(),
                accent: "#f44336".to_string(),
            },
        }
    }
}

impl Theme {
    pub fn with_accent(mut self, accent: impl Into<String>) -> Self {
        self.colors.accent = accent.into();
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, SchemaViolation> {
        Ok(serde_json::from_str(json)?)
    }
}
