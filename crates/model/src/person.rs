use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub line1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    pub line3: String,
}

impl Address {
    /// Non-empty address lines in order.
    pub fn lines(&self) -> Vec<&str> {
        [Some(self.line1.as_str()), self.line2.as_deref(), Some(self.line3.as_str())]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// The person the résumé describes. Contact fields may be empty strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub address: Address,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub social: Social,
}

impl Person {
    pub fn full_name(&self) -> String {
        let first = self.first_name.trim();
        let last = self.last_name.trim();
        match (first.is_empty(), last.is_empty()) {
            (false, false) => format!("{first} {last}"),
            (false, true) => first.to_string(),
            (true, _) => last.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_skips_blank_parts() {
        let mut p = Person { first_name: "Ada".into(), last_name: "Lovelace".into(), ..Default::default() };
        assert_eq!(p.full_name(), "Ada Lovelace");
        p.last_name.clear();
        assert_eq!(p.full_name(), "Ada");
    }

    #[test]
    fn address_lines_omit_absent_and_blank() {
        let a = Address { line1: "1 Main St".into(), line2: None, line3: " ".into() };
        assert_eq!(a.lines(), vec!["1 Main St"]);
    }
}
