use serde::Serialize;

/// Font weight, named after the usual CSS keywords.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    SemiBold,
    Bold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_serialize_as_css_keywords() {
        assert_eq!(serde_json::to_string(&FontWeight::SemiBold).unwrap(), "\"semi-bold\"");
        assert_eq!(serde_json::to_string(&FontWeight::default()).unwrap(), "\"regular\"");
    }
}
