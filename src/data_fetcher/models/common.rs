use serde::{Deserialize, Serialize};

/// Localized string as returned by the NHL API, e.g. `{"default": "Connor"}`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct LocalizedName {
    #[serde(default)]
    pub default: String,
}

impl LocalizedName {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            default: value.into(),
        }
    }
}

/// Reads the default value of an optional localized field, "" when missing.
pub fn localized_or_empty(name: &Option<LocalizedName>) -> &str {
    name.as_ref().map(|n| n.default.as_str()).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_localized_name_deserialization() {
        let name: LocalizedName = serde_json::from_str(r#"{"default":"Connor","fr":"Connor"}"#)
            .unwrap();
        assert_eq!(name.default, "Connor");
    }

    #[test]
    fn test_localized_or_empty() {
        assert_eq!(localized_or_empty(&Some(LocalizedName::new("McDavid"))), "McDavid");
        assert_eq!(localized_or_empty(&None), "");
    }
}
