use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value as loaded from an input table.
///
/// Comparison in the diff engine is over the textual form: numbers, dates,
/// and blanks are all compared as strings. An absent value is `Missing`,
/// which is never equal to any `Text`, including text that happens to
/// spell out an NA placeholder.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldValue {
    /// A present value, normalized to its textual representation.
    Text(String),
    /// A genuinely absent value.
    Missing,
}

impl FieldValue {
    /// Create a present value from anything string-like.
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Returns `true` if the value is absent.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The textual form used for rendering. A missing value renders empty.
    pub fn render(&self) -> &str {
        match self {
            Self::Text(s) => s,
            Self::Missing => "",
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_not_any_text() {
        assert_ne!(FieldValue::Missing, FieldValue::text(""));
        assert_ne!(FieldValue::Missing, FieldValue::text("NA"));
        assert_ne!(FieldValue::Missing, FieldValue::text("nan"));
    }

    #[test]
    fn text_equality_is_textual() {
        assert_eq!(FieldValue::text("42"), FieldValue::from("42"));
        assert_ne!(FieldValue::text("42"), FieldValue::text("42.0"));
    }

    #[test]
    fn missing_renders_empty() {
        assert_eq!(FieldValue::Missing.render(), "");
        assert_eq!(FieldValue::Missing.to_string(), "");
    }

    #[test]
    fn serde_round_trip() {
        let v = FieldValue::text("Alice");
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(serde_json::from_str::<FieldValue>(&json).unwrap(), v);

        let m = FieldValue::Missing;
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(serde_json::from_str::<FieldValue>(&json).unwrap(), m);
    }
}
