//! Question kind value object

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The `type` tag carried by an upstream record
///
/// Only [`QuestionKind::Boolean`] gets special treatment during
/// normalization; everything else is handled as multiple-choice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum QuestionKind {
    Boolean,
    #[default]
    Multiple,
    /// Any tag the service may add later
    Other(String),
}

impl QuestionKind {
    /// Get the wire identifier for this kind
    pub fn as_str(&self) -> &str {
        match self {
            QuestionKind::Boolean => "boolean",
            QuestionKind::Multiple => "multiple",
            QuestionKind::Other(s) => s,
        }
    }

    pub fn is_boolean(&self) -> bool {
        matches!(self, QuestionKind::Boolean)
    }
}

impl std::fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<&str> for QuestionKind {
    fn from(s: &str) -> Self {
        match s {
            "boolean" => QuestionKind::Boolean,
            "multiple" => QuestionKind::Multiple,
            other => QuestionKind::Other(other.to_string()),
        }
    }
}

impl Serialize for QuestionKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for QuestionKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(QuestionKind::from(s.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        assert_eq!(QuestionKind::from("boolean"), QuestionKind::Boolean);
        assert_eq!(QuestionKind::from("multiple"), QuestionKind::Multiple);
        assert!(QuestionKind::Boolean.is_boolean());
        assert!(!QuestionKind::Multiple.is_boolean());
    }

    #[test]
    fn test_unknown_kind_is_preserved() {
        let kind = QuestionKind::from("ranking");
        assert_eq!(kind, QuestionKind::Other("ranking".to_string()));
        assert_eq!(kind.to_string(), "ranking");
    }

    #[test]
    fn test_matching_is_exact() {
        // Upstream always sends lowercase tags; anything else is not boolean
        assert!(!QuestionKind::from("Boolean").is_boolean());
    }

    #[test]
    fn test_deserialize() {
        let kind: QuestionKind = serde_json::from_str("\"boolean\"").unwrap();
        assert_eq!(kind, QuestionKind::Boolean);
    }
}
