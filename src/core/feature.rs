//! Project-wide features.

use serde::Deserialize;

/// A conditionally applied bundle of global build settings.
///
/// When `key` and `value` are both set the pair becomes a build variable;
/// a `description` turns it into a user-visible cached option.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Feature {
    /// Gate for everything else in this feature
    #[serde(default, rename = "if")]
    pub condition: Option<String>,

    /// Raw script lines copied into the output
    #[serde(default)]
    pub scripts: Vec<String>,

    /// Preprocessor definitions
    #[serde(default, rename = "defines")]
    pub definitions: Vec<String>,

    /// Variable name
    #[serde(default)]
    pub key: Option<String>,

    /// Variable value
    #[serde(default)]
    pub value: Option<String>,

    /// Option description (marks the variable as cached)
    #[serde(default)]
    pub description: Option<String>,
}

impl Feature {
    /// The key/value pair, if both halves are present.
    pub fn variable(&self) -> Option<(&str, &str)> {
        match (&self.key, &self.value) {
            (Some(k), Some(v)) => Some((k.as_str(), v.as_str())),
            _ => None,
        }
    }

    /// Whether this feature declares a user-visible option.
    pub fn is_option(&self) -> bool {
        self.variable().is_some() && self.description.is_some()
    }
}
