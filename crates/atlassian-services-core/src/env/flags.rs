//! Boolean flag parsing for environment values

use serde::{Deserialize, Serialize};

/// The fixed set of spellings accepted as "on"
///
/// Matching ignores letter case but not surrounding whitespace, so `"YES"`
/// parses and `" yes"` does not. Anything else, including an unset or empty
/// variable, is off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Truthy {
    True,
    #[serde(rename = "1")]
    One,
    Yes,
}

impl Truthy {
    pub const ALL: [Truthy; 3] = [Truthy::True, Truthy::One, Truthy::Yes];

    /// Canonical lowercase spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Truthy::True => "true",
            Truthy::One => "1",
            Truthy::Yes => "yes",
        }
    }

    /// Parse a flag value, `None` when it is not one of the accepted spellings
    pub fn parse(value: &str) -> Option<Self> {
        let lowered = value.to_lowercase();
        Self::ALL.into_iter().find(|t| t.as_str() == lowered)
    }
}

impl std::fmt::Display for Truthy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether an optional flag value is on
pub fn is_truthy(value: Option<&str>) -> bool {
    value.and_then(Truthy::parse).is_some()
}
