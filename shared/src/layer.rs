//! Layer token
//!
//! The layer names the backend deployment tier a call targets. Any string is
//! accepted; routing compares it by exact match and sends anything it does
//! not recognize down its default branch.

use std::fmt;

/// Storage key the selected layer is persisted under
pub const LAYER_KEY: &str = "layer";

/// Selected layer token ("0".."4" in practice, empty when unselected)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Layer(String);

impl Layer {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// No layer has been chosen yet
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Header label: "Layer N", or empty when unselected
    pub fn label(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("Layer {}", self.0)
        }
    }

    /// Exact token match
    pub fn is_one_of(&self, tokens: &[&str]) -> bool {
        tokens.iter().any(|t| *t == self.0)
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Layer {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Layer {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label() {
        assert_eq!(Layer::new("3").label(), "Layer 3");
        assert_eq!(Layer::default().label(), "");
    }

    #[test]
    fn test_exact_match_only() {
        let layer = Layer::new(" 4");
        assert!(!layer.is_one_of(&["4"]));
        assert!(Layer::new("4").is_one_of(&["3", "4"]));
    }

    #[test]
    fn test_any_string_accepted() {
        let layer = Layer::from("Layer 9");
        assert_eq!(layer.as_str(), "Layer 9");
    }
}
