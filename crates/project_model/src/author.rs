//! Author attribution for exported documents

use serde::{Deserialize, Serialize};

/// The signed-in user, as far as exports care
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: Option<String>,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// An author with no name; cover pages omit the attribution line.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// The name to print, if there is a non-blank one
    pub fn display_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        assert_eq!(Author::new(" Ruth Bell ").display_name(), Some("Ruth Bell"));
        assert_eq!(Author::new("   ").display_name(), None);
        assert_eq!(Author::anonymous().display_name(), None);
    }
}
