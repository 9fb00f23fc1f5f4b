use crate::error::{PlanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const TAG_CONSTRAINT: &str = "Tags should be a single alphanumeric word";

/// A free-form label attached to a module.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tag(String);

impl Tag {
    pub fn new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if !raw.is_empty() && raw.chars().all(|c| c.is_ascii_alphanumeric()) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PlanError::Validation(TAG_CONSTRAINT.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Tag {
    type Error = PlanError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Tag> for String {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphanumeric_only() {
        assert!(Tag::new("core").is_ok());
        assert!(Tag::new("year1").is_ok());
        assert!(Tag::new("").is_err());
        assert!(Tag::new("two words").is_err());
        assert!(Tag::new("semi-colon").is_err());
    }
}
