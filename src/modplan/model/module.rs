//! The `Module` entity and its value objects.
//!
//! Value objects are immutable newtypes validated at construction. They
//! (de)serialize through their raw representation, so malformed persisted data
//! fails at load time with the same constraint message a user would see.

use crate::error::{PlanError, Result};
use crate::model::tag::Tag;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const CODE_CONSTRAINT: &str =
    "Module codes should start with 2-3 uppercase letters, followed by 4 digits \
     and an optional uppercase letter (e.g. CS1010, IS4204R)";
pub const NAME_CONSTRAINT: &str =
    "Module names should start with a letter or digit and contain only printable characters";
pub const CREDITS_CONSTRAINT: &str = "Credits should be a whole number between 0 and 999";

/// A module code such as `CS1010`, the natural key of a [`Module`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Code(String);

impl Code {
    pub fn new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if is_valid_code(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(PlanError::Validation(CODE_CONSTRAINT.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn is_valid_code(s: &str) -> bool {
    let bytes = s.as_bytes();
    let letters = bytes.iter().take_while(|b| b.is_ascii_uppercase()).count();
    if !(2..=3).contains(&letters) {
        return false;
    }
    let digits = bytes[letters..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits != 4 {
        return false;
    }
    match bytes.len() - letters - digits {
        0 => true,
        1 => bytes[bytes.len() - 1].is_ascii_uppercase(),
        _ => false,
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Code {
    type Error = PlanError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<Code> for String {
    fn from(code: Code) -> Self {
        code.0
    }
}

/// A module's human-readable title.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleName(String);

impl ModuleName {
    pub fn new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        let starts_alphanumeric = raw
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_alphanumeric());
        let printable = raw.chars().all(|c| c.is_ascii() && !c.is_control());
        if starts_alphanumeric && printable {
            Ok(Self(raw.to_string()))
        } else {
            Err(PlanError::Validation(NAME_CONSTRAINT.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Natural-key comparison for requirement categories.
    pub fn eq_ignore_case(&self, other: &ModuleName) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for ModuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ModuleName {
    type Error = PlanError;

    fn try_from(raw: String) -> Result<Self> {
        Self::new(&raw)
    }
}

impl From<ModuleName> for String {
    fn from(name: ModuleName) -> Self {
        name.0
    }
}

/// Credit value of a module, 0..=999.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Credits(u32);

impl Credits {
    pub fn new(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(PlanError::Validation(CREDITS_CONSTRAINT.to_string()));
        }
        raw.parse::<u32>()
            .ok()
            .and_then(|value| Self::try_from(value).ok())
            .ok_or_else(|| PlanError::Validation(CREDITS_CONSTRAINT.to_string()))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Credits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for Credits {
    type Error = PlanError;

    fn try_from(value: u32) -> Result<Self> {
        if value <= 999 {
            Ok(Self(value))
        } else {
            Err(PlanError::Validation(CREDITS_CONSTRAINT.to_string()))
        }
    }
}

impl From<Credits> for u32 {
    fn from(credits: Credits) -> Self {
        credits.0
    }
}

/// A course module. Two modules are duplicates iff their codes are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub code: Code,
    pub name: ModuleName,
    pub credits: Credits,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub corequisites: BTreeSet<Code>,
}

impl Module {
    pub fn new(
        code: Code,
        name: ModuleName,
        credits: Credits,
        tags: BTreeSet<Tag>,
        corequisites: BTreeSet<Code>,
    ) -> Self {
        Self {
            code,
            name,
            credits,
            tags,
            corequisites,
        }
    }
}

impl fmt::Display for Module {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({} credits)", self.code, self.name, self.credits)?;
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(|t| t.as_str()).collect();
            write!(f, " [tags: {}]", tags.join(", "))?;
        }
        if !self.corequisites.is_empty() {
            let coreqs: Vec<&str> = self.corequisites.iter().map(|c| c.as_str()).collect();
            write!(f, " [coreq: {}]", coreqs.join(", "))?;
        }
        Ok(())
    }
}
