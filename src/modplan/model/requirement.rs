use crate::model::module::{Code, Credits, ModuleName};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A graduation requirement bucket. Natural key: `name` (case-insensitive).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequirementCategory {
    pub name: ModuleName,
    pub credits_required: Credits,
    #[serde(default)]
    pub codes: BTreeSet<Code>,
}

impl RequirementCategory {
    pub fn new(name: ModuleName, credits_required: Credits) -> Self {
        Self {
            name,
            credits_required,
            codes: BTreeSet::new(),
        }
    }
}

impl fmt::Display for RequirementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} credits required):", self.name, self.credits_required)?;
        if self.codes.is_empty() {
            write!(f, " (none)")
        } else {
            let codes: Vec<&str> = self.codes.iter().map(|c| c.as_str()).collect();
            write!(f, " {}", codes.join(", "))
        }
    }
}
