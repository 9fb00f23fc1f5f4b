//! Degree-plan slots: one per (year, semester) pair, holding module codes.

use crate::error::{PlanError, Result};
use crate::model::module::Code;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

pub const YEAR_CONSTRAINT: &str = "Year should be a number between 1 and 4";
pub const SEMESTER_CONSTRAINT: &str = "Semester should be a number between 1 and 4";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Year(u8);

impl Year {
    pub fn new(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(|v| Self::try_from(v).ok())
            .ok_or_else(|| PlanError::Validation(YEAR_CONSTRAINT.to_string()))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Year {
    type Error = PlanError;

    fn try_from(value: u8) -> Result<Self> {
        if (1..=4).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PlanError::Validation(YEAR_CONSTRAINT.to_string()))
        }
    }
}

impl From<Year> for u8 {
    fn from(year: Year) -> Self {
        year.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Semester(u8);

impl Semester {
    pub fn new(raw: &str) -> Result<Self> {
        raw.trim()
            .parse::<u8>()
            .ok()
            .and_then(|v| Self::try_from(v).ok())
            .ok_or_else(|| PlanError::Validation(SEMESTER_CONSTRAINT.to_string()))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Semester {
    type Error = PlanError;

    fn try_from(value: u8) -> Result<Self> {
        if (1..=4).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PlanError::Validation(SEMESTER_CONSTRAINT.to_string()))
        }
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.0
    }
}

/// One bucket of the degree plan. Natural key: `(year, semester)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSlot {
    pub year: Year,
    pub semester: Semester,
    #[serde(default)]
    pub codes: BTreeSet<Code>,
}

impl PlannerSlot {
    pub fn empty(year: Year, semester: Semester) -> Self {
        Self {
            year,
            semester,
            codes: BTreeSet::new(),
        }
    }
}

impl fmt::Display for PlannerSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Year {} Semester {}:", self.year, self.semester)?;
        if self.codes.is_empty() {
            write!(f, " (empty)")
        } else {
            let codes: Vec<&str> = self.codes.iter().map(|c| c.as_str()).collect();
            write!(f, " {}", codes.join(", "))
        }
    }
}
