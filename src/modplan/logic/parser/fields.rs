//! Field-level parse helpers: trim, delegate to the value object's
//! constructor, and rewrap its constraint message as a parse failure.

use crate::error::{PlanError, Result};
use crate::model::module::{Code, Credits, ModuleName};
use crate::model::plan::{Semester, Year};
use crate::model::tag::Tag;
use std::collections::BTreeSet;

pub const MESSAGE_INVALID_INDEX: &str = "The index should be a positive whole number";

fn as_parse(error: PlanError) -> PlanError {
    match error {
        PlanError::Validation(message) => PlanError::Parse(message),
        other => other,
    }
}

pub fn parse_name(raw: &str) -> Result<ModuleName> {
    ModuleName::new(raw).map_err(as_parse)
}

pub fn parse_code(raw: &str) -> Result<Code> {
    Code::new(raw).map_err(as_parse)
}

pub fn parse_credits(raw: &str) -> Result<Credits> {
    Credits::new(raw).map_err(as_parse)
}

pub fn parse_year(raw: &str) -> Result<Year> {
    Year::new(raw).map_err(as_parse)
}

pub fn parse_semester(raw: &str) -> Result<Semester> {
    Semester::new(raw).map_err(as_parse)
}

pub fn parse_tags(raw_values: &[String]) -> Result<BTreeSet<Tag>> {
    raw_values
        .iter()
        .map(|raw| Tag::new(raw).map_err(as_parse))
        .collect()
}

pub fn parse_codes(raw_values: &[String]) -> Result<BTreeSet<Code>> {
    raw_values.iter().map(|raw| parse_code(raw)).collect()
}

pub fn parse_code_list(raw_values: &[String]) -> Result<Vec<Code>> {
    raw_values.iter().map(|raw| parse_code(raw)).collect()
}

/// One-based display index into the currently filtered view.
pub fn parse_index(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(PlanError::Parse(MESSAGE_INVALID_INDEX.to_string())),
    }
}

/// Whitespace-separated search keywords; never empty on success.
pub fn parse_keywords(raw: &str) -> Option<Vec<String>> {
    let keywords: Vec<String> = raw.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        None
    } else {
        Some(keywords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_field_becomes_parse_error() {
        let err = parse_code("not-a-code").unwrap_err();
        assert!(matches!(err, PlanError::Parse(_)));
    }

    #[test]
    fn index_must_be_positive() {
        assert_eq!(parse_index(" 3 ").unwrap(), 3);
        assert!(parse_index("0").is_err());
        assert!(parse_index("-1").is_err());
        assert!(parse_index("two").is_err());
    }

    #[test]
    fn keywords_split_on_whitespace() {
        assert_eq!(
            parse_keywords(" alpha  beta ").unwrap(),
            vec!["alpha".to_string(), "beta".to_string()]
        );
        assert!(parse_keywords("   ").is_none());
    }

    #[test]
    fn tag_collection_reports_first_failure() {
        let err = parse_tags(&["ok".into(), "not ok".into()]).unwrap_err();
        assert!(matches!(err, PlanError::Parse(_)));
    }
}
