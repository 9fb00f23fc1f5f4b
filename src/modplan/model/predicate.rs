//! Keyword predicates over modules, used to derive filtered views.
//!
//! One tagged union instead of a trait object: the variant picks the field,
//! the payload carries the keywords. A module matches if any keyword equals
//! the field's textual value or any whitespace token of it, ignoring case.

use crate::model::module::Module;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModulePredicate {
    #[default]
    All,
    NameContains(Vec<String>),
    CodeContains(Vec<String>),
    CreditsContains(Vec<String>),
}

impl ModulePredicate {
    pub fn test(&self, module: &Module) -> bool {
        match self {
            ModulePredicate::All => true,
            ModulePredicate::NameContains(keywords) => {
                matches_field(keywords, module.name.as_str())
            }
            ModulePredicate::CodeContains(keywords) => {
                matches_field(keywords, module.code.as_str())
            }
            ModulePredicate::CreditsContains(keywords) => {
                matches_field(keywords, &module.credits.to_string())
            }
        }
    }
}

fn matches_field(keywords: &[String], field: &str) -> bool {
    keywords.iter().any(|keyword| {
        field.eq_ignore_ascii_case(keyword)
            || field
                .split_whitespace()
                .any(|token| token.eq_ignore_ascii_case(keyword))
    })
}
