//! Prefix tokenizer: splits an argument string into a preamble and a multimap
//! of prefix → values.
//!
//! A prefix is recognized at the start of the string or right after
//! whitespace; `cr/` therefore never swallows a `c/` value and vice versa.
//! Repeated prefixes are preserved in order: single-valued fields read the
//! last occurrence, multi-valued fields read them all.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

impl Prefix {
    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

pub const PREFIX_NAME: Prefix = Prefix("n/");
pub const PREFIX_CODE: Prefix = Prefix("c/");
pub const PREFIX_CREDITS: Prefix = Prefix("cr/");
pub const PREFIX_TAG: Prefix = Prefix("t/");
pub const PREFIX_COREQUISITE: Prefix = Prefix("co/");
pub const PREFIX_YEAR: Prefix = Prefix("y/");
pub const PREFIX_SEMESTER: Prefix = Prefix("s/");

#[derive(Debug, Default)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Free text before the first prefix; empty when absent or
    /// whitespace-only.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Last value given for `prefix`, if any.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// All values given for `prefix`, in input order.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for &prefix in prefixes {
        let marker = prefix.as_str();
        let mut from = 0;
        while let Some(found) = args[from..].find(marker) {
            let at = from + found;
            if at == 0 || args[..at].ends_with(char::is_whitespace) {
                positions.push((at, prefix));
            }
            from = at + marker.len();
        }
    }
    positions.sort_by_key(|(at, _)| *at);

    let mut map = ArgumentMultimap::default();
    let preamble_end = positions.first().map_or(args.len(), |(at, _)| *at);
    map.preamble = args[..preamble_end].trim().to_string();

    for (i, &(at, prefix)) in positions.iter().enumerate() {
        let value_start = at + prefix.as_str().len();
        let value_end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: &[Prefix] = &[
        PREFIX_NAME,
        PREFIX_CODE,
        PREFIX_CREDITS,
        PREFIX_TAG,
        PREFIX_COREQUISITE,
    ];

    #[test]
    fn splits_preamble_and_values() {
        let map = tokenize("1 n/Programming Methodology c/CS1010", ALL);
        assert_eq!(map.preamble(), "1");
        assert_eq!(map.value(PREFIX_NAME), Some("Programming Methodology"));
        assert_eq!(map.value(PREFIX_CODE), Some("CS1010"));
    }

    #[test]
    fn whitespace_only_preamble_is_absent() {
        let map = tokenize("   n/X", ALL);
        assert_eq!(map.preamble(), "");
    }

    #[test]
    fn last_occurrence_wins_for_single_valued_reads() {
        let map = tokenize("n/First n/Second", ALL);
        assert_eq!(map.value(PREFIX_NAME), Some("Second"));
        assert_eq!(map.all_values(PREFIX_NAME), ["First", "Second"]);
    }

    #[test]
    fn repeated_prefixes_accumulate() {
        let map = tokenize("n/X c/CS1010 t/core t/year1", ALL);
        assert_eq!(map.all_values(PREFIX_TAG), ["core", "year1"]);
    }

    #[test]
    fn credits_prefix_does_not_collide_with_code_prefix() {
        let map = tokenize("c/CS1010 cr/4 co/MA1521", ALL);
        assert_eq!(map.value(PREFIX_CODE), Some("CS1010"));
        assert_eq!(map.value(PREFIX_CREDITS), Some("4"));
        assert_eq!(map.value(PREFIX_COREQUISITE), Some("MA1521"));
    }

    #[test]
    fn prefix_must_follow_whitespace() {
        // "ab/c" style embedded markers stay part of the preceding value
        let map = tokenize("n/some n/value-with-c/inside", ALL);
        assert_eq!(map.value(PREFIX_NAME), Some("value-with-c/inside"));
        assert_eq!(map.value(PREFIX_CODE), None);
    }

    #[test]
    fn missing_prefix_yields_nothing() {
        let map = tokenize("just a preamble", ALL);
        assert_eq!(map.preamble(), "just a preamble");
        assert!(!map.contains(PREFIX_NAME));
        assert!(map.all_values(PREFIX_TAG).is_empty());
    }

    #[test]
    fn empty_value_is_preserved() {
        let map = tokenize("t/", ALL);
        assert_eq!(map.all_values(PREFIX_TAG), [""]);
    }
}
