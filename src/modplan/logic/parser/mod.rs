//! Turns a raw input line into a typed [`Command`].
//!
//! The line splits into a command word and an argument tail; the tail goes
//! through the prefix tokenizer and a per-command parser. Required fields are
//! checked for presence first (usage error), then parsed in declaration
//! order; the first invalid field is the one reported, later fields are not
//! evaluated.

pub mod fields;
pub mod tokenizer;

use crate::error::{PlanError, Result};
use crate::logic::commands::{
    add, delete, edit, find, planner, requirement, Command, ModuleEdits,
};
use crate::model::module::Module;
use crate::model::predicate::ModulePredicate;
use tokenizer::{
    tokenize, ArgumentMultimap, Prefix, PREFIX_CODE, PREFIX_COREQUISITE, PREFIX_CREDITS,
    PREFIX_NAME, PREFIX_SEMESTER, PREFIX_TAG, PREFIX_YEAR,
};

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command. Type `help` to see the command list.";

fn usage_error(usage: &str) -> PlanError {
    PlanError::Parse(format!("Invalid command format!\n{usage}"))
}

pub fn parse(line: &str) -> Result<Command> {
    let trimmed = line.trim();
    let (word, args) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    match word {
        "add" => parse_add(args),
        "edit" => parse_edit(args),
        "delete" => parse_delete(args),
        "find" => parse_find(args),
        "list" => Ok(Command::List),
        "clear" => Ok(Command::Clear),
        "undo" => Ok(Command::Undo),
        "redo" => Ok(Command::Redo),
        "history" => Ok(Command::History),
        "help" => Ok(Command::Help),
        "exit" => Ok(Command::Exit),
        "planner_add" => parse_planner_add(args),
        "planner_remove" => parse_planner_remove(args),
        "planner_list" => Ok(Command::PlannerList),
        "requirement_add" => parse_requirement_add(args),
        "requirement_remove" => parse_requirement_remove(args),
        "requirement_list" => Ok(Command::RequirementList),
        _ => Err(PlanError::Parse(MESSAGE_UNKNOWN_COMMAND.to_string())),
    }
}

fn all_present(map: &ArgumentMultimap, prefixes: &[Prefix]) -> bool {
    prefixes.iter().all(|&p| map.value(p).is_some())
}

fn parse_add(args: &str) -> Result<Command> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_CODE,
            PREFIX_CREDITS,
            PREFIX_TAG,
            PREFIX_COREQUISITE,
        ],
    );
    if !all_present(&map, &[PREFIX_NAME, PREFIX_CODE, PREFIX_CREDITS]) || !map.preamble().is_empty()
    {
        return Err(usage_error(add::USAGE));
    }

    let name = fields::parse_name(map.value(PREFIX_NAME).expect("presence checked"))?;
    let code = fields::parse_code(map.value(PREFIX_CODE).expect("presence checked"))?;
    let credits = fields::parse_credits(map.value(PREFIX_CREDITS).expect("presence checked"))?;
    let tags = fields::parse_tags(map.all_values(PREFIX_TAG))?;
    let corequisites = fields::parse_codes(map.all_values(PREFIX_COREQUISITE))?;

    Ok(Command::Add(Module::new(
        code,
        name,
        credits,
        tags,
        corequisites,
    )))
}

fn parse_edit(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_CODE, PREFIX_CREDITS, PREFIX_TAG]);
    if map.preamble().is_empty() {
        return Err(usage_error(edit::USAGE));
    }
    let index = fields::parse_index(map.preamble())?;

    let edits = ModuleEdits {
        name: map.value(PREFIX_NAME).map(fields::parse_name).transpose()?,
        code: map.value(PREFIX_CODE).map(fields::parse_code).transpose()?,
        credits: map
            .value(PREFIX_CREDITS)
            .map(fields::parse_credits)
            .transpose()?,
        tags: parse_tags_for_edit(&map)?,
    };
    if edits.is_empty() {
        return Err(PlanError::Parse(edit::MESSAGE_NOT_EDITED.to_string()));
    }
    Ok(Command::Edit { index, edits })
}

/// A lone empty `t/` clears the module's tags; anything else parses normally.
fn parse_tags_for_edit(
    map: &ArgumentMultimap,
) -> Result<Option<std::collections::BTreeSet<crate::model::Tag>>> {
    let raw = map.all_values(PREFIX_TAG);
    if raw.is_empty() {
        return Ok(None);
    }
    if raw.len() == 1 && raw[0].is_empty() {
        return Ok(Some(Default::default()));
    }
    fields::parse_tags(raw).map(Some)
}

fn parse_delete(args: &str) -> Result<Command> {
    if args.trim().is_empty() {
        return Err(usage_error(delete::USAGE));
    }
    let index = fields::parse_index(args)?;
    Ok(Command::Delete { index })
}

fn parse_find(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_CODE, PREFIX_CREDITS]);
    if !map.preamble().is_empty() {
        return Err(usage_error(find::USAGE));
    }

    let fields_given = [PREFIX_NAME, PREFIX_CODE, PREFIX_CREDITS]
        .into_iter()
        .filter(|&p| map.contains(p))
        .count();
    if fields_given != 1 {
        return Err(usage_error(find::USAGE));
    }

    let predicate = if let Some(raw) = map.value(PREFIX_NAME) {
        ModulePredicate::NameContains(require_keywords(raw)?)
    } else if let Some(raw) = map.value(PREFIX_CODE) {
        ModulePredicate::CodeContains(require_keywords(raw)?)
    } else {
        let raw = map.value(PREFIX_CREDITS).expect("one field is present");
        ModulePredicate::CreditsContains(require_keywords(raw)?)
    };
    Ok(Command::Find(predicate))
}

fn require_keywords(raw: &str) -> Result<Vec<String>> {
    fields::parse_keywords(raw).ok_or_else(|| usage_error(find::USAGE))
}

fn parse_planner_add(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_YEAR, PREFIX_SEMESTER, PREFIX_CODE]);
    if !all_present(&map, &[PREFIX_YEAR, PREFIX_SEMESTER, PREFIX_CODE]) || !map.preamble().is_empty()
    {
        return Err(usage_error(planner::ADD_USAGE));
    }
    let year = fields::parse_year(map.value(PREFIX_YEAR).expect("presence checked"))?;
    let semester = fields::parse_semester(map.value(PREFIX_SEMESTER).expect("presence checked"))?;
    let codes = fields::parse_code_list(map.all_values(PREFIX_CODE))?;
    Ok(Command::PlannerAdd {
        year,
        semester,
        codes,
    })
}

fn parse_planner_remove(args: &str) -> Result<Command> {
    let map = tokenize(args, &[PREFIX_CODE]);
    if !map.contains(PREFIX_CODE) || !map.preamble().is_empty() {
        return Err(usage_error(planner::REMOVE_USAGE));
    }
    let codes = fields::parse_code_list(map.all_values(PREFIX_CODE))?;
    Ok(Command::PlannerRemove { codes })
}

fn parse_requirement_add(args: &str) -> Result<Command> {
    let (category, codes) = parse_requirement_args(args, requirement::ADD_USAGE)?;
    Ok(Command::RequirementAdd { category, codes })
}

fn parse_requirement_remove(args: &str) -> Result<Command> {
    let (category, codes) = parse_requirement_args(args, requirement::REMOVE_USAGE)?;
    Ok(Command::RequirementRemove { category, codes })
}

fn parse_requirement_args(
    args: &str,
    usage: &str,
) -> Result<(crate::model::ModuleName, Vec<crate::model::Code>)> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_CODE]);
    if !all_present(&map, &[PREFIX_NAME, PREFIX_CODE]) || !map.preamble().is_empty() {
        return Err(usage_error(usage));
    }
    let category = fields::parse_name(map.value(PREFIX_NAME).expect("presence checked"))?;
    let codes = fields::parse_code_list(map.all_values(PREFIX_CODE))?;
    Ok((category, codes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::module::{CODE_CONSTRAINT, NAME_CONSTRAINT};

    fn parse_err(line: &str) -> String {
        parse(line).unwrap_err().to_string()
    }

    #[test]
    fn unknown_command_word() {
        assert_eq!(parse_err("uicfhmowqewca"), MESSAGE_UNKNOWN_COMMAND);
        assert_eq!(parse_err(""), MESSAGE_UNKNOWN_COMMAND);
    }

    #[test]
    fn add_requires_all_mandatory_prefixes() {
        assert!(parse("add n/Programming Methodology c/CS1010 cr/4").is_ok());
        assert!(parse_err("add n/Programming Methodology c/CS1010").contains("Invalid command format!"));
        assert!(parse_err("add c/CS1010 cr/4").contains(add::USAGE));
    }

    #[test]
    fn add_rejects_non_empty_preamble() {
        assert!(parse_err("add oops n/X c/CS1010 cr/4").contains("Invalid command format!"));
        // whitespace-only preamble is fine
        assert!(parse("add    n/X c/CS1010 cr/4").is_ok());
    }

    #[test]
    fn first_invalid_field_in_declaration_order_is_reported() {
        // both name and code invalid: name comes first
        let err = parse_err("add n/*bad* c/alsobad cr/4");
        assert_eq!(err, NAME_CONSTRAINT);

        // name fine, code and credits invalid: code comes first
        let err = parse_err("add n/Fine Name c/alsobad cr/notanumber");
        assert_eq!(err, CODE_CONSTRAINT);
    }

    #[test]
    fn add_accumulates_tags_and_takes_last_single_valued_field() {
        let command = parse("add n/First n/Second c/CS1010 cr/4 t/a t/b co/MA1521").unwrap();
        match command {
            Command::Add(module) => {
                assert_eq!(module.name.as_str(), "Second");
                assert_eq!(module.tags.len(), 2);
                assert_eq!(module.corequisites.len(), 1);
            }
            other => panic!("expected Add, got {other:?}"),
        }
    }

    #[test]
    fn edit_requires_index_and_at_least_one_field() {
        assert!(parse("edit 1 cr/6").is_ok());
        assert!(parse_err("edit cr/6").contains("Invalid command format!"));
        assert_eq!(parse_err("edit 1"), edit::MESSAGE_NOT_EDITED);
        assert_eq!(parse_err("edit 0 cr/6"), fields::MESSAGE_INVALID_INDEX);
    }

    #[test]
    fn edit_lone_empty_tag_clears_tags() {
        match parse("edit 2 t/").unwrap() {
            Command::Edit { index, edits } => {
                assert_eq!(index, 2);
                assert_eq!(edits.tags, Some(Default::default()));
            }
            other => panic!("expected Edit, got {other:?}"),
        }
    }

    #[test]
    fn delete_parses_positive_index_only() {
        assert_eq!(parse("delete 3").unwrap(), Command::Delete { index: 3 });
        assert!(parse_err("delete").contains(delete::USAGE));
        assert_eq!(parse_err("delete zero"), fields::MESSAGE_INVALID_INDEX);
    }

    #[test]
    fn find_requires_exactly_one_field() {
        assert_eq!(
            parse("find n/alpha beta").unwrap(),
            Command::Find(ModulePredicate::NameContains(vec![
                "alpha".into(),
                "beta".into()
            ]))
        );
        assert!(parse("find cr/4").is_ok());
        assert!(parse_err("find").contains(find::USAGE));
        assert!(parse_err("find n/a c/b").contains(find::USAGE));
        assert!(parse_err("find n/ ").contains(find::USAGE));
        assert!(parse_err("find preamble n/a").contains(find::USAGE));
    }

    #[test]
    fn bare_commands_ignore_their_tail() {
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("  undo  ").unwrap(), Command::Undo);
        assert_eq!(parse("history old stuff").unwrap(), Command::History);
        assert_eq!(parse("exit").unwrap(), Command::Exit);
    }

    #[test]
    fn planner_add_parses_slot_and_codes() {
        match parse("planner_add y/1 s/2 c/CS1010 c/MA1521").unwrap() {
            Command::PlannerAdd {
                year,
                semester,
                codes,
            } => {
                assert_eq!(year.value(), 1);
                assert_eq!(semester.value(), 2);
                assert_eq!(codes.len(), 2);
            }
            other => panic!("expected PlannerAdd, got {other:?}"),
        }
        assert!(parse_err("planner_add y/1 c/CS1010").contains(planner::ADD_USAGE));
        assert!(parse_err("planner_add y/9 s/1 c/CS1010").contains("Year"));
    }

    #[test]
    fn requirement_commands_need_category_and_codes() {
        assert!(parse("requirement_add n/Mathematics c/MA1521").is_ok());
        assert!(parse_err("requirement_add n/Mathematics").contains(requirement::ADD_USAGE));
        assert!(parse("requirement_remove n/Mathematics c/MA1521").is_ok());
    }
}
