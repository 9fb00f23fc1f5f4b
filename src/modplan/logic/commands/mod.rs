//! The closed command set.
//!
//! One module per command, each exposing a `run` function plus its usage and
//! message constants; [`Command`] is the typed, immutable product of a parse
//! and dispatches to those functions. Commands never touch storage; the
//! logic facade persists after any command that reports `mutates()`.

use crate::error::Result;
use crate::logic::history::CommandHistory;
use crate::model::predicate::ModulePredicate;
use crate::model::{Code, Module, ModuleName, Semester, VersionedModel, Year};

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod find;
pub mod help;
pub mod history_cmd;
pub mod list;
pub mod planner;
pub mod requirement;
pub mod undo_redo;

#[cfg(test)]
pub mod testutil;

pub use edit::ModuleEdits;

/// What a command hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub is_exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            is_exit: false,
        }
    }

    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.is_exit = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(Module),
    Edit { index: usize, edits: ModuleEdits },
    Delete { index: usize },
    Find(ModulePredicate),
    List,
    Clear,
    Undo,
    Redo,
    History,
    Help,
    Exit,
    PlannerAdd {
        year: Year,
        semester: Semester,
        codes: Vec<Code>,
    },
    PlannerRemove { codes: Vec<Code> },
    PlannerList,
    RequirementAdd {
        category: ModuleName,
        codes: Vec<Code>,
    },
    RequirementRemove {
        category: ModuleName,
        codes: Vec<Code>,
    },
    RequirementList,
}

impl Command {
    /// True when executing this command changes which snapshot is current,
    /// i.e. the facade must persist afterwards.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Command::Add(_)
                | Command::Edit { .. }
                | Command::Delete { .. }
                | Command::Clear
                | Command::Undo
                | Command::Redo
                | Command::PlannerAdd { .. }
                | Command::PlannerRemove { .. }
                | Command::RequirementAdd { .. }
                | Command::RequirementRemove { .. }
        )
    }

    pub fn execute(
        &self,
        model: &mut VersionedModel,
        history: &CommandHistory,
    ) -> Result<CommandResult> {
        match self {
            Command::Add(module) => add::run(model, module),
            Command::Edit { index, edits } => edit::run(model, *index, edits),
            Command::Delete { index } => delete::run(model, *index),
            Command::Find(predicate) => find::run(model, predicate.clone()),
            Command::List => list::run(model),
            Command::Clear => clear::run(model),
            Command::Undo => undo_redo::undo(model),
            Command::Redo => undo_redo::redo(model),
            Command::History => history_cmd::run(history),
            Command::Help => Ok(CommandResult::new(help::text()).with_help()),
            Command::Exit => Ok(CommandResult::new(help::MESSAGE_EXIT).with_exit()),
            Command::PlannerAdd {
                year,
                semester,
                codes,
            } => planner::add(model, *year, *semester, codes),
            Command::PlannerRemove { codes } => planner::remove(model, codes),
            Command::PlannerList => planner::list(model),
            Command::RequirementAdd { category, codes } => {
                requirement::add(model, category, codes)
            }
            Command::RequirementRemove { category, codes } => {
                requirement::remove(model, category, codes)
            }
            Command::RequirementList => requirement::list(model),
        }
    }
}
