//! # Logic facade
//!
//! One request/response call: raw line in, [`CommandResult`] out. The facade
//! owns the versioned model, the command history log, and a storage backend;
//! it parses, records, executes, and persists, in that order. It is the only
//! layer that talks to storage, and the only place storage failures are
//! translated into command errors.
//!
//! Generic over [`Storage`]: `Logic<JsonStorage>` in production,
//! `Logic<InMemoryStorage>` in tests.

use crate::error::{PlanError, Result};
use crate::model::VersionedModel;
use crate::storage::Storage;
use tracing::{debug, warn};

pub mod commands;
pub mod history;
pub mod parser;

pub use commands::CommandResult;
use history::CommandHistory;

pub const FILE_OPS_ERROR_MESSAGE: &str = "File operation failed: ";

pub struct Logic<S: Storage> {
    model: VersionedModel,
    storage: S,
    history: CommandHistory,
}

impl<S: Storage> Logic<S> {
    pub fn new(model: VersionedModel, storage: S) -> Self {
        Self {
            model,
            storage,
            history: CommandHistory::new(),
        }
    }

    /// Executes one raw input line.
    ///
    /// A parse failure leaves everything untouched; the line is not even
    /// recorded. A command failure leaves the model untouched but keeps the
    /// line in the history log. A persistence failure after a successful
    /// mutation is reported as a command error; the in-memory state keeps the
    /// committed snapshot (documented trade-off).
    pub fn execute(&mut self, line: &str) -> Result<CommandResult> {
        let command = parser::parse(line)?;
        self.history.add(line.trim());
        debug!(command = ?command, "executing");

        let result = command.execute(&mut self.model, &self.history)?;

        if command.mutates() {
            if let Err(cause) = self.storage.save(self.model.current()) {
                warn!(%cause, "failed to persist application state");
                return Err(PlanError::Command(format!(
                    "{FILE_OPS_ERROR_MESSAGE}{cause}"
                )));
            }
        }
        Ok(result)
    }

    pub fn model(&self) -> &VersionedModel {
        &self.model
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Application, ModulePredicate};
    use crate::storage::memory::InMemoryStorage;

    fn logic() -> Logic<InMemoryStorage> {
        Logic::new(
            VersionedModel::new(Application::default()),
            InMemoryStorage::new(),
        )
    }

    #[test]
    fn parse_failure_records_nothing() {
        let mut logic = logic();
        let err = logic.execute("uicfhmowqewca").unwrap_err();
        assert!(matches!(err, PlanError::Parse(_)));
        assert!(logic.history().is_empty());
    }

    #[test]
    fn command_failure_keeps_the_line_in_history() {
        let mut logic = logic();
        let err = logic.execute("delete 9").unwrap_err();
        assert!(matches!(err, PlanError::Command(_)));
        assert_eq!(logic.history().entries(), ["delete 9"]);
    }

    #[test]
    fn mutating_command_persists_the_committed_snapshot() {
        let mut logic = logic();
        logic
            .execute("add n/Programming Methodology c/CS1010 cr/4")
            .unwrap();

        let saved = logic.storage.saved().expect("snapshot was saved");
        assert_eq!(saved, *logic.model().current());
        assert_eq!(saved.modules().len(), 1);
    }

    #[test]
    fn pure_queries_do_not_persist() {
        let mut logic = logic();
        logic.execute("list").unwrap();
        logic.execute("find n/anything").unwrap();
        logic.execute("history").unwrap();
        assert!(logic.storage.saved().is_none());
    }

    #[test]
    fn persistence_failure_reports_error_but_keeps_committed_state() {
        let mut logic = Logic::new(
            VersionedModel::new(Application::default()),
            InMemoryStorage::failing(),
        );

        let err = logic
            .execute("add n/Programming Methodology c/CS1010 cr/4")
            .unwrap_err();
        assert!(err.to_string().starts_with(FILE_OPS_ERROR_MESSAGE));
        // the in-memory model still reflects the committed snapshot
        assert_eq!(logic.model().current().modules().len(), 1);
    }

    #[test]
    fn undo_redo_round_trip_through_the_facade() {
        let mut logic = logic();
        logic
            .execute("add n/Programming Methodology c/CS1010 cr/4")
            .unwrap();
        logic
            .execute("add n/Calculus for Computing c/MA1521 cr/4")
            .unwrap();

        logic.execute("undo").unwrap();
        logic.execute("undo").unwrap();
        assert_eq!(*logic.model().current(), Application::default());

        logic.execute("redo").unwrap();
        logic.execute("redo").unwrap();
        assert_eq!(logic.model().current().modules().len(), 2);

        // a new mutation after undo invalidates redo
        logic.execute("undo").unwrap();
        logic
            .execute("add n/Quantitative Reasoning c/GER1000 cr/2")
            .unwrap();
        let err = logic.execute("redo").unwrap_err();
        assert!(matches!(err, PlanError::Command(_)));
    }

    #[test]
    fn history_command_sees_itself_and_earlier_lines() {
        let mut logic = logic();
        logic.execute("list").unwrap();
        let result = logic.execute("history").unwrap();
        assert!(result.feedback.contains("list"));
        assert!(result.feedback.contains("history"));
    }

    #[test]
    fn find_installs_predicate_through_the_facade() {
        let mut logic = logic();
        logic
            .execute("add n/Programming Methodology c/CS1010 cr/4")
            .unwrap();
        let result = logic.execute("find n/programming").unwrap();
        assert_eq!(result.feedback, "1 modules listed!");
        assert_eq!(
            *logic.model().module_filter(),
            ModulePredicate::NameContains(vec!["programming".into()])
        );
    }

    #[test]
    fn exit_and_help_set_result_flags() {
        let mut logic = logic();
        assert!(logic.execute("help").unwrap().show_help);
        assert!(logic.execute("exit").unwrap().is_exit);
    }
}
