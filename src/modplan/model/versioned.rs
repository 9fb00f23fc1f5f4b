//! Linear undo/redo over application snapshots.
//!
//! The model owns every snapshot it has ever committed, plus a cursor into
//! that history. Committing after an undo truncates the forward tail: a new
//! edit invalidates redo. The history is never empty and the cursor always
//! points inside it.

use crate::error::{PlanError, Result};
use crate::model::application::Application;
use crate::model::module::Module;
use crate::model::plan::PlannerSlot;
use crate::model::predicate::ModulePredicate;
use crate::model::requirement::RequirementCategory;

pub const MESSAGE_NOTHING_TO_UNDO: &str = "No more commands to undo!";
pub const MESSAGE_NOTHING_TO_REDO: &str = "No more commands to redo!";

#[derive(Debug)]
pub struct VersionedModel {
    history: Vec<Application>,
    position: usize,
    module_filter: ModulePredicate,
}

impl VersionedModel {
    pub fn new(initial: Application) -> Self {
        Self {
            history: vec![initial],
            position: 0,
            module_filter: ModulePredicate::All,
        }
    }

    pub fn current(&self) -> &Application {
        &self.history[self.position]
    }

    /// Discards any redo tail, appends `next`, and moves the cursor onto it.
    pub fn commit(&mut self, next: Application) {
        self.history.truncate(self.position + 1);
        self.history.push(next);
        self.position = self.history.len() - 1;
    }

    pub fn can_undo(&self) -> bool {
        self.position > 0
    }

    pub fn can_redo(&self) -> bool {
        self.position + 1 < self.history.len()
    }

    pub fn undo(&mut self) -> Result<()> {
        if !self.can_undo() {
            return Err(PlanError::Command(MESSAGE_NOTHING_TO_UNDO.to_string()));
        }
        self.position -= 1;
        Ok(())
    }

    pub fn redo(&mut self) -> Result<()> {
        if !self.can_redo() {
            return Err(PlanError::Command(MESSAGE_NOTHING_TO_REDO.to_string()));
        }
        self.position += 1;
        Ok(())
    }

    /// Installs a module predicate. O(collection) on the next read, commits
    /// nothing.
    pub fn set_module_filter(&mut self, predicate: ModulePredicate) {
        self.module_filter = predicate;
    }

    pub fn reset_filters(&mut self) {
        self.module_filter = ModulePredicate::All;
    }

    pub fn module_filter(&self) -> &ModulePredicate {
        &self.module_filter
    }

    /// The module view: recomputed against whichever snapshot is current,
    /// preserving the snapshot's insertion order.
    pub fn filtered_modules(&self) -> Vec<&Module> {
        self.current()
            .modules()
            .iter()
            .filter(|m| self.module_filter.test(m))
            .collect()
    }

    pub fn planner_slots(&self) -> &[PlannerSlot] {
        self.current().planner()
    }

    pub fn requirement_categories(&self) -> &[RequirementCategory] {
        self.current().requirements()
    }
}
