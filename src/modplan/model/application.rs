//! The `Application` snapshot: three keyed collections plus the referential
//! invariants between them.
//!
//! A snapshot is cloned, mutated through exactly one of the methods below, and
//! handed to the versioned history, never mutated in place afterwards. Every
//! method validates completely before touching any collection, so a failed
//! call leaves the snapshot bit-identical.

use crate::error::{PlanError, Result};
use crate::model::module::{Code, Module, ModuleName};
use crate::model::plan::{PlannerSlot, Semester, Year};
use crate::model::requirement::RequirementCategory;

pub const MESSAGE_DUPLICATE_MODULE: &str = "This module already exists in the module list";
pub const MESSAGE_SELF_COREQUISITE: &str = "A module cannot be its own corequisite";

#[derive(Debug, Clone)]
pub struct Application {
    modules: Vec<Module>,
    planner: Vec<PlannerSlot>,
    requirements: Vec<RequirementCategory>,
}

impl Default for Application {
    /// An empty catalogue with the standard 4-year, 2-semester planner grid
    /// and the stock requirement categories.
    fn default() -> Self {
        let mut planner = Vec::new();
        for year in 1..=4u8 {
            for semester in 1..=2u8 {
                planner.push(PlannerSlot::empty(
                    Year::try_from(year).expect("year in range"),
                    Semester::try_from(semester).expect("semester in range"),
                ));
            }
        }
        let requirements = [
            ("Computing Foundation", 36),
            ("Mathematics", 12),
            ("Computing Breadth", 20),
            ("IT Professionalism", 12),
            ("General Education", 20),
            ("Unrestricted Electives", 32),
        ]
        .into_iter()
        .map(|(name, credits)| {
            RequirementCategory::new(
                ModuleName::new(name).expect("seed name is valid"),
                crate::model::module::Credits::try_from(credits).expect("seed credits in range"),
            )
        })
        .collect();
        Self {
            modules: Vec::new(),
            planner,
            requirements,
        }
    }
}

impl Application {
    /// Rebuilds a snapshot from persisted collections, re-checking every
    /// invariant the mutation methods would have enforced.
    pub fn from_parts(
        modules: Vec<Module>,
        planner: Vec<PlannerSlot>,
        requirements: Vec<RequirementCategory>,
    ) -> Result<Self> {
        for (i, module) in modules.iter().enumerate() {
            if modules[..i].iter().any(|m| m.code == module.code) {
                return Err(PlanError::Validation(format!(
                    "Duplicate module {} in persisted data",
                    module.code
                )));
            }
        }
        for (i, slot) in planner.iter().enumerate() {
            if planner[..i]
                .iter()
                .any(|s| s.year == slot.year && s.semester == slot.semester)
            {
                return Err(PlanError::Validation(format!(
                    "Duplicate planner slot for year {} semester {}",
                    slot.year, slot.semester
                )));
            }
        }
        for (i, category) in requirements.iter().enumerate() {
            if requirements[..i]
                .iter()
                .any(|c| c.name.eq_ignore_case(&category.name))
            {
                return Err(PlanError::Validation(format!(
                    "Duplicate requirement category {} in persisted data",
                    category.name
                )));
            }
        }

        let app = Self {
            modules,
            planner,
            requirements,
        };
        for module in &app.modules {
            for coreq in &module.corequisites {
                if *coreq == module.code {
                    return Err(PlanError::Validation(MESSAGE_SELF_COREQUISITE.to_string()));
                }
                if !app.has_module(coreq) {
                    return Err(PlanError::Validation(unknown_module_message(coreq)));
                }
            }
        }
        for slot in &app.planner {
            for code in &slot.codes {
                if !app.has_module(code) {
                    return Err(PlanError::Validation(unknown_module_message(code)));
                }
            }
        }
        for category in &app.requirements {
            for code in &category.codes {
                if !app.has_module(code) {
                    return Err(PlanError::Validation(unknown_module_message(code)));
                }
            }
        }
        Ok(app)
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn planner(&self) -> &[PlannerSlot] {
        &self.planner
    }

    pub fn requirements(&self) -> &[RequirementCategory] {
        &self.requirements
    }

    pub fn has_module(&self, code: &Code) -> bool {
        self.modules.iter().any(|m| m.code == *code)
    }

    pub fn get_module(&self, code: &Code) -> Option<&Module> {
        self.modules.iter().find(|m| m.code == *code)
    }

    /// Adds a module. The code must be fresh and every corequisite must name
    /// an existing module other than the new one itself.
    pub fn add_module(&mut self, module: Module) -> Result<()> {
        if self.has_module(&module.code) {
            return Err(PlanError::Command(MESSAGE_DUPLICATE_MODULE.to_string()));
        }
        for coreq in &module.corequisites {
            if *coreq == module.code {
                return Err(PlanError::Command(MESSAGE_SELF_COREQUISITE.to_string()));
            }
            if !self.has_module(coreq) {
                return Err(PlanError::Command(unknown_module_message(coreq)));
            }
        }
        self.modules.push(module);
        Ok(())
    }

    /// Replaces the module keyed by `target`, preserving its position. A code
    /// change must not collide with another module and is cascaded into every
    /// corequisite set, planner slot, and requirement category.
    pub fn set_module(&mut self, target: &Code, edited: Module) -> Result<()> {
        let position = self
            .modules
            .iter()
            .position(|m| m.code == *target)
            .ok_or_else(|| PlanError::Command(unknown_module_message(target)))?;

        if edited.code != *target && self.has_module(&edited.code) {
            return Err(PlanError::Command(MESSAGE_DUPLICATE_MODULE.to_string()));
        }
        for coreq in &edited.corequisites {
            if *coreq == edited.code || *coreq == *target {
                return Err(PlanError::Command(MESSAGE_SELF_COREQUISITE.to_string()));
            }
            if !self.has_module(coreq) {
                return Err(PlanError::Command(unknown_module_message(coreq)));
            }
        }

        let renamed = edited.code != *target;
        let new_code = edited.code.clone();
        self.modules[position] = edited;
        if renamed {
            self.rename_references(target, &new_code);
        }
        Ok(())
    }

    /// Removes the module keyed by `code` and cascades the code out of every
    /// corequisite set, planner slot, and requirement category.
    pub fn remove_module(&mut self, code: &Code) -> Result<()> {
        let position = self
            .modules
            .iter()
            .position(|m| m.code == *code)
            .ok_or_else(|| PlanError::Command(unknown_module_message(code)))?;
        self.modules.remove(position);
        for module in &mut self.modules {
            module.corequisites.remove(code);
        }
        for slot in &mut self.planner {
            slot.codes.remove(code);
        }
        for category in &mut self.requirements {
            category.codes.remove(code);
        }
        Ok(())
    }

    /// Places `codes` into the `(year, semester)` slot. Every code must name
    /// an existing module not yet placed anywhere in the plan.
    pub fn planner_add(&mut self, year: Year, semester: Semester, codes: &[Code]) -> Result<()> {
        if !self
            .planner
            .iter()
            .any(|s| s.year == year && s.semester == semester)
        {
            return Err(PlanError::Command(format!(
                "There is no year {year} semester {semester} slot in the degree plan"
            )));
        }
        for code in codes {
            if !self.has_module(code) {
                return Err(PlanError::Command(unknown_module_message(code)));
            }
            if self.planner.iter().any(|s| s.codes.contains(code)) {
                return Err(PlanError::Command(format!(
                    "Module {code} is already in the degree plan"
                )));
            }
        }
        let slot = self
            .planner
            .iter_mut()
            .find(|s| s.year == year && s.semester == semester)
            .expect("slot existence checked above");
        slot.codes.extend(codes.iter().cloned());
        Ok(())
    }

    /// Removes `codes` from whichever slots hold them. Every code must
    /// currently be placed somewhere in the plan.
    pub fn planner_remove(&mut self, codes: &[Code]) -> Result<()> {
        for code in codes {
            if !self.planner.iter().any(|s| s.codes.contains(code)) {
                return Err(PlanError::Command(format!(
                    "Module {code} is not in the degree plan"
                )));
            }
        }
        for slot in &mut self.planner {
            for code in codes {
                slot.codes.remove(code);
            }
        }
        Ok(())
    }

    pub fn get_requirement(&self, name: &ModuleName) -> Option<&RequirementCategory> {
        self.requirements.iter().find(|c| c.name.eq_ignore_case(name))
    }

    /// Adds `codes` to the named category. The category must exist, every code
    /// must name an existing module, and none may already be in the category.
    pub fn requirement_add(&mut self, name: &ModuleName, codes: &[Code]) -> Result<()> {
        let position = self
            .requirements
            .iter()
            .position(|c| c.name.eq_ignore_case(name))
            .ok_or_else(|| PlanError::Command(unknown_category_message(name)))?;
        for code in codes {
            if !self.has_module(code) {
                return Err(PlanError::Command(unknown_module_message(code)));
            }
            if self.requirements[position].codes.contains(code) {
                return Err(PlanError::Command(format!(
                    "Module {code} is already in requirement category {}",
                    self.requirements[position].name
                )));
            }
        }
        self.requirements[position]
            .codes
            .extend(codes.iter().cloned());
        Ok(())
    }

    /// Removes `codes` from the named category. Every code must currently be
    /// in it.
    pub fn requirement_remove(&mut self, name: &ModuleName, codes: &[Code]) -> Result<()> {
        let position = self
            .requirements
            .iter()
            .position(|c| c.name.eq_ignore_case(name))
            .ok_or_else(|| PlanError::Command(unknown_category_message(name)))?;
        for code in codes {
            if !self.requirements[position].codes.contains(code) {
                return Err(PlanError::Command(format!(
                    "Module {code} is not in requirement category {}",
                    self.requirements[position].name
                )));
            }
        }
        for code in codes {
            self.requirements[position].codes.remove(code);
        }
        Ok(())
    }

    fn rename_references(&mut self, old: &Code, new: &Code) {
        for module in &mut self.modules {
            if module.corequisites.remove(old) {
                module.corequisites.insert(new.clone());
            }
        }
        for slot in &mut self.planner {
            if slot.codes.remove(old) {
                slot.codes.insert(new.clone());
            }
        }
        for category in &mut self.requirements {
            if category.codes.remove(old) {
                category.codes.insert(new.clone());
            }
        }
    }
}

/// Set equality respecting natural keys: collections are compared
/// order-insensitively, entities field-by-field.
impl PartialEq for Application {
    fn eq(&self, other: &Self) -> bool {
        set_eq(&self.modules, &other.modules)
            && set_eq(&self.planner, &other.planner)
            && set_eq(&self.requirements, &other.requirements)
    }
}

impl Eq for Application {}

fn set_eq<T: PartialEq>(a: &[T], b: &[T]) -> bool {
    a.len() == b.len() && a.iter().all(|item| b.contains(item))
}

fn unknown_module_message(code: &Code) -> String {
    format!("Module {code} does not exist in the module list")
}

fn unknown_category_message(name: &ModuleName) -> String {
    format!("Requirement category {name} does not exist")
}
