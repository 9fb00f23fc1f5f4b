use crate::error::{PlanError, Result};
use crate::logic::commands::{delete::MESSAGE_INVALID_INDEX, CommandResult};
use crate::model::module::{Code, Credits, Module, ModuleName};
use crate::model::tag::Tag;
use crate::model::VersionedModel;
use std::collections::BTreeSet;

pub const USAGE: &str = "edit: Edits the module at the given position of the displayed list.\n\
    Parameters: INDEX [n/NAME] [c/CODE] [cr/CREDITS] [t/TAG]...\n\
    Example: edit 1 cr/6 t/core";

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided";

/// The fields an edit supplies; `None` keeps the current value. An explicit
/// empty tag set clears the module's tags.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModuleEdits {
    pub name: Option<ModuleName>,
    pub code: Option<Code>,
    pub credits: Option<Credits>,
    pub tags: Option<BTreeSet<Tag>>,
}

impl ModuleEdits {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.code.is_none() && self.credits.is_none() && self.tags.is_none()
    }

    fn apply(&self, target: &Module) -> Module {
        Module::new(
            self.code.clone().unwrap_or_else(|| target.code.clone()),
            self.name.clone().unwrap_or_else(|| target.name.clone()),
            self.credits.unwrap_or(target.credits),
            self.tags.clone().unwrap_or_else(|| target.tags.clone()),
            target.corequisites.clone(),
        )
    }
}

pub fn run(model: &mut VersionedModel, index: usize, edits: &ModuleEdits) -> Result<CommandResult> {
    let target = match index
        .checked_sub(1)
        .and_then(|i| model.filtered_modules().get(i).copied().cloned())
    {
        Some(module) => module,
        None => return Err(PlanError::Command(MESSAGE_INVALID_INDEX.to_string())),
    };

    let edited = edits.apply(&target);
    let mut next = model.current().clone();
    next.set_module(&target.code, edited.clone())?;
    model.commit(next);
    Ok(CommandResult::new(format!("Edited module: {edited}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::commands::testutil::{code, model_with, typical_modules};
    use crate::model::application::MESSAGE_DUPLICATE_MODULE;

    #[test]
    fn partial_edit_keeps_remaining_fields() {
        let mut model = model_with(typical_modules());
        let edits = ModuleEdits {
            credits: Some(Credits::new("6").unwrap()),
            ..Default::default()
        };

        run(&mut model, 1, &edits).unwrap();
        let module = model.current().get_module(&code("CS1010")).unwrap();
        assert_eq!(module.credits.value(), 6);
        assert_eq!(module.name.as_str(), "Programming Methodology");
    }

    #[test]
    fn code_change_colliding_with_existing_module_fails() {
        let mut model = model_with(typical_modules());
        let before = model.current().clone();
        let edits = ModuleEdits {
            code: Some(code("MA1521")),
            ..Default::default()
        };

        let err = run(&mut model, 1, &edits).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_DUPLICATE_MODULE);
        assert_eq!(*model.current(), before);
    }

    #[test]
    fn empty_tag_set_clears_tags() {
        let mut model = model_with(typical_modules());
        let tagged = ModuleEdits {
            tags: Some([Tag::new("core").unwrap()].into()),
            ..Default::default()
        };
        run(&mut model, 1, &tagged).unwrap();
        assert!(!model.current().modules()[0].tags.is_empty());

        let cleared = ModuleEdits {
            tags: Some(BTreeSet::new()),
            ..Default::default()
        };
        run(&mut model, 1, &cleared).unwrap();
        assert!(model.current().modules()[0].tags.is_empty());
    }

    #[test]
    fn invalid_index_fails() {
        let mut model = model_with(typical_modules());
        let edits = ModuleEdits {
            credits: Some(Credits::new("6").unwrap()),
            ..Default::default()
        };
        let err = run(&mut model, 9, &edits).unwrap_err();
        assert_eq!(err.to_string(), MESSAGE_INVALID_INDEX);
    }
}
