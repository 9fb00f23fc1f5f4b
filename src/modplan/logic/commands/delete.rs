use crate::error::{PlanError, Result};
use crate::logic::commands::CommandResult;
use crate::model::VersionedModel;

pub const USAGE: &str = "delete: Deletes the module at the given position of the displayed list.\n\
    Parameters: INDEX\n\
    Example: delete 1";

pub const MESSAGE_INVALID_INDEX: &str = "The module index provided is invalid";

/// `index` is 1-based and resolves against the *currently filtered* view.
pub fn run(model: &mut VersionedModel, index: usize) -> Result<CommandResult> {
    let target = match index
        .checked_sub(1)
        .and_then(|i| model.filtered_modules().get(i).copied().cloned())
    {
        Some(module) => module,
        None => return Err(PlanError::Command(MESSAGE_INVALID_INDEX.to_string())),
    };

    let mut next = model.current().clone();
    next.remove_module(&target.code)?;
    model.commit(next);
    Ok(CommandResult::new(format!("Deleted module: {target}")))
}
