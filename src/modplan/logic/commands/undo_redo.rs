use crate::error::Result;
use crate::logic::commands::CommandResult;
use crate::model::VersionedModel;

pub const MESSAGE_UNDO_SUCCESS: &str = "Undo success!";
pub const MESSAGE_REDO_SUCCESS: &str = "Redo success!";

/// Moves the cursor one snapshot back and shows the restored state
/// unfiltered.
pub fn undo(model: &mut VersionedModel) -> Result<CommandResult> {
    model.undo()?;
    model.reset_filters();
    Ok(CommandResult::new(MESSAGE_UNDO_SUCCESS))
}

pub fn redo(model: &mut VersionedModel) -> Result<CommandResult> {
    model.redo()?;
    model.reset_filters();
    Ok(CommandResult::new(MESSAGE_REDO_SUCCESS))
}
