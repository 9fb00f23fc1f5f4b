use crate::error::Result;
use crate::logic::commands::CommandResult;
use crate::model::{Application, VersionedModel};

pub const MESSAGE_SUCCESS: &str = "The module list has been cleared!";

/// Commits the default (empty) snapshot and shows it unfiltered.
pub fn run(model: &mut VersionedModel) -> Result<CommandResult> {
    model.commit(Application::default());
    model.reset_filters();
    Ok(CommandResult::new(MESSAGE_SUCCESS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::commands::testutil::{model_with, typical_modules};

    #[test]
    fn clears_to_default_snapshot_and_is_undoable() {
        let mut model = model_with(typical_modules());
        run(&mut model).unwrap();
        assert_eq!(*model.current(), Application::default());

        model.undo().unwrap();
        assert_eq!(model.current().modules().len(), 3);
    }
}
