use crate::error::Result;
use crate::logic::commands::CommandResult;
use crate::model::VersionedModel;

pub const MESSAGE_SUCCESS: &str = "Listed all modules";

/// Reinstalls the accept-all predicate. No commit.
pub fn run(model: &mut VersionedModel) -> Result<CommandResult> {
    model.reset_filters();
    let listing = render(model);
    if listing.is_empty() {
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    } else {
        Ok(CommandResult::new(format!("{MESSAGE_SUCCESS}\n{listing}")))
    }
}

pub fn render(model: &VersionedModel) -> String {
    model
        .filtered_modules()
        .iter()
        .enumerate()
        .map(|(i, module)| format!("{}. {module}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}
