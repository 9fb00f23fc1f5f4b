use crate::error::Result;
use crate::logic::commands::CommandResult;
use crate::logic::history::CommandHistory;

pub const MESSAGE_NO_HISTORY: &str = "You have not yet entered any commands.";
pub const MESSAGE_HEADER: &str = "Entered commands (oldest first):";

/// Renders the raw-input log, newline-joined, oldest first.
pub fn run(history: &CommandHistory) -> Result<CommandResult> {
    if history.is_empty() {
        return Ok(CommandResult::new(MESSAGE_NO_HISTORY));
    }
    Ok(CommandResult::new(format!(
        "{MESSAGE_HEADER}\n{}",
        history.entries().join("\n")
    )))
}
