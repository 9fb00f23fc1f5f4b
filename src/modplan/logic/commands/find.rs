use crate::error::Result;
use crate::logic::commands::CommandResult;
use crate::model::{ModulePredicate, VersionedModel};

pub const USAGE: &str = "find: Lists the modules whose field matches any of the given keywords \
    (case-insensitive, whole words). Exactly one field may be searched.\n\
    Parameters: n/KEYWORD [MORE_KEYWORDS]... | c/KEYWORD... | cr/KEYWORD...\n\
    Example: find n/programming methodology";

/// Installs `predicate` on the module view. Replaces any previous predicate;
/// zero matches is a successful outcome.
pub fn run(model: &mut VersionedModel, predicate: ModulePredicate) -> Result<CommandResult> {
    model.set_module_filter(predicate);
    Ok(CommandResult::new(listed_message(
        model.filtered_modules().len(),
    )))
}

pub fn listed_message(count: usize) -> String {
    format!("{count} modules listed!")
}
