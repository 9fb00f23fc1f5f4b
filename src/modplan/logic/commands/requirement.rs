//! Requirement-category commands: attach codes to a category, detach them,
//! render the categories.

use crate::error::Result;
use crate::logic::commands::CommandResult;
use crate::model::{Code, ModuleName, VersionedModel};

pub const ADD_USAGE: &str = "requirement_add: Adds modules to a requirement category.\n\
    Parameters: n/CATEGORY c/CODE [c/CODE]...\n\
    Example: requirement_add n/Computing Foundation c/CS1010";

pub const REMOVE_USAGE: &str = "requirement_remove: Removes modules from a requirement category.\n\
    Parameters: n/CATEGORY c/CODE [c/CODE]...\n\
    Example: requirement_remove n/Computing Foundation c/CS1010";

pub fn add(
    model: &mut VersionedModel,
    category: &ModuleName,
    codes: &[Code],
) -> Result<CommandResult> {
    let mut next = model.current().clone();
    next.requirement_add(category, codes)?;
    model.commit(next);
    Ok(CommandResult::new(format!(
        "Added to requirement category {category}: {}",
        join(codes)
    )))
}

pub fn remove(
    model: &mut VersionedModel,
    category: &ModuleName,
    codes: &[Code],
) -> Result<CommandResult> {
    let mut next = model.current().clone();
    next.requirement_remove(category, codes)?;
    model.commit(next);
    Ok(CommandResult::new(format!(
        "Removed from requirement category {category}: {}",
        join(codes)
    )))
}

/// Renders every category. No commit, no filter change.
pub fn list(model: &VersionedModel) -> Result<CommandResult> {
    let rendered = model
        .requirement_categories()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    Ok(CommandResult::new(rendered))
}

fn join(codes: &[Code]) -> String {
    codes
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
