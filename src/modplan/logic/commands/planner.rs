//! Degree-plan commands: place codes into a slot, pull them out, render the
//! grid.

use crate::error::Result;
use crate::logic::commands::CommandResult;
use crate::model::{Code, Semester, VersionedModel, Year};

pub const ADD_USAGE: &str = "planner_add: Places modules into a degree-plan slot.\n\
    Parameters: y/YEAR s/SEMESTER c/CODE [c/CODE]...\n\
    Example: planner_add y/1 s/2 c/CS1010 c/MA1521";

pub const REMOVE_USAGE: &str = "planner_remove: Removes modules from the degree plan.\n\
    Parameters: c/CODE [c/CODE]...\n\
    Example: planner_remove c/CS1010";

pub fn add(
    model: &mut VersionedModel,
    year: Year,
    semester: Semester,
    codes: &[Code],
) -> Result<CommandResult> {
    let mut next = model.current().clone();
    next.planner_add(year, semester, codes)?;
    model.commit(next);
    Ok(CommandResult::new(format!(
        "Added to year {year} semester {semester}: {}",
        join(codes)
    )))
}

pub fn remove(model: &mut VersionedModel, codes: &[Code]) -> Result<CommandResult> {
    let mut next = model.current().clone();
    next.planner_remove(codes)?;
    model.commit(next);
    Ok(CommandResult::new(format!(
        "Removed from the degree plan: {}",
        join(codes)
    )))
}

/// Renders the current plan, one slot per line. No commit, no filter change.
pub fn list(model: &VersionedModel) -> Result<CommandResult> {
    let rendered = model
        .planner_slots()
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
