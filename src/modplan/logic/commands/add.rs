use crate::error::Result;
use crate::logic::commands::CommandResult;
use crate::model::{Module, VersionedModel};

pub const USAGE: &str = "add: Adds a module to the module list.\n\
    Parameters: n/NAME c/CODE cr/CREDITS [t/TAG]... [co/CODE]...\n\
    Example: add n/Programming Methodology c/CS1010 cr/4 t/core co/MA1521";

pub fn run(model: &mut VersionedModel, module: &Module) -> Result<CommandResult> {
    let mut next = model.current().clone();
    next.add_module(module.clone())?;
    model.commit(next);
    Ok(CommandResult::new(format!("New module added: {module}")))
}
