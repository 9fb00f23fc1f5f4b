use crate::logic::commands::{add, delete, edit, find, planner, requirement};
use once_cell::sync::Lazy;

pub const MESSAGE_EXIT: &str = "Exiting. Goodbye!";

static HELP_TEXT: Lazy<String> = Lazy::new(|| {
    [
        add::USAGE,
        edit::USAGE,
        delete::USAGE,
        find::USAGE,
        "list: Shows every module, clearing any active search.",
        "clear: Empties the module list (undoable).",
        "undo: Reverts the most recent change.",
        "redo: Reapplies the most recently undone change.",
        "history: Shows the commands entered this session, oldest first.",
        planner::ADD_USAGE,
        planner::REMOVE_USAGE,
        "planner_list: Shows the degree plan, one slot per line.",
        requirement::ADD_USAGE,
        requirement::REMOVE_USAGE,
        "requirement_list: Shows every requirement category.",
        "help: Shows this message.",
        "exit: Quits the program.",
    ]
    .join("\n\n")
});

pub fn text() -> &'static str {
    &HELP_TEXT
}
