use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output;

pub(crate) fn exit(_context: &mut ShellContext) -> CommandResult {
    output::blank_line();
    io::print_info("Thank you for using Expense Tracker!");
    io::print_info("Goodbye!");
    Err(CommandError::ExitRequested)
}

/// Shown when the session ends without choosing Exit (Ctrl+C or end of input).
pub(crate) fn farewell_short() {
    io::print_info("\n\nGoodbye!");
}
