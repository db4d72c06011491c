mod expense;
mod system;

pub(crate) use expense::{add_expense, show_summary, view_expenses};
pub(crate) use system::{exit, farewell_short};
