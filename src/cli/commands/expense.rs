use expense_core::{Expense, ExpenseQuery};
use expense_domain::Displayable;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::menu::{self, FilterChoice};
use crate::cli::ui::{banner, reports};

/// Parses a typed amount. Only finite numbers are accepted.
pub(crate) fn parse_amount(raw: &str) -> Result<f64, CommandError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .ok_or_else(|| CommandError::InvalidAmount(raw.to_string()))
}

pub(crate) fn add_expense(context: &mut ShellContext) -> CommandResult {
    let date = context.prompt("Enter date (YYYY-MM-DD): ")?;
    let amount = parse_amount(&context.prompt("Enter amount: ")?)?;
    let category = context.prompt("Enter category: ")?;
    let description = context.prompt("Enter description: ")?;

    let expense = context
        .store
        .add(date.trim(), amount, category, description)?;
    tracing::info!(expense = %expense.display_label(), "expense added from menu");
    io::print_success("Expense added successfully!");
    Ok(())
}

pub(crate) fn view_expenses(context: &mut ShellContext) -> CommandResult {
    menu::print_filter_menu();
    let raw = context.prompt("Enter filter choice (1-3): ")?;

    let query = match FilterChoice::parse(&raw) {
        Some(FilterChoice::All) => ExpenseQuery::all(),
        Some(FilterChoice::DateRange) => {
            let start = context.prompt("Enter start date (YYYY-MM-DD): ")?;
            let end = context.prompt("Enter end date (YYYY-MM-DD): ")?;
            ExpenseQuery::between(start.trim(), end.trim())
        }
        Some(FilterChoice::Category) => {
            ExpenseQuery::in_category(context.prompt("Enter category: ")?)
        }
        None => return Err(CommandError::InvalidFilterChoice(raw)),
    };

    let expenses: Vec<&Expense> = context.store.query(&query)?;
    if expenses.is_empty() {
        banner::render_no_expenses();
    } else {
        println!("\n{}", reports::expense_table(&expenses));
    }
    Ok(())
}

pub(crate) fn show_summary(context: &mut ShellContext) -> CommandResult {
    let summary = context
        .store
        .summarize_by(context.config.category_grouping());
    for warning in &summary.warnings {
        io::print_warning(warning);
    }

    if summary.is_empty() {
        banner::render_no_expenses();
    } else {
        println!("\n{}", reports::summary_table(&summary));
    }
    Ok(())
}
