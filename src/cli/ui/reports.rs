//! Expense listing and category summary renderers.

use expense_core::{Expense, Summary};
use expense_domain::format_date;

use crate::cli::output::emphasize;
use crate::cli::ui::table_renderer::{
    centered, heavy_rule, horizontal_rule, Alignment, Table, TableColumn,
};

const AMOUNT_WIDTH: usize = 10;
const DESCRIPTION_MAX_WIDTH: usize = 48;

pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Renders the expense list table with its title and count footer.
pub fn expense_table(expenses: &[&Expense]) -> String {
    let mut table = Table::new(vec![
        TableColumn::new("Date", Alignment::Left).with_min_width(10),
        TableColumn::new("Amount", Alignment::Right).with_min_width(AMOUNT_WIDTH),
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Description", Alignment::Left).with_max_width(DESCRIPTION_MAX_WIDTH),
    ]);
    for expense in expenses {
        table.add_row([
            format_date(expense.date),
            format_money(expense.amount),
            expense.category.clone(),
            expense.description.clone(),
        ]);
    }

    let widths = table.compute_widths();
    let width = table.total_width(&widths);
    let heavy = heavy_rule(width);

    [
        heavy.clone(),
        emphasize(&centered("EXPENSE LIST", width)),
        heavy.clone(),
        table.render(),
        heavy.clone(),
        format!("Total Expenses: {}", expenses.len()),
        heavy,
    ]
    .join("\n")
}

/// Renders per-category totals in descending order followed by the grand total.
pub fn summary_table(summary: &Summary) -> String {
    let total = format_money(summary.total);
    let mut table = Table::new(vec![
        TableColumn::new("Category", Alignment::Left),
        TableColumn::new("Amount", Alignment::Right).with_min_width(AMOUNT_WIDTH.max(total.len())),
    ]);
    for (category, amount) in summary.ranked() {
        table.add_row([category.to_string(), format_money(amount)]);
    }

    let widths = table.compute_widths();
    let width = table.total_width(&widths);
    let heavy = heavy_rule(width);
    let light = horizontal_rule(width);
    let total_row = table.render_row(&["TOTAL".to_string(), total], &widths);

    [
        heavy.clone(),
        emphasize(&centered("EXPENSE SUMMARY", width)),
        heavy.clone(),
        String::new(),
        "Category Breakdown:".to_string(),
        light.clone(),
        table.render(),
        light,
        emphasize(&total_row),
        heavy,
    ]
    .join("\n")
}
