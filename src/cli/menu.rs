//! Main menu and view-filter choices.

use strsim::levenshtein;

use crate::cli::output;

const MAX_SUGGESTION_DISTANCE: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    AddExpense,
    ViewExpenses,
    Summary,
    Exit,
}

impl MainMenuChoice {
    pub const ALL: [MainMenuChoice; 4] = [
        MainMenuChoice::AddExpense,
        MainMenuChoice::ViewExpenses,
        MainMenuChoice::Summary,
        MainMenuChoice::Exit,
    ];

    pub fn number(self) -> usize {
        match self {
            MainMenuChoice::AddExpense => 1,
            MainMenuChoice::ViewExpenses => 2,
            MainMenuChoice::Summary => 3,
            MainMenuChoice::Exit => 4,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MainMenuChoice::AddExpense => "Add Expense",
            MainMenuChoice::ViewExpenses => "View Expenses",
            MainMenuChoice::Summary => "Get Summary",
            MainMenuChoice::Exit => "Exit",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            MainMenuChoice::AddExpense => &["add"],
            MainMenuChoice::ViewExpenses => &["view", "list"],
            MainMenuChoice::Summary => &["summary"],
            MainMenuChoice::Exit => &["exit", "quit"],
        }
    }

    /// Accepts the menu number or a command word, ignoring case and
    /// surrounding whitespace.
    pub fn parse(input: &str) -> Option<Self> {
        let needle = input.trim().to_ascii_lowercase();
        Self::ALL.into_iter().find(|choice| {
            needle == choice.number().to_string()
                || choice.aliases().iter().any(|alias| *alias == needle)
        })
    }
}

/// Closest command word to a mistyped choice, if any is near enough.
pub fn suggest(input: &str) -> Option<&'static str> {
    let needle = input.trim().to_ascii_lowercase();
    if needle.is_empty() || needle.chars().all(|ch| ch.is_ascii_digit()) {
        return None;
    }

    let mut candidates: Vec<(usize, &'static str)> = MainMenuChoice::ALL
        .iter()
        .flat_map(|choice| choice.aliases().iter().copied())
        .map(|alias| (levenshtein(alias, &needle), alias))
        .collect();
    candidates.sort_by_key(|(distance, _)| *distance);

    candidates
        .first()
        .filter(|(distance, _)| *distance <= MAX_SUGGESTION_DISTANCE)
        .map(|(_, alias)| *alias)
}

pub fn print_main_menu() {
    output::section("Expense Tracker Menu");
    for choice in MainMenuChoice::ALL {
        println!("{}. {}", choice.number(), choice.label());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterChoice {
    All,
    DateRange,
    Category,
}

impl FilterChoice {
    pub const ALL: [FilterChoice; 3] = [
        FilterChoice::All,
        FilterChoice::DateRange,
        FilterChoice::Category,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterChoice::All => "View all expenses",
            FilterChoice::DateRange => "Filter by date range",
            FilterChoice::Category => "Filter by category",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(FilterChoice::All),
            "2" => Some(FilterChoice::DateRange),
            "3" => Some(FilterChoice::Category),
            _ => None,
        }
    }
}

pub fn print_filter_menu() {
    println!("\nFilter options:");
    for (idx, choice) in FilterChoice::ALL.iter().enumerate() {
        println!("{}. {}", idx + 1, choice.label());
    }
}
