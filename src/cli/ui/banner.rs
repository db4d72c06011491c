use crate::cli::output::current_preferences;

const ART: [&str; 11] = [
    r"  _____ __  __ ____  _____ _   _ ____  _____ ",
    r" | ____|\ \/ /|  _ \| ____| \ | / ___|| ____|",
    r" |  _|   \  / | |_) |  _| |  \| \___ \|  _|  ",
    r" | |___  /  \ |  __/| |___| |\  |___) | |___ ",
    r" |_____|/_/\_\|_|   |_____|_| \_|____/|_____|",
    r"  _____ ____      _    ____ _  _______ ____  ",
    r" |_   _|  _ \    / \  / ___| |/ / ____|  _ \ ",
    r"   | | | |_) |  / _ \| |   | ' /|  _| | |_) |",
    r"   | | |  _ <  / ___ \ |___| . \| |___|  _ < ",
    r"   |_| |_| \_\/_/   \_\____|_|\_\_____|_| \_\",
    r"",
];

const WELCOME: &str = "Welcome to your personal expense tracking system!";
const RULE_WIDTH: usize = 60;

const NO_EXPENSES: [&str; 5] = [
    "",
    "No Expenses Found!",
    "",
    "You haven't recorded any expenses yet.",
    "Use option 1 from the main menu to add your first expense.",
];

pub struct Banner;

impl Banner {
    pub fn render() {
        println!("{}", Self::text());
    }

    pub fn text() -> String {
        let mut lines: Vec<String> = Vec::with_capacity(ART.len() + 2);
        if !current_preferences().screen_reader_mode {
            lines.extend(ART.iter().map(|line| line.trim_end().to_string()));
        }
        lines.push(WELCOME.to_string());
        lines.push("=".repeat(RULE_WIDTH));
        lines.join("\n")
    }
}

/// Boxed notice shown when a listing or summary has nothing to show.
pub fn no_expenses_text() -> String {
    let plain = current_preferences().plain_mode;
    let (top_left, top_right, bottom_left, bottom_right, horizontal, vertical) = if plain {
        ('+', '+', '+', '+', '-', '|')
    } else {
        ('╔', '╗', '╚', '╝', '═', '║')
    };

    let inner = NO_EXPENSES
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        + 4;
    let border = horizontal.to_string().repeat(inner);

    let mut lines = Vec::with_capacity(NO_EXPENSES.len() + 3);
    lines.push(format!("{top_left}{border}{top_right}"));
    for (idx, line) in NO_EXPENSES.iter().chain(std::iter::once(&"")).enumerate() {
        let body = if idx == 1 {
            let remaining = inner - line.chars().count();
            let left = remaining / 2;
            format!("{}{}{}", " ".repeat(left), line, " ".repeat(remaining - left))
        } else {
            format!("  {:<width$}", line, width = inner - 2)
        };
        lines.push(format!("{vertical}{body}{vertical}"));
    }
    lines.push(format!("{bottom_left}{border}{bottom_right}"));
    lines.join("\n")
}

pub fn render_no_expenses() {
    println!("\n{}", no_expenses_text());
}
