use std::io;

use expense_config::{Config, ConfigManager};

use crate::cli::core::{CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::io::{self as cli_io, LineRead, LineSource, ReadlineSource, ScriptSource};
use crate::cli::menu;
use crate::cli::output::{self, OutputPreferences};
use crate::cli::ui::banner::Banner;
use crate::errors::CliError;

/// Selects script mode: prompts are not echoed and answers come from stdin.
pub const SCRIPT_ENV: &str = "EXPENSE_TRACKER_SCRIPT";

const MENU_PROMPT: &str = "\nEnter your choice (1-4): ";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let config = load_config();
    output::set_preferences(OutputPreferences::from_config(&config));

    let input: Box<dyn LineSource> = match mode {
        CliMode::Interactive => Box::new(ReadlineSource::new()?),
        CliMode::Script => Box::new(ScriptSource::new(io::stdin().lock())),
    };

    let mut context = ShellContext::new(mode, config, input);
    run_loop(&mut context)
}

/// A missing config yields defaults; an unreadable one is reported and
/// replaced by defaults for this session.
fn load_config() -> Config {
    match ConfigManager::from_env().and_then(|manager| manager.load()) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(error = %err, "falling back to default config");
            cli_io::print_warning(format!("Could not load config, using defaults: {err}"));
            Config::default()
        }
    }
}

pub fn run_loop(context: &mut ShellContext) -> Result<(), CliError> {
    if context.config.show_banner {
        Banner::render();
    }

    while context.running {
        menu::print_main_menu();

        let line = match context.read_line(MENU_PROMPT) {
            Ok(LineRead::Line(line)) => line,
            Ok(LineRead::Interrupted | LineRead::Eof) => {
                crate::cli::commands::farewell_short();
                break;
            }
            Err(err) => {
                context.report_error(CommandError::from(err))?;
                continue;
            }
        };

        match context.dispatch(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }

    tracing::debug!(status = %context.status(), "shell loop finished");
    Ok(())
}
