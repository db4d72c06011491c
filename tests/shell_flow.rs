use std::io::Cursor;

use expense_config::Config;
use expense_tracker::cli::core::{CliMode, CommandError, LoopControl, ShellContext};
use expense_tracker::cli::io::{LineRead, LineSource, ScriptSource};
use expense_tracker::cli::run_loop;
use expense_tracker::errors::CliError;

fn context_with(input: &str) -> ShellContext {
    let source = ScriptSource::new(Cursor::new(input.to_string()));
    ShellContext::new(CliMode::Script, Config::default(), Box::new(source))
}

/// Answers every prompt with Ctrl+C.
struct Interrupting;

impl LineSource for Interrupting {
    fn read_line(&mut self, _prompt: &str) -> Result<LineRead, CliError> {
        Ok(LineRead::Interrupted)
    }
}

#[test]
fn add_choice_records_expense_as_typed() {
    let mut context = context_with("2025-05-01\n 15.99 \n Food \nLunch with team\n");

    let control = context.dispatch("1").expect("add succeeds");

    assert_eq!(control, LoopControl::Continue);
    assert_eq!(context.store.len(), 1);
    let stored = context.store.get(0).unwrap();
    assert_eq!(stored.amount, 15.99);
    assert_eq!(stored.category, " Food ");
    assert_eq!(stored.description, "Lunch with team");
    assert_eq!(context.last_command.as_deref(), Some("1"));
}

#[test]
fn bad_date_surfaces_core_error() {
    let mut context = context_with("2025-13-01\n10\nTest\nTest\n");

    let err = context.dispatch("add").expect_err("bad date");

    assert!(matches!(err, CommandError::Core(_)));
    assert!(context.store.is_empty());
    context.report_error(err).expect("recoverable");
}

#[test]
fn unknown_choice_is_recoverable() {
    let mut context = context_with("");

    let err = context.dispatch("7").expect_err("unknown choice");

    assert!(matches!(err, CommandError::InvalidChoice(ref raw) if raw == "7"));
    assert!(context.report_error(err).is_ok());
    assert!(context.running);
}

#[test]
fn exit_choice_stops_the_loop() {
    let mut context = context_with("");

    assert_eq!(context.dispatch("4").unwrap(), LoopControl::Exit);
    assert!(!context.running);
}

#[test]
fn interrupt_inside_an_action_cancels_it() {
    let mut context =
        ShellContext::new(CliMode::Interactive, Config::default(), Box::new(Interrupting));

    let err = context.dispatch("1").expect_err("cancelled");

    assert!(matches!(err, CommandError::Cancelled));
    assert!(context.report_error(err).is_ok());
    assert!(context.store.is_empty());
}

#[test]
fn interrupt_at_main_menu_ends_session() {
    let mut context =
        ShellContext::new(CliMode::Interactive, Config::default(), Box::new(Interrupting));

    run_loop(&mut context).expect("clean exit");
    assert!(context.store.is_empty());
}

#[test]
fn full_session_runs_to_exit() {
    let mut context = context_with(
        "1\n2025-05-01\n15.99\nFood\nLunch\n\
         1\n2025-05-02\n50\nTransport\nGas\n\
         2\n3\nfood\n\
         3\n\
         4\n\
         1\n2025-05-09\n1\nNever\nReached\n",
    );

    run_loop(&mut context).expect("session");

    assert_eq!(context.store.len(), 2);
    assert!(!context.running);
    assert!((context.store.summarize().total - 65.99).abs() < 1e-9);
}

#[test]
fn undecodable_answer_is_recoverable() {
    let source = ScriptSource::new(Cursor::new(b"\xff\n".to_vec()));
    let mut context = ShellContext::new(CliMode::Script, Config::default(), Box::new(source));

    let err = context.dispatch("1").expect_err("invalid utf-8 answer");

    assert!(matches!(err, CommandError::UnreadableInput(_)));
    assert!(context.store.is_empty());
    assert!(context.report_error(err).is_ok());
    assert!(context.running);
}

#[test]
fn undecodable_menu_line_does_not_end_the_loop() {
    let source = ScriptSource::new(Cursor::new(b"\xff\n1\n2025-05-01\n5\nFood\nLunch\n".to_vec()));
    let mut context = ShellContext::new(CliMode::Script, Config::default(), Box::new(source));

    run_loop(&mut context).expect("loop survives bad input");

    assert_eq!(context.store.len(), 1);
}
