mod commands;
pub mod core;
pub mod io;
pub mod menu;
pub mod output;
mod shell;
pub mod shell_context;
pub mod ui;

pub use shell::{run_cli, run_loop, SCRIPT_ENV};
