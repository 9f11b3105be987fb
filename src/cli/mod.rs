pub(crate) mod commands;
mod core;
mod help;
mod output;
pub(crate) mod registry;
mod shell;
mod table;

pub use self::core::{CliError, CliMode, CommandError, CommandResult, ShellContext};
pub use shell::run_cli;
