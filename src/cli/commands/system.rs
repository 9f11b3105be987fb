use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("help", "Show commands or usage for one command", "help [command]", cmd_help),
        CommandEntry::new("version", "Show the CLI version", "version", cmd_version),
        CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit),
    ]
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None => {
            help::print_overview(&context.registry);
            Ok(())
        }
        Some(name) => match context.command(&name.to_lowercase()) {
            Some(entry) => {
                help::print_command(entry);
                Ok(())
            }
            None => Err(CommandError::InvalidArguments(format!(
                "unknown command `{}`",
                name
            ))),
        },
    }
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    ));
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info("Goodbye!");
    Err(CommandError::ExitRequested)
}
