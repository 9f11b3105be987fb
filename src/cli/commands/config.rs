use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change CLI settings",
        "config show | config set <share_base_url|currency_symbol> <value>",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] | ["show"] => {
            output::info(format!(
                "share_base_url  = {}",
                context.config.share_base_url
            ));
            output::info(format!(
                "currency_symbol = {}",
                context.config.currency_symbol
            ));
            Ok(())
        }
        ["set", key, value] => {
            match *key {
                "share_base_url" => context.config.share_base_url = (*value).to_string(),
                "currency_symbol" => context.config.currency_symbol = (*value).to_string(),
                other => {
                    return Err(CommandError::InvalidArguments(format!(
                        "unknown setting `{}`",
                        other
                    )))
                }
            }
            context.persist_config()?;
            output::success(format!("Updated `{}`.", key));
            Ok(())
        }
        _ => Err(CommandError::InvalidArguments(
            "usage: config show | config set <key> <value>".into(),
        )),
    }
}
