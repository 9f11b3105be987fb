use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::share;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "share",
            "Print a link that reproduces the current list",
            "share",
            cmd_share,
        ),
        CommandEntry::new(
            "import",
            "Replace the list from a share link or encoded string",
            "import <link or encoded list>",
            cmd_import,
        ),
    ]
}

fn cmd_share(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.list.is_empty() {
        output::warning("Your list is empty. Add some items to share!");
        return Ok(());
    }
    let url = share::share_url(&context.config.share_base_url, &context.list);
    output::success("Share this link:");
    output::info(url);
    Ok(())
}

fn cmd_import(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(raw) = args.first().copied() else {
        return Err(CommandError::InvalidArguments(
            "usage: import <link or encoded list>".into(),
        ));
    };
    let encoded = share::extract_param(raw).unwrap_or(raw);
    let imported = share::decode(encoded).map_err(|err| {
        CommandError::Message(format!("{err}. The current list is unchanged."))
    })?;
    context.list = imported;
    context.persist()?;
    output::success(format!(
        "Imported {} item(s). The previous list was replaced.",
        context.list.item_count()
    ));
    Ok(())
}
