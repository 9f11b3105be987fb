use crate::catalog;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "catalog",
        "Browse the built-in catalog and item codes",
        "catalog [category]",
        cmd_catalog,
    )]
}

fn cmd_catalog(_context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        None => {
            for category in catalog::categories_in_order() {
                print_category(category);
            }
            output::hint("Use `pick <code>` to add a catalog item.");
            Ok(())
        }
        Some(wanted) => {
            let category = catalog::categories_in_order()
                .find(|candidate| candidate.eq_ignore_ascii_case(wanted))
                .ok_or_else(|| {
                    CommandError::InvalidArguments(format!("unknown category `{}`", wanted))
                })?;
            print_category(category);
            Ok(())
        }
    }
}

fn print_category(category: &str) {
    output::section(category);
    if let Some(items) = catalog::items_in(category) {
        for (code, name) in items {
            output::info(format!("  {:<6} {}", code, name));
        }
    }
}
