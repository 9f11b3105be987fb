mod catalog;
mod config;
mod item;
mod list;
mod share;
mod system;

use crate::cli::registry::CommandEntry;

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(system::definitions());
    commands.extend(item::definitions());
    commands.extend(list::definitions());
    commands.extend(catalog::definitions());
    commands.extend(share::definitions());
    commands.extend(config::definitions());
    commands
}
