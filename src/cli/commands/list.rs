use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::table::Table;
use crate::export::{export_view, EXPORT_HEADER};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Show the list grouped by category", "list", cmd_list),
        CommandEntry::new("total", "Show the estimated total cost", "total", cmd_total),
        CommandEntry::new(
            "export",
            "Print a copy-friendly snapshot of the list",
            "export",
            cmd_export,
        ),
        CommandEntry::new("clear", "Remove every item from the list", "clear", cmd_clear),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.list.is_empty() {
        output::info("Your list is empty.");
        return Ok(());
    }
    let view = export_view(&context.list, &context.config.currency_symbol);
    let mut table = Table::new(EXPORT_HEADER);
    for row in &view.rows {
        table.push_row(row.cells());
    }
    output::info(table.render());
    output::info(format!("Estimated total: {}", view.total));
    Ok(())
}

fn cmd_total(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(format!(
        "Estimated total: {}{:.2}",
        context.config.currency_symbol,
        context.list.total_cost()
    ));
    Ok(())
}

fn cmd_export(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let view = export_view(&context.list, &context.config.currency_symbol);
    if view.rows.is_empty() {
        output::info("Your list is empty. Nothing to export.");
        return Ok(());
    }
    output::info(format!("Grocery List - {}", view.generated_on));
    let mut table = Table::new(EXPORT_HEADER);
    for row in &view.rows {
        table.push_row(row.cells());
    }
    output::info(table.render());
    output::info(format!("Total: {}", view.total));
    Ok(())
}

fn cmd_clear(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    if context.list.is_empty() {
        output::info("Your list is already empty.");
        return Ok(());
    }
    if context.mode() == CliMode::Interactive {
        let confirmed = output::confirm(&context.theme, "Remove every item?", false)?;
        if !confirmed {
            return Err(CommandError::Message("Clear cancelled.".into()));
        }
    }
    context.list.clear();
    context.persist()?;
    output::success("List cleared.");
    Ok(())
}
