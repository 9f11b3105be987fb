use crate::catalog;
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::list::{ItemUpdate, LineItem};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add an item by name (catalog or custom)",
            "add <item name>",
            cmd_add,
        ),
        CommandEntry::new(
            "pick",
            "Add a catalog item by its code",
            "pick <code>",
            cmd_pick,
        ),
        CommandEntry::new(
            "remove",
            "Remove an item from a category",
            "remove <category> <item>",
            cmd_remove,
        ),
        CommandEntry::new(
            "check",
            "Mark an item as done",
            "check <category> <item>",
            cmd_check,
        ),
        CommandEntry::new(
            "uncheck",
            "Mark an item as not done",
            "uncheck <category> <item>",
            cmd_uncheck,
        ),
        CommandEntry::new(
            "note",
            "Set an item's type note (empty clears it)",
            "note <category> <item> [text...]",
            cmd_note,
        ),
        CommandEntry::new(
            "qty",
            "Set an item's quantity",
            "qty <category> <item> <count>",
            cmd_qty,
        ),
        CommandEntry::new(
            "price",
            "Set an item's unit price",
            "price <category> <item> <amount>",
            cmd_price,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.is_empty() {
        return Err(CommandError::InvalidArguments("usage: add <item name>".into()));
    }
    let text = args.join(" ");
    let Some(added) = context.list.add_manual(&text) else {
        return Err(CommandError::InvalidArguments("item name cannot be empty".into()));
    };
    if added.outcome.is_added() {
        context.persist()?;
        output::success(format!("Added `{}` under {}.", added.name, added.category));
    } else {
        output::warning(format!(
            "`{}` is already on the list under {}.",
            added.name, added.category
        ));
    }
    Ok(())
}

fn cmd_pick(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some(code) = args.first().copied() else {
        return Err(CommandError::InvalidArguments("usage: pick <code>".into()));
    };
    let Some((category, name)) = catalog::resolve(code) else {
        return Err(CommandError::InvalidArguments(format!(
            "unknown catalog code `{}`. Use `catalog` to browse codes.",
            code
        )));
    };
    if context
        .list
        .add_item(category, LineItem::new(code, name))
        .is_added()
    {
        context.persist()?;
        output::success(format!("Added `{}` under {}.", name, category));
    } else {
        output::warning(format!("`{}` is already on the list under {}.", name, category));
    }
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [category_arg, reference] = require_target(args, "usage: remove <category> <item>")?;
    let (category, id) = context.resolve_target(category_arg, reference)?;
    context.list.remove_item(&category, &id);
    context.persist()?;
    output::success(format!("Removed `{}` from {}.", reference, category));
    Ok(())
}

fn cmd_check(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    set_checked(context, args, true, "usage: check <category> <item>")
}

fn cmd_uncheck(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    set_checked(context, args, false, "usage: uncheck <category> <item>")
}

fn set_checked(
    context: &mut ShellContext,
    args: &[&str],
    checked: bool,
    usage: &str,
) -> CommandResult {
    let [category_arg, reference] = require_target(args, usage)?;
    let (category, id) = context.resolve_target(category_arg, reference)?;
    context
        .list
        .update_item(&category, &id, ItemUpdate::SetChecked(checked));
    context.persist()?;
    output::success(format!(
        "`{}` marked as {}.",
        reference,
        if checked { "done" } else { "not done" }
    ));
    Ok(())
}

fn cmd_note(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() < 2 {
        return Err(CommandError::InvalidArguments(
            "usage: note <category> <item> [text...]".into(),
        ));
    }
    let (category, id) = context.resolve_target(args[0], args[1])?;
    let note = args[2..].join(" ");
    context
        .list
        .update_item(&category, &id, ItemUpdate::SetNote(note.clone()));
    context.persist()?;
    if note.is_empty() {
        output::success(format!("Cleared note on `{}`.", args[1]));
    } else {
        output::success(format!("Note on `{}` set to `{}`.", args[1], note));
    }
    Ok(())
}

fn cmd_qty(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() != 3 {
        return Err(CommandError::InvalidArguments(
            "usage: qty <category> <item> <count>".into(),
        ));
    }
    let (category, id) = context.resolve_target(args[0], args[1])?;
    let update = ItemUpdate::qty_from_input(args[2]);
    if let ItemUpdate::SetQty(qty) = &update {
        if args[2].trim().parse::<u32>().map_or(true, |parsed| parsed == 0) {
            output::warning(format!("Quantity `{}` is not a positive count; using {}.", args[2], qty));
        }
    }
    context.list.update_item(&category, &id, update);
    context.persist()?;
    output::success(format!("Quantity updated for `{}`.", args[1]));
    Ok(())
}

fn cmd_price(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if args.len() != 3 {
        return Err(CommandError::InvalidArguments(
            "usage: price <category> <item> <amount>".into(),
        ));
    }
    let (category, id) = context.resolve_target(args[0], args[1])?;
    let price = args[2].to_string();
    if price.trim().parse::<f64>().is_err() {
        output::warning(format!(
            "Price `{}` does not parse; it is kept but will not count toward the total.",
            price
        ));
    }
    context
        .list
        .update_item(&category, &id, ItemUpdate::SetPrice(price));
    context.persist()?;
    output::success(format!("Price updated for `{}`.", args[1]));
    Ok(())
}

fn require_target<'a>(args: &[&'a str], usage: &str) -> Result<[&'a str; 2], CommandError> {
    match args {
        [category, reference] => Ok([category, reference]),
        _ => Err(CommandError::InvalidArguments(usage.into())),
    }
}
