//! Shell context, dispatch, and CLI error types.

use std::io;
use std::path::PathBuf;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    config::{Config, ConfigManager},
    errors::GroceryError,
    list::GroceryList,
    share,
    storage::{JsonStorage, StorageBackend},
};

use super::commands;
use super::output;
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Core(#[from] GroceryError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] GroceryError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Owns the mutable list state and every collaborator the command handlers
/// touch. All mutations happen synchronously through `dispatch`, and each
/// successful mutation persists before the next prompt.
pub struct ShellContext {
    mode: CliMode,
    pub(crate) registry: CommandRegistry,
    pub(crate) theme: ColorfulTheme,
    storage: JsonStorage,
    config_manager: ConfigManager,
    pub(crate) config: Config,
    pub(crate) list: GroceryList,
    pub(crate) running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode, share_arg: Option<&str>) -> Result<Self, CliError> {
        Self::with_root(mode, share_arg, None)
    }

    fn with_root(
        mode: CliMode,
        share_arg: Option<&str>,
        root: Option<PathBuf>,
    ) -> Result<Self, CliError> {
        let registry = CommandRegistry::new(commands::all_definitions());
        let storage = JsonStorage::new(root.clone())?;
        let config_manager = ConfigManager::new(root)?;
        let config = config_manager.load();

        // A share link wins over saved state; a bad link never clobbers it.
        let list = match share_arg {
            Some(raw) => {
                let encoded = share::extract_param(raw).unwrap_or(raw);
                match share::decode(encoded) {
                    Ok(list) => {
                        output::success(format!(
                            "Imported {} item(s) from share link.",
                            list.item_count()
                        ));
                        list
                    }
                    Err(err) => {
                        output::warning(format!("{err}; loading the saved list instead."));
                        storage.load()
                    }
                }
            }
            None => storage.load(),
        };

        Ok(ShellContext {
            mode,
            registry,
            theme: ColorfulTheme::default(),
            storage,
            config_manager,
            config,
            list,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub(crate) fn prompt(&self) -> String {
        "grocery> ".to_string()
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    /// Writes the current list through the storage backend.
    pub(crate) fn persist(&self) -> CommandResult {
        self.storage.save(&self.list).map_err(CommandError::from)
    }

    pub(crate) fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }

    /// Resolves a `<category> <item>` argument pair to concrete state keys.
    /// The item reference may be an id or a case-insensitive display name.
    pub(crate) fn resolve_target(
        &self,
        category_arg: &str,
        reference: &str,
    ) -> Result<(String, String), CommandError> {
        let category = self
            .list
            .ordered_categories()
            .into_iter()
            .find(|candidate| candidate.eq_ignore_ascii_case(category_arg))
            .map(str::to_string)
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "no items under category `{}`",
                    category_arg
                ))
            })?;
        let items = self.list.items_in(&category).ok_or_else(|| {
            CommandError::InvalidArguments(format!("no items under category `{}`", category_arg))
        })?;
        let folded = reference.to_lowercase();
        let item = items
            .iter()
            .find(|item| item.id == reference)
            .or_else(|| {
                items
                    .iter()
                    .find(|item| item.name.to_lowercase() == folded)
            })
            .ok_or_else(|| {
                CommandError::InvalidArguments(format!(
                    "no item `{}` under {}",
                    reference, category
                ))
            })?;
        Ok((category, item.id.clone()))
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                output::info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        output::confirm(&self.theme, "Exit shell?", true).map_err(|err| match err {
            CommandError::Io(io_err) => CliError::Io(io_err),
            other => CliError::Io(io::Error::other(other.to_string())),
        })
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    pub(crate) fn print_error(&self, message: &str) {
        output::error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        output::warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        output::hint(message);
    }
}
