use crate::dispatcher::Dispatcher;
use crate::error::SearchError;
use std::collections::HashMap;
use std::fmt;

/// Result type for command execution
pub type CommandResult = Result<(), SearchError>;

/// Handler bound to one engine; receives the optional search text
pub type CommandHandler = Box<dyn Fn(&Dispatcher, Option<&str>) -> CommandResult>;

/// Prefix shared by every generated engine command
pub const COMMAND_PREFIX: &str = "search-";

/// Deterministic command name for an engine id
pub fn command_name_for(engine_id: &str) -> String {
    format!("{}{}", COMMAND_PREFIX, engine_id)
}

/// Command metadata
pub struct CommandInfo {
    pub name: String,
    pub engine_id: String,
    pub handler: CommandHandler,
}

impl fmt::Debug for CommandInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandInfo")
            .field("name", &self.name)
            .field("engine_id", &self.engine_id)
            .finish_non_exhaustive()
    }
}

/// Command table keyed by command name
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, CommandInfo>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command, replacing any previous one with the same name
    pub fn register(&mut self, name: &str, engine_id: &str, handler: CommandHandler) {
        let command_info = CommandInfo {
            name: name.to_string(),
            engine_id: engine_id.to_string(),
            handler,
        };
        self.commands.insert(name.to_string(), command_info);
    }

    pub fn unregister(&mut self, name: &str) -> bool {
        self.commands.remove(name).is_some()
    }

    /// Get commands that match a prefix
    pub fn get_matching_commands(&self, prefix: &str) -> Vec<&CommandInfo> {
        let mut matching: Vec<&CommandInfo> = self
            .commands
            .values()
            .filter(|cmd| cmd.name.starts_with(prefix))
            .collect();
        matching.sort_by(|a, b| a.name.cmp(&b.name));
        matching
    }

    /// Execute a command by name; `None` when no such command exists
    pub fn execute_command(
        &self,
        command_name: &str,
        context: &Dispatcher,
        text: Option<&str>,
    ) -> Option<CommandResult> {
        self.commands
            .get(command_name)
            .map(|cmd_info| (cmd_info.handler)(context, text))
    }

    /// Check if a command exists
    pub fn has_command(&self, command_name: &str) -> bool {
        self.commands.contains_key(command_name)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
