pub mod registry;

pub use registry::{command_name_for, CommandHandler, CommandInfo, CommandRegistry, CommandResult, COMMAND_PREFIX};
