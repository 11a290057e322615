pub mod browser;
pub mod cli;
pub mod commands;
pub mod config;
pub mod dispatcher;
pub mod engine;
pub mod error;
pub mod prompts;

// Re-export commonly used items
pub use dispatcher::Dispatcher;
pub use engine::{EngineDefinition, EngineRegistry, TextFilter};
pub use error::SearchError;
