use thiserror::Error;

/// Errors surfaced while dispatching a search
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown search engine: {0}")]
    UnknownEngine(String),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The user cancelled a prompt; nothing was searched
    #[error("prompt aborted")]
    Aborted,

    #[error("prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Browser(#[from] std::io::Error),
}

impl SearchError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, SearchError::Aborted)
    }
}
