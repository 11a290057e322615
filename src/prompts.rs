use crate::error::SearchError;
use inquire::{InquireError, Select, Text};

/// Interactive input used by the dispatcher
pub trait Prompter {
    /// Ask for a single line of text, offering `default` when present
    fn prompt_text(&self, prompt: &str, default: Option<&str>) -> Result<String, SearchError>;

    /// Ask the user to pick exactly one of `choices`
    fn prompt_choice(
        &self,
        prompt: &str,
        choices: Vec<String>,
        preselect: Option<&str>,
    ) -> Result<String, SearchError>;
}

/// Terminal prompts backed by inquire
#[derive(Debug, Default)]
pub struct InquirePrompter;

impl InquirePrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for InquirePrompter {
    fn prompt_text(&self, prompt: &str, default: Option<&str>) -> Result<String, SearchError> {
        let mut text = Text::new(prompt);
        if let Some(default) = default {
            text = text.with_default(default);
        }
        text.prompt().map_err(from_inquire)
    }

    fn prompt_choice(
        &self,
        prompt: &str,
        choices: Vec<String>,
        preselect: Option<&str>,
    ) -> Result<String, SearchError> {
        let cursor = preselect
            .and_then(|wanted| choices.iter().position(|c| c == wanted))
            .unwrap_or(0);

        Select::new(prompt, choices)
            .with_starting_cursor(cursor)
            .with_help_message("↑↓ to move, type to filter, enter to search")
            .prompt()
            .map_err(from_inquire)
    }
}

fn from_inquire(err: InquireError) -> SearchError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => SearchError::Aborted,
        other => SearchError::Prompt(other.to_string()),
    }
}

/// Prompt shown by an engine's dedicated search command
pub fn engine_prompt(title: &str) -> String {
    format!("Search {}:", title)
}

pub const SEARCH_TEXT_PROMPT: &str = "Search for:";
pub const ENGINE_CHOICE_PROMPT: &str = "Search engine:";
