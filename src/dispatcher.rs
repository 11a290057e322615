use crate::browser::UrlOpener;
use crate::commands::{command_name_for, CommandHandler, CommandInfo, CommandRegistry, CommandResult, COMMAND_PREFIX};
use crate::engine::{default_engines, EngineDefinition, EngineRegistry, TextFilter};
use crate::error::SearchError;
use crate::prompts::{engine_prompt, Prompter, ENGINE_CHOICE_PROMPT, SEARCH_TEXT_PROMPT};

/// Engine registry plus everything needed to turn a query into an opened URL.
///
/// Every registered engine also owns a generated `search-<id>` command in the
/// command table. Adding an engine (re)generates its command; deleting it
/// removes the command.
pub struct Dispatcher {
    engines: EngineRegistry,
    commands: CommandRegistry,
    prompter: Box<dyn Prompter>,
    opener: Box<dyn UrlOpener>,
    selection: Option<String>,
    default_engine: Option<String>,
}

impl Dispatcher {
    /// Dispatcher with an empty registry
    pub fn new(prompter: Box<dyn Prompter>, opener: Box<dyn UrlOpener>) -> Self {
        Self {
            engines: EngineRegistry::new(),
            commands: CommandRegistry::new(),
            prompter,
            opener,
            selection: None,
            default_engine: None,
        }
    }

    /// Dispatcher seeded with the built-in engines
    pub fn with_defaults(prompter: Box<dyn Prompter>, opener: Box<dyn UrlOpener>) -> Self {
        let mut dispatcher = Self::new(prompter, opener);
        for engine in default_engines() {
            dispatcher.add_definition(engine);
        }
        dispatcher
    }

    pub fn add_engine(&mut self, id: &str, title: &str, url_template: &str, filter: Option<TextFilter>) {
        let mut engine = EngineDefinition::new(id, title, url_template);
        engine.filter = filter;
        self.add_definition(engine);
    }

    /// Register an engine and its dedicated command, replacing any engine with the same id
    pub fn add_definition(&mut self, engine: EngineDefinition) {
        if self.engines.contains(&engine.id) {
            log::debug!("replacing engine '{}' ({})", engine.id, engine.title);
        } else {
            log::debug!("adding engine '{}' ({})", engine.id, engine.title);
        }

        let name = command_name_for(&engine.id);
        let handler = Self::generate_dispatch_operation(&engine.id);
        self.commands.register(&name, &engine.id, handler);
        self.engines.add(engine);
    }

    /// Remove an engine and its command. Missing ids are ignored.
    pub fn delete_engine(&mut self, id: &str) {
        let removed = self.engines.delete(id);
        self.commands.unregister(&command_name_for(id));
        if removed > 0 {
            log::debug!("deleted engine '{}'", id);
        }
    }

    pub fn engine_by_id(&self, id: &str) -> Option<&EngineDefinition> {
        self.engines.get_by_id(id)
    }

    pub fn engine_by_title(&self, title: &str) -> Option<&EngineDefinition> {
        self.engines.get_by_title(title)
    }

    pub fn engines(&self) -> &EngineRegistry {
        &self.engines
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Text offered as the default answer to text prompts
    pub fn set_selection(&mut self, selection: Option<String>) {
        self.selection = selection.filter(|s| !s.is_empty());
    }

    pub fn selection(&self) -> Option<&str> {
        self.selection.as_deref()
    }

    /// Engine pre-selected in the interactive list and used when none is given
    pub fn set_default_engine(&mut self, id: Option<String>) {
        self.default_engine = id;
    }

    pub fn default_engine(&self) -> Option<&str> {
        self.default_engine.as_deref()
    }

    /// Final URL for `text` on `engine_id`: filter, percent-encode, substitute
    pub fn build_url(&self, text: &str, engine_id: &str) -> Result<String, SearchError> {
        let engine = self.engine_by_id(engine_id).ok_or_else(|| {
            log::warn!("no engine registered as '{}'", engine_id);
            SearchError::UnknownEngine(engine_id.to_string())
        })?;

        let effective_text = engine.effective_text(text);
        let encoded_text = urlencoding::encode(&effective_text);
        Ok(engine.expand(&encoded_text))
    }

    /// Open the search results for `text` on `engine_id`
    pub fn search(&self, text: &str, engine_id: &str) -> Result<(), SearchError> {
        let url = self.build_url(text, engine_id)?;
        log::info!("searching {} -> {}", engine_id, url);
        self.opener.open_url(&url)?;
        Ok(())
    }

    /// Prompt for the text, then for the engine by title, then search
    pub fn interactive_search(&self) -> Result<(), SearchError> {
        let text = self
            .prompter
            .prompt_text(SEARCH_TEXT_PROMPT, self.selection())?;
        let engine_id = self.choose_engine()?;
        self.search(&text, &engine_id)
    }

    /// Ask for an engine from the sorted title list and resolve it back to an id
    pub fn choose_engine(&self) -> Result<String, SearchError> {
        let preselect = self
            .default_engine()
            .and_then(|id| self.engine_by_id(id))
            .map(|engine| engine.title.clone());

        let title = self.prompter.prompt_choice(
            ENGINE_CHOICE_PROMPT,
            self.engines.sorted_titles(),
            preselect.as_deref(),
        )?;

        self.engine_by_title(&title)
            .map(|engine| engine.id.clone())
            .ok_or(SearchError::UnknownEngine(title))
    }

    /// Build the dedicated command for one engine.
    ///
    /// The engine's title is looked up when the command runs, so a re-added
    /// engine prompts with its new title.
    pub fn generate_dispatch_operation(id: &str) -> CommandHandler {
        let engine_id = id.to_string();
        Box::new(move |dispatcher: &Dispatcher, text: Option<&str>| {
            let text = match text {
                Some(text) => text.to_string(),
                None => dispatcher.prompt_for_engine(&engine_id)?,
            };
            dispatcher.search(&text, &engine_id)
        })
    }

    fn prompt_for_engine(&self, engine_id: &str) -> Result<String, SearchError> {
        let title = self
            .engine_by_id(engine_id)
            .map(|engine| engine.title.clone())
            .ok_or_else(|| SearchError::UnknownEngine(engine_id.to_string()))?;
        self.prompter.prompt_text(&engine_prompt(&title), self.selection())
    }

    /// Commands whose name starts with `prefix`, sorted by name.
    ///
    /// A bare engine prefix such as `wiki` is read as `search-wiki`; an empty
    /// prefix lists every command.
    pub fn matching_commands(&self, prefix: &str) -> Vec<&CommandInfo> {
        let prefix = if prefix.starts_with(COMMAND_PREFIX) {
            prefix.to_string()
        } else {
            command_name_for(prefix)
        };
        self.commands.get_matching_commands(&prefix)
    }

    /// Run a command from the command table, e.g. `search-google`
    pub fn run_command(&self, command_name: &str, text: Option<&str>) -> CommandResult {
        self.commands
            .execute_command(command_name, self, text)
            .unwrap_or_else(|| Err(SearchError::UnknownCommand(command_name.to_string())))
    }

    /// Search with whatever the caller already knows, prompting for the rest.
    ///
    /// Without an engine the default engine is used, falling back to the
    /// interactive choice.
    pub fn dispatch(&self, engine_id: Option<&str>, text: Option<&str>) -> Result<(), SearchError> {
        let engine_id = engine_id.or(self.default_engine());
        match (engine_id, text) {
            (Some(id), Some(text)) => self.search(text, id),
            (Some(id), None) => {
                if !self.engines.contains(id) {
                    return Err(SearchError::UnknownEngine(id.to_string()));
                }
                self.run_command(&command_name_for(id), None)
            }
            (None, Some(text)) => {
                let id = self.choose_engine()?;
                self.search(text, &id)
            }
            (None, None) => self.interactive_search(),
        }
    }
}
