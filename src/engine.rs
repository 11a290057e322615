pub mod defaults;

use std::fmt;
use std::sync::Arc;

pub use defaults::{default_engines, FilterKind};

/// Marker in a URL template replaced by the encoded search text
pub const PLACEHOLDER: &str = "%s";

/// Pre-processing applied to the raw search text before encoding
pub type TextFilter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A named web-search target
#[derive(Clone)]
pub struct EngineDefinition {
    pub id: String,
    pub title: String,
    pub url_template: String,
    pub filter: Option<TextFilter>,
}

impl EngineDefinition {
    pub fn new(id: &str, title: &str, url_template: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            url_template: url_template.to_string(),
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: TextFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Apply the engine's filter, if any, to the raw search text
    pub fn effective_text(&self, text: &str) -> String {
        match &self.filter {
            Some(filter) => filter(text),
            None => text.to_string(),
        }
    }

    /// Substitute already-encoded text into the template's placeholder
    pub fn expand(&self, encoded_text: &str) -> String {
        self.url_template.replacen(PLACEHOLDER, encoded_text, 1)
    }
}

impl fmt::Debug for EngineDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EngineDefinition")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("url_template", &self.url_template)
            .field("filter", &self.filter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Ordered collection of engines, unique by id.
///
/// New entries go to the front, so the most recently added engine is the
/// first one seen by lookups and listings.
#[derive(Debug, Default, Clone)]
pub struct EngineRegistry {
    engines: Vec<EngineDefinition>,
}

impl EngineRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in engine list
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for engine in default_engines() {
            registry.add(engine);
        }
        registry
    }

    /// Insert an engine, replacing any existing entry with the same id
    pub fn add(&mut self, engine: EngineDefinition) {
        self.delete(&engine.id);
        self.engines.insert(0, engine);
    }

    /// Remove every entry with the given id. Returns how many were removed.
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.engines.len();
        self.engines.retain(|engine| engine.id != id);
        before - self.engines.len()
    }

    pub fn get_by_id(&self, id: &str) -> Option<&EngineDefinition> {
        self.engines.iter().find(|engine| engine.id == id)
    }

    pub fn get_by_title(&self, title: &str) -> Option<&EngineDefinition> {
        self.engines.iter().find(|engine| engine.title == title)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get_by_id(id).is_some()
    }

    /// Engines in registry order
    pub fn iter(&self) -> impl Iterator<Item = &EngineDefinition> {
        self.engines.iter()
    }

    /// All titles, sorted ascending
    pub fn sorted_titles(&self) -> Vec<String> {
        let mut titles: Vec<String> = self.engines.iter().map(|e| e.title.clone()).collect();
        titles.sort();
        titles
    }

    pub fn len(&self) -> usize {
        self.engines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
