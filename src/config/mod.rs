use crate::dispatcher::Dispatcher;
use crate::engine::{EngineDefinition, EngineRegistry, FilterKind, PLACEHOLDER};
use dirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub preferences: PreferencesConfig,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub engines: Vec<EngineConfig>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
pub struct PreferencesConfig {
    pub default_engine: Option<String>,
    #[serde(default)]
    pub verbose: bool,
    #[serde(default)]
    pub dry_run: bool,
    #[serde(default)]
    pub removed_engines: Vec<String>,
}

/// An engine defined in the config file
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct EngineConfig {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<FilterKind>,
}

impl EngineConfig {
    pub fn to_definition(&self) -> EngineDefinition {
        let engine = EngineDefinition::new(&self.id, &self.title, &self.url);
        match self.filter {
            Some(kind) => engine.with_filter(kind.to_filter()),
            None => engine,
        }
    }
}

/// One registry change requested by the config file
enum EngineEdit<'a> {
    Remove(&'a str),
    Add(EngineDefinition),
}

impl Config {
    /// Removals first, then additions, each in file order
    fn engine_edits(&self) -> impl Iterator<Item = EngineEdit<'_>> {
        let removals = self
            .preferences
            .removed_engines
            .iter()
            .map(|id| EngineEdit::Remove(id.as_str()));
        let additions = self
            .engines
            .iter()
            .map(|engine| EngineEdit::Add(engine.to_definition()));
        removals.chain(additions)
    }

    /// Apply the config's engine edits and default engine to a dispatcher
    pub fn apply(&self, dispatcher: &mut Dispatcher) {
        for edit in self.engine_edits() {
            match edit {
                EngineEdit::Remove(id) => dispatcher.delete_engine(id),
                EngineEdit::Add(engine) => dispatcher.add_definition(engine),
            }
        }
        if self.preferences.default_engine.is_some() {
            dispatcher.set_default_engine(self.preferences.default_engine.clone());
        }
    }

    /// The registry this config produces on top of the defaults
    pub fn effective_registry(&self) -> EngineRegistry {
        let mut registry = EngineRegistry::with_defaults();
        for edit in self.engine_edits() {
            match edit {
                EngineEdit::Remove(id) => {
                    registry.delete(id);
                }
                EngineEdit::Add(engine) => registry.add(engine),
            }
        }
        registry
    }

    /// Human-readable problems; empty when the config is usable
    pub fn problems(&self) -> Vec<String> {
        let mut problems = Vec::new();

        for engine in &self.engines {
            if engine.id.trim().is_empty() {
                problems.push(format!("engine '{}' has an empty id", engine.title));
            }
            let placeholders = engine.url.matches(PLACEHOLDER).count();
            if placeholders != 1 {
                problems.push(format!(
                    "engine '{}' url must contain exactly one {} (found {})",
                    engine.id, PLACEHOLDER, placeholders
                ));
            }
        }

        if let Some(default_engine) = &self.preferences.default_engine {
            if !self.effective_registry().contains(default_engine) {
                problems.push(format!("default engine '{}' is not registered", default_engine));
            }
        }

        problems
    }

    pub fn apply_env_overrides(&mut self) {
        if let Ok(engine) = env::var("WEBSEARCH_DEFAULT_ENGINE") {
            if !engine.is_empty() {
                self.preferences.default_engine = Some(engine);
            }
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        match key {
            "preferences.default_engine" => {
                self.preferences.default_engine = if value.is_empty() {
                    None
                } else {
                    Some(value.to_string())
                }
            }
            "preferences.verbose" => self.preferences.verbose = value.parse()?,
            "preferences.dry_run" => self.preferences.dry_run = value.parse()?,
            "preferences.removed_engines" => {
                self.preferences.removed_engines = value
                    .split(',')
                    .map(str::trim)
                    .filter(|id| !id.is_empty())
                    .map(String::from)
                    .collect()
            }
            _ => return Err(format!("Unknown config key: {}", key).into()),
        }
        Ok(())
    }
}

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_dir = dirs::config_dir()
            .ok_or("Could not find config directory")?
            .join("websearch");

        fs::create_dir_all(&config_dir)?;
        Ok(config_dir.join("config.toml"))
    }

    pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = Self::load_from(&Self::config_path()?)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Read a config file; a missing file gives the defaults
    pub fn load_from(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&config_content)
            .map_err(|e| format!("Invalid config {}: {}", path.display(), e))?;
        Ok(config)
    }

    pub fn save_to(config: &Config, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let toml_string = toml::to_string_pretty(config)?;
        fs::write(path, toml_string)?;
        Ok(())
    }

    pub fn init_config() -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            println!("Configuration file already exists at: {}", config_path.display());
            return Ok(());
        }

        let default_config = Config {
            preferences: PreferencesConfig {
                default_engine: Some("duckduckgo".to_string()),
                ..PreferencesConfig::default()
            },
            engines: Vec::new(),
        };
        Self::save_to(&default_config, &config_path)?;

        println!("✅ Configuration initialized at: {}", config_path.display());
        println!("📝 Add your own engines with [[engines]] tables:");
        println!("   id = \"crates\"  title = \"crates.io\"  url = \"https://crates.io/search?q=%s\"");

        Ok(())
    }

    pub fn set_config_value(key: &str, value: &str) -> Result<(), Box<dyn std::error::Error>> {
        let config_path = Self::config_path()?;
        let mut config = Self::load_from(&config_path)?;
        config.set(key, value)?;
        Self::save_to(&config, &config_path)?;
        println!("✅ Updated {}: {}", key, value);
        Ok(())
    }

    pub fn validate_config() -> Result<(), Box<dyn std::error::Error>> {
        let config = Self::load_config()?;
        let problems = config.problems();

        if problems.is_empty() {
            println!("✅ Configuration is valid");
            println!("🔧 Engines: {}", config.effective_registry().len());
            if let Some(engine) = &config.preferences.default_engine {
                println!("🔧 Default engine: {}", engine);
            }
            Ok(())
        } else {
            for problem in &problems {
                println!("❌ {}", problem);
            }
            Err(format!("{} configuration problem(s)", problems.len()).into())
        }
    }
}
