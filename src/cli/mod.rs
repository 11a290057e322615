use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "websearch")]
#[command(about = "Open web searches on named engines from the terminal")]
#[command(version = "0.1.0")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print the search URL instead of opening a browser
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Text offered as the default answer to search prompts
    #[arg(long, global = true)]
    pub selection: Option<String>,

    /// Enable verbose output
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Search, prompting for anything not given")]
    Search {
        #[arg(long, short, help = "Engine id (e.g. 'google')")]
        engine: Option<String>,
        #[arg(help = "Search text")]
        text: Vec<String>,
    },
    #[command(about = "List registered search engines")]
    Engines {
        #[arg(long, help = "Print as JSON")]
        json: bool,
    },
    #[command(about = "List per-engine search commands")]
    Commands {
        #[arg(help = "Only commands starting with this prefix (e.g. 'wiki' or 'search-wiki')")]
        prefix: Option<String>,
    },
    #[command(about = "Manage websearch configuration")]
    Config {
        #[command(subcommand)]
        config_command: ConfigCommand,
    },
    /// Per-engine commands such as `search-google <text>`
    #[command(external_subcommand)]
    Engine(Vec<String>),
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Initialize configuration with defaults")]
    Init,
    #[command(about = "Display current configuration")]
    Get,
    #[command(about = "Set a configuration value")]
    Set {
        #[arg(help = "Configuration key (e.g., 'preferences.default_engine')")]
        key: String,
        #[arg(help = "Configuration value")]
        value: String,
    },
    #[command(about = "Validate current configuration")]
    Validate,
    #[command(about = "Print the configuration file path")]
    Path,
}

/// Join positional words into one query; `None` when nothing was given
pub fn join_text(words: &[String]) -> Option<String> {
    let text = words.join(" ");
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}
