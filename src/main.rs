use clap::Parser;
use is_terminal::IsTerminal;
use serde_json::json;
use std::io::Read;
use std::process;
use websearch_cli::browser::opener_for;
use websearch_cli::cli::{join_text, Cli, Commands, ConfigCommand};
use websearch_cli::config::{Config, ConfigManager};
use websearch_cli::prompts::InquirePrompter;
use websearch_cli::{Dispatcher, SearchError};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if let Some(search_error) = e.downcast_ref::<SearchError>() {
            if search_error.is_aborted() {
                process::exit(130);
            }
        }
        eprintln!("❌ {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = ConfigManager::load_config()?;
    init_logging(cli.verbose || config.preferences.verbose);
    log::debug!(
        "loaded config: {} extra engine(s), {} removed, default engine {:?}",
        config.engines.len(),
        config.preferences.removed_engines.len(),
        config.preferences.default_engine
    );

    match cli.command {
        Some(Commands::Config { config_command }) => run_config_command(config_command, &config),
        Some(Commands::Engines { json }) => {
            let dispatcher = build_dispatcher(cli.dry_run, None, &config);
            list_engines(&dispatcher, json)
        }
        Some(Commands::Commands { prefix }) => {
            let dispatcher = build_dispatcher(cli.dry_run, None, &config);
            for command in dispatcher.matching_commands(prefix.as_deref().unwrap_or("")) {
                let title = dispatcher
                    .engine_by_id(&command.engine_id)
                    .map(|engine| engine.title.as_str())
                    .unwrap_or("?");
                println!("{:<28} Search {}", command.name, title);
            }
            Ok(())
        }
        Some(Commands::Search { engine, text }) => {
            let text = join_text(&text);
            let selection = read_selection(cli.selection, text.is_none());
            let dispatcher = build_dispatcher(cli.dry_run, selection, &config);
            dispatcher.dispatch(engine.as_deref(), text.as_deref())?;
            Ok(())
        }
        Some(Commands::Engine(args)) => {
            let (name, words) = args
                .split_first()
                .ok_or("missing engine command")?;
            let text = join_text(words);
            let selection = read_selection(cli.selection, text.is_none());
            let dispatcher = build_dispatcher(cli.dry_run, selection, &config);
            dispatcher.run_command(name, text.as_deref())?;
            Ok(())
        }
        None => {
            let selection = read_selection(cli.selection, true);
            let dispatcher = build_dispatcher(cli.dry_run, selection, &config);
            dispatcher.interactive_search()?;
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(level);
    let _ = env_logger::Builder::from_env(env).try_init();
}

fn build_dispatcher(dry_run: bool, selection: Option<String>, config: &Config) -> Dispatcher {
    let opener = opener_for(dry_run || config.preferences.dry_run);
    let mut dispatcher = Dispatcher::with_defaults(Box::new(InquirePrompter::new()), opener);
    config.apply(&mut dispatcher);
    dispatcher.set_selection(selection);
    dispatcher
}

/// Explicit `--selection`, else piped stdin when the text will be prompted for
fn read_selection(explicit: Option<String>, will_prompt: bool) -> Option<String> {
    if explicit.is_some() || !will_prompt {
        return explicit;
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        return None;
    }

    let mut piped = String::new();
    match stdin.read_to_string(&mut piped) {
        Ok(_) => Some(piped.trim().to_string()).filter(|s| !s.is_empty()),
        Err(e) => {
            log::warn!("could not read selection from stdin: {}", e);
            None
        }
    }
}

fn list_engines(dispatcher: &Dispatcher, as_json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut engines: Vec<_> = dispatcher.engines().iter().collect();
    engines.sort_by(|a, b| a.title.cmp(&b.title));

    if as_json {
        let listing: Vec<_> = engines
            .iter()
            .map(|engine| {
                json!({
                    "id": engine.id,
                    "title": engine.title,
                    "url": engine.url_template,
                    "filter": engine.filter.is_some(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("📋 Search engines ({}):", engines.len());
    for engine in engines {
        let marker = if dispatcher.default_engine() == Some(engine.id.as_str()) { "*" } else { " " };
        println!("{} {:<16} {:<22} {}", marker, engine.id, engine.title, engine.url_template);
    }
    Ok(())
}

fn run_config_command(command: ConfigCommand, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ConfigCommand::Init => ConfigManager::init_config(),
        ConfigCommand::Get => {
            let toml_string = toml::to_string_pretty(config)?;
            println!("Current configuration:\n{}", toml_string);
            Ok(())
        }
        ConfigCommand::Set { key, value } => ConfigManager::set_config_value(&key, &value),
        ConfigCommand::Validate => ConfigManager::validate_config(),
        ConfigCommand::Path => {
            println!("{}", ConfigManager::config_path()?.display());
            Ok(())
        }
    }
}
