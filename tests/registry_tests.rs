mod common;

use common::{dispatcher, empty_dispatcher, RecordingOpener, ScriptedPrompter};
use std::collections::HashSet;
use websearch_cli::commands::command_name_for;

const DEFAULT_IDS: [&str; 11] = [
    "duckduckgo",
    "google",
    "yahoo",
    "github",
    "emacswiki",
    "archwiki",
    "debbugs",
    "wikipedia-en",
    "wiktionary-en",
    "tfd",
    "ip",
];

#[test]
fn test_default_engines_are_registered_with_commands() {
    let dispatcher = dispatcher(&ScriptedPrompter::new(), &RecordingOpener::new());

    assert_eq!(dispatcher.engines().len(), DEFAULT_IDS.len());
    for id in DEFAULT_IDS {
        assert!(dispatcher.engine_by_id(id).is_some(), "missing engine {}", id);
        assert!(
            dispatcher.commands().has_command(&command_name_for(id)),
            "missing command for {}",
            id
        );
    }
    assert!(dispatcher.commands().has_command("search-duckduckgo"));
}

#[test]
fn test_ids_stay_unique_across_adds() {
    let mut dispatcher = empty_dispatcher(&ScriptedPrompter::new(), &RecordingOpener::new());
    let ids = ["a", "b", "a", "c", "b", "b", "a", "d", "c"];

    for (step, id) in ids.iter().enumerate() {
        let title = format!("{} #{}", id, step);
        dispatcher.add_engine(id, &title, "https://example.com/?q=%s", None);

        let mut seen = HashSet::new();
        for engine in dispatcher.engines().iter() {
            assert!(seen.insert(engine.id.clone()), "duplicate id {} after step {}", engine.id, step);
        }
        assert_eq!(dispatcher.commands().len(), seen.len());
    }
    assert_eq!(dispatcher.engines().len(), 4);
}

#[test]
fn test_readd_replaces_title_and_template() {
    let mut dispatcher = empty_dispatcher(&ScriptedPrompter::new(), &RecordingOpener::new());
    dispatcher.add_engine("docs", "Docs", "https://docs.rs/%s", None);
    dispatcher.add_engine("docs", "Docs (search)", "https://docs.rs/releases/search?query=%s", None);

    let matching: Vec<_> = dispatcher.engines().iter().filter(|e| e.id == "docs").collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].title, "Docs (search)");
    assert_eq!(matching[0].url_template, "https://docs.rs/releases/search?query=%s");
}

#[test]
fn test_delete_missing_engine_is_noop() {
    let mut dispatcher = empty_dispatcher(&ScriptedPrompter::new(), &RecordingOpener::new());
    dispatcher.delete_engine("google");
    assert!(dispatcher.engines().is_empty());

    let mut dispatcher = dispatcher_with_defaults();
    dispatcher.delete_engine("altavista");
    assert_eq!(dispatcher.engines().len(), DEFAULT_IDS.len());
}

#[test]
fn test_delete_removes_engine_and_command() {
    let mut dispatcher = dispatcher_with_defaults();
    dispatcher.delete_engine("yahoo");

    assert!(dispatcher.engine_by_id("yahoo").is_none());
    assert!(dispatcher.engine_by_title("Yahoo!").is_none());
    assert!(!dispatcher.commands().has_command("search-yahoo"));
}

#[test]
fn test_missing_lookups_are_absent() {
    let dispatcher = dispatcher_with_defaults();
    assert!(dispatcher.engine_by_id("nope").is_none());
    assert!(dispatcher.engine_by_title("Nope").is_none());
}

#[test]
fn test_title_lookup_resolves_id() {
    let dispatcher = dispatcher_with_defaults();
    assert_eq!(dispatcher.engine_by_title("Wikipedia (en)").unwrap().id, "wikipedia-en");
}

#[test]
fn test_sorted_titles_for_selection() {
    let dispatcher = dispatcher_with_defaults();
    let titles = dispatcher.engines().sorted_titles();

    let mut expected = titles.clone();
    expected.sort();
    assert_eq!(titles, expected);
    assert_eq!(titles.first().map(String::as_str), Some("ArchWiki"));
}

fn dispatcher_with_defaults() -> websearch_cli::Dispatcher {
    dispatcher(&ScriptedPrompter::new(), &RecordingOpener::new())
}

#[test]
fn test_matching_commands_by_engine_prefix() {
    let dispatcher = dispatcher_with_defaults();

    let names: Vec<&str> = dispatcher
        .matching_commands("wik")
        .into_iter()
        .map(|cmd| cmd.name.as_str())
        .collect();
    assert_eq!(names, vec!["search-wikipedia-en", "search-wiktionary-en"]);

    let names: Vec<&str> = dispatcher
        .matching_commands("search-wikip")
        .into_iter()
        .map(|cmd| cmd.name.as_str())
        .collect();
    assert_eq!(names, vec!["search-wikipedia-en"]);

    assert_eq!(dispatcher.matching_commands("").len(), DEFAULT_IDS.len());
    assert!(dispatcher.matching_commands("altavista").is_empty());
}
