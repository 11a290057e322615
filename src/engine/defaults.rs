use super::{EngineDefinition, TextFilter};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, OnceLock};

/// Built-in text filters that can be named from the config file
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum FilterKind {
    /// Each run of `-` becomes a single `.` (addresses typed without dots)
    DashesToDots,
    Trim,
}

impl FilterKind {
    pub fn to_filter(self) -> TextFilter {
        match self {
            FilterKind::DashesToDots => Arc::new(dashes_to_dots),
            FilterKind::Trim => Arc::new(|text: &str| text.trim().to_string()),
        }
    }
}

static DASH_RUN: OnceLock<Regex> = OnceLock::new();

pub fn dashes_to_dots(text: &str) -> String {
    let re = DASH_RUN.get_or_init(|| Regex::new("-+").expect("static pattern"));
    re.replace_all(text, ".").into_owned()
}

/// The engines every registry starts with
pub fn default_engines() -> Vec<EngineDefinition> {
    vec![
        EngineDefinition::new("duckduckgo", "DuckDuckGo", "https://duckduckgo.com/?q=%s"),
        EngineDefinition::new("google", "Google", "http://www.google.com/search?q=%s"),
        EngineDefinition::new("yahoo", "Yahoo!", "http://search.yahoo.com/search?p=%s"),
        EngineDefinition::new("github", "GitHub", "https://github.com/search?q=%s"),
        EngineDefinition::new("emacswiki", "EmacsWiki", "https://www.emacswiki.org/emacs?search=%s"),
        EngineDefinition::new("archwiki", "ArchWiki", "https://wiki.archlinux.org/index.php?search=%s"),
        EngineDefinition::new("debbugs", "GNU Bug Tracker", "https://debbugs.gnu.org/cgi/bugreport.cgi?bug=%s"),
        EngineDefinition::new("wikipedia-en", "Wikipedia (en)", "https://en.wikipedia.org/wiki/Special:Search?search=%s"),
        EngineDefinition::new("wiktionary-en", "Wiktionary (en)", "https://en.wiktionary.org/wiki/Special:Search?search=%s"),
        EngineDefinition::new("tfd", "The Free Dictionary", "https://www.thefreedictionary.com/%s"),
        EngineDefinition::new("ip", "IP Address Lookup", "https://whois.domaintools.com/%s")
            .with_filter(FilterKind::DashesToDots.to_filter()),
    ]
}
