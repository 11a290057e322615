// Common test utilities and fakes
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::sync::Once;
use websearch_cli::browser::UrlOpener;
use websearch_cli::prompts::Prompter;
use websearch_cli::{Dispatcher, SearchError};

static INIT: Once = Once::new();

/// Initialize test environment
pub fn setup() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// One question put to the scripted prompter
#[derive(Debug, Clone, PartialEq)]
pub struct Asked {
    pub prompt: String,
    pub default: Option<String>,
    pub choices: Vec<String>,
    pub preselect: Option<String>,
}

/// Prompter that replays queued answers and records every question
#[derive(Clone, Default)]
pub struct ScriptedPrompter {
    answers: Rc<RefCell<VecDeque<Result<String, SearchError>>>>,
    asked: Rc<RefCell<Vec<Asked>>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(&self, text: &str) -> &Self {
        self.answers.borrow_mut().push_back(Ok(text.to_string()));
        self
    }

    pub fn abort(&self) -> &Self {
        self.answers.borrow_mut().push_back(Err(SearchError::Aborted));
        self
    }

    pub fn asked(&self) -> Vec<Asked> {
        self.asked.borrow().clone()
    }

    fn next(&self) -> Result<String, SearchError> {
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(SearchError::Prompt("no scripted answer".to_string())))
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt_text(&self, prompt: &str, default: Option<&str>) -> Result<String, SearchError> {
        self.asked.borrow_mut().push(Asked {
            prompt: prompt.to_string(),
            default: default.map(String::from),
            choices: Vec::new(),
            preselect: None,
        });
        self.next()
    }

    fn prompt_choice(
        &self,
        prompt: &str,
        choices: Vec<String>,
        preselect: Option<&str>,
    ) -> Result<String, SearchError> {
        self.asked.borrow_mut().push(Asked {
            prompt: prompt.to_string(),
            default: None,
            choices,
            preselect: preselect.map(String::from),
        });
        self.next()
    }
}

/// Opener that remembers URLs instead of launching a browser
#[derive(Clone, Default)]
pub struct RecordingOpener {
    opened: Rc<RefCell<Vec<String>>>,
    fail: bool,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl UrlOpener for RecordingOpener {
    fn open_url(&self, url: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no browser available"));
        }
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

/// Dispatcher over the default engines wired to the given fakes
pub fn dispatcher(prompter: &ScriptedPrompter, opener: &RecordingOpener) -> Dispatcher {
    setup();
    Dispatcher::with_defaults(Box::new(prompter.clone()), Box::new(opener.clone()))
}

/// Dispatcher with no engines at all
pub fn empty_dispatcher(prompter: &ScriptedPrompter, opener: &RecordingOpener) -> Dispatcher {
    setup();
    Dispatcher::new(Box::new(prompter.clone()), Box::new(opener.clone()))
}
