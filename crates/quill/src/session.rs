//! The state behind one chat: the message log plus the transient display flags.
//!
//! Answers are fetched one at a time. `submit` borrows the session mutably for the
//! whole round trip, so a session never has two requests in flight.
use serde::{Deserialize, Serialize};

use crate::formatter::split_items;
use crate::models::message::Message;
use crate::providers::base::Provider;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Display flags that live only as long as the session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub sidebar_open: bool,
    pub user_menu_open: bool,
}

impl UiState {
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.theme
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_open = !self.sidebar_open;
        self.sidebar_open
    }

    pub fn toggle_user_menu(&mut self) -> bool {
        self.user_menu_open = !self.user_menu_open;
        self.user_menu_open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Blank input, nothing was sent
    Ignored,
    /// The answer was split into this many assistant messages
    Answered { items: usize },
    /// The request failed and was logged; only the question was recorded
    Failed,
}

pub struct ChatSession {
    provider: Box<dyn Provider>,
    messages: Vec<Message>,
    ui: UiState,
}

impl ChatSession {
    pub fn new(provider: Box<dyn Provider>) -> Self {
        Self {
            provider,
            messages: Vec::new(),
            ui: UiState::default(),
        }
    }

    /// Seed the log with an opening assistant message
    pub fn with_greeting<S: Into<String>>(mut self, greeting: S) -> Self {
        let greeting = greeting.into();
        if !greeting.trim().is_empty() {
            self.messages.push(Message::assistant(greeting));
        }
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.ui.theme = theme;
        self
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The user's questions in the order they were asked
    pub fn questions(&self) -> impl Iterator<Item = &str> + '_ {
        self.messages
            .iter()
            .filter(|message| message.is_user())
            .map(|message| message.text.as_str())
    }

    /// The assistant messages appended by the most recent answer
    pub fn last_answers(&self, items: usize) -> &[Message] {
        let start = self.messages.len().saturating_sub(items);
        &self.messages[start..]
    }

    pub fn ui(&self) -> &UiState {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut UiState {
        &mut self.ui
    }

    /// Ask one question.
    ///
    /// Blank text is ignored. Otherwise the question is logged right away and the
    /// provider is called once; on success every answer entry becomes its own
    /// assistant message. Failures never surface as errors: they are logged and
    /// the question is left without an answer.
    pub async fn submit(&mut self, text: &str) -> SubmitOutcome {
        if text.trim().is_empty() {
            tracing::debug!("ignoring blank submission");
            return SubmitOutcome::Ignored;
        }

        self.messages.push(Message::user(text));

        let response = match self.provider.complete(text).await {
            Ok((response, _usage)) => response,
            Err(e) => {
                tracing::error!(error = %e, "Error fetching answer");
                return SubmitOutcome::Failed;
            }
        };

        let before = self.messages.len();
        self.messages
            .extend(split_items(&response).map(Message::assistant));
        let items = self.messages.len() - before;
        tracing::debug!(items, "appended answer entries");

        SubmitOutcome::Answered { items }
    }
}
