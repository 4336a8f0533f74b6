use anyhow::{anyhow, Result};

use crate::prompt::{InputType, Prompt, HELP};
use crate::render::{sidebar_lines, user_menu_lines};
use quill::models::message::Message;
use quill::session::{ChatSession, SubmitOutcome};

pub struct Session<'a> {
    chat: ChatSession,
    prompt: Box<dyn Prompt + 'a>,
}

impl<'a> Session<'a> {
    pub fn new(chat: ChatSession, prompt: Box<impl Prompt + 'a>) -> Self {
        Session { chat, prompt }
    }

    pub async fn start(&mut self) -> Result<()> {
        self.setup_session();

        // Stays filled with the last question until it gets an answer.
        let mut pending = String::new();

        loop {
            let input = self.prompt.get_input(&pending)?;
            match input.input_type {
                InputType::Message => {
                    let content = input.content.unwrap_or_default();
                    pending = match self.ask(&content).await {
                        SubmitOutcome::Failed => content,
                        _ => String::new(),
                    };
                }
                InputType::ToggleTheme => {
                    let theme = self.chat.ui_mut().toggle_theme();
                    self.prompt
                        .notify(&format!("Switching to {} theme", theme.as_str()));
                }
                InputType::ToggleSidebar => {
                    if self.chat.ui_mut().toggle_sidebar() {
                        let lines = sidebar_lines(self.chat.questions());
                        let theme = self.chat.ui().theme;
                        self.prompt.render_panel("Questions", &lines, theme);
                    } else {
                        self.prompt.notify("Sidebar hidden");
                    }
                }
                InputType::ToggleUserMenu => {
                    if self.chat.ui_mut().toggle_user_menu() {
                        let theme = self.chat.ui().theme;
                        self.prompt.render_panel("Account", &user_menu_lines(), theme);
                    } else {
                        self.prompt.notify("User menu hidden");
                    }
                }
                InputType::Help => self.prompt.notify(HELP),
                InputType::AskAgain => pending.clear(),
                InputType::Exit => break,
            }
        }
        self.close_session();
        Ok(())
    }

    /// Answer a single question and stop, for non-interactive use
    pub async fn headless_start(&mut self, question: String) -> Result<()> {
        let theme = self.chat.ui().theme;
        self.prompt.render(&Message::user(question.as_str()), theme);

        match self.ask(&question).await {
            SubmitOutcome::Answered { .. } => Ok(()),
            SubmitOutcome::Failed => Err(anyhow!("No answer received, see the log for details")),
            SubmitOutcome::Ignored => Err(anyhow!("The question is empty")),
        }
    }

    /// Submit one question and render whatever answers came back
    async fn ask(&mut self, content: &str) -> SubmitOutcome {
        // Blank input never reaches the provider, so skip the spinner as well.
        if content.trim().is_empty() {
            return SubmitOutcome::Ignored;
        }

        self.prompt.show_busy();
        let outcome = self.chat.submit(content).await;
        self.prompt.hide_busy();

        if let SubmitOutcome::Answered { items } = outcome {
            let theme = self.chat.ui().theme;
            for message in self.chat.last_answers(items) {
                self.prompt.render(message, theme);
            }
        }
        outcome
    }

    fn setup_session(&mut self) {
        let theme = self.chat.ui().theme;
        for message in self.chat.messages() {
            self.prompt.render(message, theme);
        }
        self.prompt.quill_ready();
    }

    fn close_session(&mut self) {
        let asked = self.chat.questions().count();
        self.prompt
            .notify(&format!("Closing session after {} question(s).", asked));
        self.prompt.close();
    }
}
