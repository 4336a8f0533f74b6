use anyhow::Result;

use super::session::build_chat;
use crate::configuration::Settings;
use crate::prompt::rustyline::RustylinePrompt;
use crate::session::Session;

pub async fn execute(mut settings: Settings, question: String) -> Result<()> {
    // No greeting in one-shot mode.
    settings.ui.greeting.clear();

    let chat = build_chat(settings)?;
    let prompt = RustylinePrompt::new()?;
    let mut session = Session::new(chat, Box::new(prompt));
    session.headless_start(question).await
}
