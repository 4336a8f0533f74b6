use anyhow::Result;

use crate::configuration::Settings;
use crate::prompt::rustyline::RustylinePrompt;
use crate::session::Session;
use quill::providers::gemini::GeminiProvider;
use quill::session::ChatSession;

/// Wire the configured provider into a fresh chat
pub fn build_chat(settings: Settings) -> Result<ChatSession> {
    let provider = GeminiProvider::new(settings.provider.into_config())?;
    Ok(ChatSession::new(Box::new(provider))
        .with_theme(settings.ui.theme)
        .with_greeting(settings.ui.greeting))
}

pub async fn execute(settings: Settings) -> Result<()> {
    let chat = build_chat(settings)?;
    let prompt = RustylinePrompt::new()?;
    let mut session = Session::new(chat, Box::new(prompt));
    session.start().await
}
