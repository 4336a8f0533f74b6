use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod commands;
mod configuration;
mod error;
mod logging;
mod prompt;
mod render;
mod session;

use configuration::{default_config_file, Overrides, Settings};
use quill::session::Theme;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Gemini API key (can also be set via QUILL_PROVIDER__API_KEY)
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Model to use (can also be set via QUILL_PROVIDER__MODEL)
    #[arg(short, long, global = true)]
    model: Option<String>,

    /// API host (can also be set via QUILL_PROVIDER__HOST)
    #[arg(long, global = true)]
    host: Option<String>,

    /// Full generate endpoint URL, replacing host and model
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Colour theme
    #[arg(long, value_enum, global = true)]
    theme: Option<CliTheme>,

    /// Configuration file (defaults to ~/.config/quill/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "quill=trace" (defaults to RUST_LOG, then "warn")
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start an interactive chat session (the default)
    Session,

    /// Ask a single question, print the answer and exit
    Ask {
        /// The question; multiple words are joined with spaces
        #[arg(required = true)]
        question: Vec<String>,
    },

    /// Print the version
    Version,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum CliTheme {
    Light,
    Dark,
}

impl From<CliTheme> for Theme {
    fn from(theme: CliTheme) -> Self {
        match theme {
            CliTheme::Light => Theme::Light,
            CliTheme::Dark => Theme::Dark,
        }
    }
}

impl Cli {
    fn load_settings(&self) -> Result<Settings> {
        let config_file = self.config.clone().or_else(default_config_file);
        let overrides = Overrides {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            host: self.host.clone(),
            endpoint: self.endpoint.clone(),
            theme: self.theme.map(Theme::from),
        };
        Ok(Settings::load(config_file.as_deref(), overrides)?)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref())?;

    match &cli.command {
        Some(Command::Version) => commands::version::execute(),
        Some(Command::Ask { question }) => {
            let settings = cli.load_settings()?;
            commands::ask::execute(settings, question.join(" ")).await
        }
        Some(Command::Session) | None => {
            let settings = cli.load_settings()?;
            commands::session::execute(settings).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ask_with_global_flags() {
        let cli = Cli::parse_from([
            "quill", "ask", "what", "is", "rust?", "--theme", "light", "-m", "gemini-pro",
        ]);
        assert!(matches!(cli.theme, Some(CliTheme::Light)));
        assert_eq!(cli.model.as_deref(), Some("gemini-pro"));
        match cli.command {
            Some(Command::Ask { question }) => assert_eq!(question.join(" "), "what is rust?"),
            _ => panic!("Expected ask command"),
        }
    }

    #[test]
    fn test_session_is_the_default() {
        let cli = Cli::parse_from(["quill", "--api-key", "k"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.api_key.as_deref(), Some("k"));
    }

    #[test]
    fn test_cli_theme_maps_to_theme() {
        assert_eq!(Theme::from(CliTheme::Light), Theme::Light);
        assert_eq!(Theme::from(CliTheme::Dark), Theme::Dark);
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
