use anyhow::Result;
use quill::models::message::Message;
use quill::session::Theme;

pub mod rustyline;
pub mod thinking;

pub const HELP: &str = "Commands:
/exit | /quit - Exit the session
/t | /theme - Toggle Light/Dark theme
/s | /sidebar - Show or hide the list of questions asked so far
/u | /menu - Show or hide the user menu
/? | /help - Display this help message
Ctrl+C - Clear the current line
Ctrl+D - Exit the session";

pub trait Prompt {
    fn render(&mut self, message: &Message, theme: Theme);
    fn render_panel(&mut self, title: &str, lines: &[String], theme: Theme);
    fn notify(&mut self, text: &str);
    /// Read the next line; `initial` pre-fills the editable input
    fn get_input(&mut self, initial: &str) -> Result<Input>;
    fn show_busy(&mut self);
    fn hide_busy(&self);
    fn close(&self);
    fn quill_ready(&self) {
        println!("\n");
        println!("Quill is ready! Type a question, or /help for commands.");
        println!("\n");
    }
    // Used for testing. Allows us to downcast to any type.
    #[cfg(test)]
    fn as_any(&self) -> &dyn std::any::Any;
}

#[derive(Debug, PartialEq)]
pub struct Input {
    pub input_type: InputType,
    pub content: Option<String>, // Only set for messages; commands carry no content
}

#[derive(Debug, PartialEq)]
pub enum InputType {
    AskAgain,       // Ask the user for input again. Control flow command.
    Message,        // User sent a message
    Exit,           // User wants to exit the session
    ToggleTheme,    // Switch between light and dark
    ToggleSidebar,  // Show or hide past questions
    ToggleUserMenu, // Show or hide the user menu
    Help,
}

impl Input {
    pub fn command(input_type: InputType) -> Self {
        Input {
            input_type,
            content: None,
        }
    }

    pub fn message<S: Into<String>>(content: S) -> Self {
        Input {
            input_type: InputType::Message,
            content: Some(content.into()),
        }
    }
}

/// Classify a raw input line. Anything that is not a known slash command is a
/// message and is passed on untouched, blank lines included.
pub fn parse_input(line: &str) -> Input {
    let command = line.trim();

    if is_command(command, &["/exit", "/quit"]) {
        Input::command(InputType::Exit)
    } else if is_command(command, &["/t", "/theme"]) {
        Input::command(InputType::ToggleTheme)
    } else if is_command(command, &["/s", "/sidebar"]) {
        Input::command(InputType::ToggleSidebar)
    } else if is_command(command, &["/u", "/menu"]) {
        Input::command(InputType::ToggleUserMenu)
    } else if is_command(command, &["/?", "/help"]) {
        Input::command(InputType::Help)
    } else {
        Input::message(line)
    }
}

fn is_command(command: &str, names: &[&str]) -> bool {
    names.iter().any(|name| command.eq_ignore_ascii_case(name))
}
