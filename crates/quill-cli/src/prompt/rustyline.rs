use std::io::{self, Write};

use anyhow::Result;
use cliclack::spinner;
use quill::models::message::Message;
use quill::session::Theme;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{parse_input, thinking::get_random_thinking_message, Input, InputType, Prompt};
use crate::render;

const PROMPT: &str = "\x1b[1m\x1b[38;5;33m✎ \x1b[0m";

pub struct RustylinePrompt {
    spinner: cliclack::ProgressBar,
    editor: DefaultEditor,
}

impl RustylinePrompt {
    pub fn new() -> Result<Self> {
        Ok(RustylinePrompt {
            spinner: spinner(),
            editor: DefaultEditor::new()?,
        })
    }
}

fn print_newline() {
    println!();
}

impl Prompt for RustylinePrompt {
    fn render(&mut self, message: &Message, theme: Theme) {
        println!("{}", render::render_message(message, theme));
        print_newline();
        let _ = io::stdout().flush();
    }

    fn render_panel(&mut self, title: &str, lines: &[String], theme: Theme) {
        println!("{}", render::render_panel(title, lines, theme));
        print_newline();
    }

    fn notify(&mut self, text: &str) {
        println!("{}", text);
    }

    fn show_busy(&mut self) {
        self.spinner = spinner();
        self.spinner
            .start(format!("{}...", get_random_thinking_message()));
    }

    fn hide_busy(&self) {
        self.spinner.stop("");
    }

    fn get_input(&mut self, initial: &str) -> Result<Input> {
        let line = match self.editor.readline_with_initial(PROMPT, (initial, "")) {
            Ok(line) => line,
            // Ctrl+C drops the current line, Ctrl+D ends the session.
            Err(ReadlineError::Interrupted) => return Ok(Input::command(InputType::AskAgain)),
            Err(ReadlineError::Eof) => return Ok(Input::command(InputType::Exit)),
            Err(e) => {
                eprintln!("Input error: {}", e);
                return Ok(Input::command(InputType::Exit));
            }
        };

        let input = parse_input(&line);
        if input.input_type == InputType::Message && !line.trim().is_empty() {
            self.editor.add_history_entry(line.as_str())?;
        }
        Ok(input)
    }

    fn close(&self) {
        // No cleanup required
    }

    #[cfg(test)]
    fn as_any(&self) -> &dyn std::any::Any {
        panic!("Not implemented");
    }
}
