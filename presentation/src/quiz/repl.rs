//! REPL (Read-Eval-Print Loop) for the interactive quiz

use super::conversation::{QuizConversation, Reply};
use crate::config::{OutputConfig, ReplConfig};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use song_match_application::RunQuizUseCase;

/// Interactive quiz REPL
pub struct QuizRepl {
    conversation: QuizConversation,
    config: ReplConfig,
    artist: Option<String>,
}

impl QuizRepl {
    pub fn new(use_case: RunQuizUseCase, output: OutputConfig, config: ReplConfig) -> Self {
        Self {
            conversation: QuizConversation::new(use_case, output),
            config,
            artist: None,
        }
    }

    /// Start with this artist instead of asking for one
    pub fn with_artist(mut self, artist: Option<String>) -> Self {
        self.artist = artist;
        self
    }

    /// Run the interactive REPL
    pub fn run(mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_path();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        if !self.config.quiet {
            Self::print_banner();
        }

        let opening = match self.artist.take() {
            Some(artist) => self.conversation.begin_with_artist(&artist),
            None => self.conversation.welcome(),
        };
        Self::print_reply(&opening);

        loop {
            match rl.readline(">>> ") {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line.trim());

                    let reply = self.conversation.handle_line(&line);
                    Self::print_reply(&reply);
                    if reply.done {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    Self::print_reply(&self.conversation.handle_line("/quit"));
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_banner() {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│                 Song Match                  │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", "Type /help for commands.".dimmed());
        println!();
    }

    fn print_reply(reply: &Reply) {
        if !reply.text.is_empty() {
            println!("{}", reply.text);
            println!();
        }
    }
}
