//! Line-by-line quiz conversation, independent of the terminal.
//!
//! ```text
//! AwaitingArtist ──artist──▶ Answering ──last answer──▶ AwaitingReplay
//!       ▲                                                 │      │
//!       └──────────────────────── yay ────────────────────┘      └─ nay ─▶ done
//! ```

use super::messages;
use crate::config::OutputConfig;
use crate::output::console::ConsoleFormatter;
use song_match_application::use_cases::answer_input::canonical;
use song_match_application::{AnswerOutcome, QuizResult, RunQuizUseCase};
use song_match_domain::QuizSession;

/// Where the conversation stands
#[derive(Debug, Clone, PartialEq)]
pub enum ConversationState {
    AwaitingArtist,
    Answering { artist: String, session: QuizSession },
    AwaitingReplay,
    Finished,
}

/// What to show the user after a line of input
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub text: String,
    /// The conversation is over
    pub done: bool,
}

impl Reply {
    fn say(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            done: false,
        }
    }

    fn goodbye() -> Self {
        Self {
            text: messages::GOODBYE.to_string(),
            done: true,
        }
    }
}

/// Drives one user through artist, questions and replay
pub struct QuizConversation {
    use_case: RunQuizUseCase,
    output: OutputConfig,
    state: ConversationState,
    /// Last thing said that expects an answer, for `/repeat`
    last_prompt: String,
}

impl QuizConversation {
    pub fn new(use_case: RunQuizUseCase, output: OutputConfig) -> Self {
        Self {
            use_case,
            output,
            state: ConversationState::AwaitingArtist,
            last_prompt: messages::WELCOME.to_string(),
        }
    }

    pub fn state(&self) -> &ConversationState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state == ConversationState::Finished
    }

    /// Opening message
    pub fn welcome(&mut self) -> Reply {
        self.prompt(messages::WELCOME.to_string())
    }

    /// Skip the artist prompt and go straight to the first question
    pub fn begin_with_artist(&mut self, artist: &str) -> Reply {
        self.state = ConversationState::AwaitingArtist;
        self.handle_artist(artist)
    }

    /// React to one line of user input
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let line = line.trim();
        if line.is_empty() {
            return Reply::default();
        }

        if line.starts_with('/') {
            return self.handle_command(line);
        }

        match &self.state {
            ConversationState::AwaitingArtist => self.handle_artist(line),
            ConversationState::Answering { .. } => self.handle_answer(line),
            ConversationState::AwaitingReplay => self.handle_replay(line),
            ConversationState::Finished => Reply {
                text: String::new(),
                done: true,
            },
        }
    }

    fn handle_command(&mut self, command: &str) -> Reply {
        match command {
            "/quit" | "/exit" | "/q" => {
                self.state = ConversationState::Finished;
                Reply::goodbye()
            }
            "/help" | "/h" | "/?" => Reply::say(format!(
                "{}\n\nCommands:\n  /help, /h, /?     - Show this help\n  /repeat, /r       - Say the last prompt again\n  /restart          - Start over with a new artist\n  /quit, /exit, /q  - Exit",
                messages::HELP
            )),
            "/repeat" | "/r" => Reply::say(format!("Sure, I said, {}", self.last_prompt)),
            "/restart" => {
                if let ConversationState::Answering { session, .. } = &mut self.state {
                    self.use_case.restart(session);
                }
                self.state = ConversationState::AwaitingArtist;
                self.welcome()
            }
            _ => Reply::say(format!(
                "Unknown command: {}\nType /help for available commands",
                command
            )),
        }
    }

    fn handle_artist(&mut self, artist: &str) -> Reply {
        let artist = artist.trim();
        if artist.is_empty() {
            return Reply::say(messages::REPROMPT);
        }

        let session = self.use_case.start(Some(artist));
        let Some(first) = self.use_case.current_question(&session) else {
            return Reply::say(messages::REPROMPT);
        };
        let text = messages::intro(artist, self.use_case.quiz().question_count(), first.prompt());

        self.state = ConversationState::Answering {
            artist: artist.to_string(),
            session,
        };
        self.prompt(text)
    }

    fn handle_answer(&mut self, line: &str) -> Reply {
        let ConversationState::Answering { session, .. } = &mut self.state else {
            return Reply::say(messages::REPROMPT);
        };

        match self.use_case.submit_answer(session, line) {
            Ok(AnswerOutcome::Next { .. }) => {
                let prompt = self
                    .use_case
                    .current_question(session)
                    .map(|q| q.prompt().to_string())
                    .unwrap_or_default();
                self.prompt(messages::next_question(&prompt))
            }
            Ok(AnswerOutcome::Completed(result)) => {
                self.state = ConversationState::AwaitingReplay;
                let text = self.result_text(&result);
                self.last_prompt = messages::song_match(&result.label);
                Reply::say(text)
            }
            Err(e) if e.is_reprompt() => Reply::say(messages::REPROMPT),
            Err(e) => Reply::say(format!("Error: {}", e)),
        }
    }

    fn handle_replay(&mut self, line: &str) -> Reply {
        match canonical(line).as_str() {
            "yay" | "yes" | "y" => {
                self.state = ConversationState::AwaitingArtist;
                self.prompt(messages::ANOTHER_ARTIST.to_string())
            }
            "nay" | "no" | "n" => {
                self.state = ConversationState::Finished;
                Reply::goodbye()
            }
            _ => Reply::say(messages::REPLAY_REPROMPT),
        }
    }

    fn result_text(&self, result: &QuizResult) -> String {
        let mut text = messages::song_match(&result.label);
        if self.output.show_ranking {
            text.push('\n');
            text.push_str(ConsoleFormatter::format_ranking(result).trim_end());
        }
        text
    }

    fn prompt(&mut self, text: String) -> Reply {
        self.last_prompt = text.clone();
        Reply::say(text)
    }
}
