//! Quiz subdomain
//!
//! Immutable quiz data ([`QuizDefinition`]: questions with their answer
//! weight tables, and the catalog of candidate items) plus the mutable,
//! caller-owned [`QuizSession`].

pub mod builtin;
pub mod catalog;
pub mod definition;
pub mod question;
pub mod session;

pub use catalog::CatalogItem;
pub use definition::QuizDefinition;
pub use question::{AnswerChoice, AnswerWeightTable, Question};
pub use session::{QuizSession, QuizState};
