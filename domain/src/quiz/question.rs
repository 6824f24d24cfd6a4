//! Question and answer weight table value objects

use crate::profile::ProfileVector;
use serde::{Deserialize, Serialize};

/// One legal answer to a question and the weights it contributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub label: String,
    pub weights: ProfileVector,
}

/// Mapping from answer label to the vector added when that answer is chosen
///
/// Choices keep their insertion order so front ends can list them the way
/// the quiz author wrote them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerWeightTable {
    choices: Vec<AnswerChoice>,
}

impl AnswerWeightTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a choice (builder style)
    pub fn with_choice(mut self, label: impl Into<String>, weights: ProfileVector) -> Self {
        self.choices.push(AnswerChoice {
            label: label.into(),
            weights,
        });
        self
    }

    /// Weights for an exact choice label
    pub fn weights_for(&self, label: &str) -> Option<&ProfileVector> {
        self.choices
            .iter()
            .find(|c| c.label == label)
            .map(|c| &c.weights)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.weights_for(label).is_some()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.choices.iter().map(|c| c.label.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnswerChoice> {
        self.choices.iter()
    }

    pub fn len(&self) -> usize {
        self.choices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }
}

/// A single quiz step (Value Object)
///
/// Holds the prompt shown to the user and the weight table consulted when
/// an answer comes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    prompt: String,
    answer_weights: AnswerWeightTable,
}

impl Question {
    pub fn new(prompt: impl Into<String>, answer_weights: AnswerWeightTable) -> Self {
        Self {
            prompt: prompt.into(),
            answer_weights,
        }
    }

    /// Get the prompt text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn answer_weights(&self) -> &AnswerWeightTable {
        &self.answer_weights
    }

    /// Owned list of legal choice labels, in table order
    pub fn choice_labels(&self) -> Vec<String> {
        self.answer_weights.labels().map(str::to_string).collect()
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prompt)
    }
}
