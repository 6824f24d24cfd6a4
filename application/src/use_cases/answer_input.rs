//! Mapping raw user input onto a question's answer choices.

use song_match_domain::Question;

/// Reduce an utterance to its comparable form: trimmed, lowercased, inner
/// whitespace collapsed and surrounding punctuation dropped.
pub fn canonical(raw: &str) -> String {
    raw.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim_matches(|c: char| c.is_ascii_punctuation() && c != '$')
        .trim()
        .to_lowercase()
}

/// Resolve what the user typed to one of the question's choice labels.
///
/// Accepts the label in any case or spacing, or its 1-based position in the
/// choice list. Returns `None` when nothing matches.
pub fn resolve_choice<'q>(question: &'q Question, raw: &str) -> Option<&'q str> {
    let wanted = canonical(raw);
    if wanted.is_empty() {
        return None;
    }

    let table = question.answer_weights();

    if let Ok(position) = wanted.parse::<usize>() {
        return position
            .checked_sub(1)
            .and_then(|index| table.labels().nth(index));
    }

    table.labels().find(|label| canonical(label) == wanted)
}
