//! What the quiz says.

pub const WELCOME: &str = "Welcome to Song Match. I can help you understand which song by your \
favorite artist best fits you. Please tell me the name of your favorite artist.";

pub const HELP: &str = "I can tell you what song by your favorite artist matches you the best. \
Give me your favorite artist, take a quiz, then bam! A match!";

pub const REPROMPT: &str = "Sorry, I didn't hear that answer. Could you say that again?";

pub const NEXT_QUESTION: &str = "Got it. Next question.";

pub const REPLAY_REPROMPT: &str = "Did you say yay or nay?";

pub const ANOTHER_ARTIST: &str =
    "Cool. Please give me the name of another one of your favorite artists.";

pub const GOODBYE: &str = "Thank you for using Song Match. For another great skill, check out Song Quiz!";

/// "an" before a vowel, "a" otherwise
pub fn article_for(word: &str) -> &'static str {
    match word.trim_start().chars().next() {
        Some(c) if matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

/// Opening line once the artist is known, leading into the first question
pub fn intro(artist: &str, question_count: usize, first_prompt: &str) -> String {
    format!(
        "Great. {artist}. Now please respond to these {} questions to help me match you to {} {artist} song. First, {}",
        count_word(question_count),
        article_for(artist),
        lowercase_first(first_prompt),
    )
}

pub fn next_question(prompt: &str) -> String {
    format!("{} {}", NEXT_QUESTION, prompt)
}

pub fn song_match(label: &str) -> String {
    format!(
        "Based on your answers, your Song Match is {}. Would you like to get another Song Match \
with a different artist? Yay or nay.",
        label
    )
}

fn count_word(count: usize) -> String {
    const WORDS: [&str; 11] = [
        "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    ];
    WORDS
        .get(count)
        .map(|word| word.to_string())
        .unwrap_or_else(|| count.to_string())
}

fn lowercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_article_for_vowels() {
        assert_eq!(article_for("ABBA"), "an");
        assert_eq!(article_for("eminem"), "an");
        assert_eq!(article_for("Usher"), "an");
        assert_eq!(article_for("Outkast"), "an");
        assert_eq!(article_for("Imagine Dragons"), "an");
    }

    #[test]
    fn test_article_for_consonants_and_edges() {
        assert_eq!(article_for("Drake"), "a");
        assert_eq!(article_for("Young Thug"), "a");
        assert_eq!(article_for("2Pac"), "a");
        assert_eq!(article_for(""), "a");
    }

    #[test]
    fn test_intro_wording() {
        let text = intro("ABBA", 4, "How jittery do you feel right now?");
        assert_eq!(
            text,
            "Great. ABBA. Now please respond to these four questions to help me match you to \
an ABBA song. First, how jittery do you feel right now?"
        );
        assert!(intro("Drake", 12, "Q?").contains("these 12 questions to help me match you to a Drake song"));
    }

    #[test]
    fn test_song_match_wording() {
        assert!(song_match("Nonstop by Drake")
            .starts_with("Based on your answers, your Song Match is Nonstop by Drake."));
    }
}
