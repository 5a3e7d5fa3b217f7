//! Text normalisation shared by the keyword analyzer.

/// Common English function words that never count as keywords.
pub const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "it", "that",
    "this", "these", "those", "as", "if", "when", "than", "from", "into", "during", "since",
    "will", "would", "shall", "should", "can", "could", "may", "might", "must", "do", "does",
    "did", "i", "you", "he", "she", "we", "they", "me", "him", "her", "us", "them", "my",
    "your", "his", "their",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Lower-cases, drops everything but ASCII word characters and whitespace,
/// and collapses whitespace runs into single spaces.
pub fn clean_text(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Word sequence of the cleaned text. Empty when nothing survives cleaning.
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned = clean_text(text);
    if cleaned.is_empty() {
        return Vec::new();
    }
    cleaned.split(' ').map(str::to_string).collect()
}

/// Words that may become keywords: longer than two chars and not a stop word.
pub fn is_significant(word: &str) -> bool {
    word.chars().count() > 2 && !is_stop_word(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_text_strips_punctuation_and_collapses_spaces() {
        assert_eq!(
            clean_text("  Hello,   World!\n\tRust's  snake_case "),
            "hello world rusts snake_case"
        );
    }

    #[test]
    fn test_clean_text_drops_non_ascii_letters() {
        assert_eq!(clean_text("café naïve"), "caf nave");
    }

    #[test]
    fn test_tokenize_empty_and_symbol_only_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n ").is_empty());
        assert!(tokenize("!!! ??? ...").is_empty());
    }

    #[test]
    fn test_stop_word_list() {
        assert_eq!(STOP_WORDS.len(), 64);
        assert!(is_stop_word("their"));
        assert!(!is_stop_word("keyword"));
    }

    #[test]
    fn test_short_words_are_not_significant() {
        assert!(!is_significant("ai"));
        assert!(!is_significant("ux"));
        assert!(!is_significant("the"));
        assert!(is_significant("seo"));
    }
}
