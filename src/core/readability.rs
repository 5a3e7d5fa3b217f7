//! Flesch Reading Ease and Flesch-Kincaid grade level.
//!
//! Sentences are runs of text terminated by `.`, `!` or `?`; words are
//! whitespace-separated; syllables come from a vowel-group heuristic. Every
//! count is floored at one so empty input degrades to a valid result.

use crate::core::keyword_density::round_to;
use crate::domain::model::{ReadabilityLabel, ReadabilityResult};
use regex::Regex;
use std::sync::LazyLock;

static SENTENCE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").unwrap());
static SILENT_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[^laeiouy]es|ed|[^laeiouy]e)$").unwrap());
static LEADING_Y: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^y").unwrap());
static VOWEL_GROUP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[aeiouy]{1,2}").unwrap());

const LONG_SENTENCE_WORDS: f64 = 20.0;
const COMPLEX_WORD_RATIO: f64 = 0.15;
const TARGET_SCORE: f64 = 60.0;

pub const LONG_SENTENCES_TIP: &str =
    "Your sentences are too long. Try splitting them into shorter sentences.";
pub const COMPLEX_WORDS_TIP: &str =
    "You are using too many complex words. Try using simpler alternatives.";
pub const DIFFICULT_TIP: &str =
    "The content is difficult to read for the general public. Aim for a score of 60-70.";
pub const CLEAR_WRITING_TIP: &str = "Great job! Your writing is clear and easy to understand.";

pub fn count_syllables(word: &str) -> usize {
    let word = word.to_lowercase();
    if word.chars().count() <= 3 {
        return 1;
    }

    let word = SILENT_SUFFIX.replace(&word, "");
    let word = LEADING_Y.replace(&word, "");

    match VOWEL_GROUP.find_iter(&word).count() {
        0 => 1,
        n => n,
    }
}

pub fn analyze_readability(text: &str) -> ReadabilityResult {
    let sentence_count = SENTENCE.find_iter(text).count().max(1);

    let mut words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        // blank input still counts as one (empty) word
        words.push("");
    }
    let word_count = words.len();

    let mut syllable_count = 0;
    let mut complex_words = 0;
    for word in &words {
        let syllables = count_syllables(word);
        syllable_count += syllables;
        if syllables >= 3 {
            complex_words += 1;
        }
    }

    let words_per_sentence = word_count as f64 / sentence_count as f64;
    let syllables_per_word = syllable_count as f64 / word_count as f64;

    let raw_score = 206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word;
    let raw_grade = 0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59;

    let mut recommendations = Vec::new();
    if words_per_sentence > LONG_SENTENCE_WORDS {
        recommendations.push(LONG_SENTENCES_TIP.to_string());
    }
    if complex_words as f64 / word_count as f64 > COMPLEX_WORD_RATIO {
        recommendations.push(COMPLEX_WORDS_TIP.to_string());
    }
    if raw_score < TARGET_SCORE {
        recommendations.push(DIFFICULT_TIP.to_string());
    }
    if recommendations.is_empty() {
        recommendations.push(CLEAR_WRITING_TIP.to_string());
    }

    tracing::trace!(
        sentence_count,
        word_count,
        syllable_count,
        raw_score,
        "readability counts"
    );

    ReadabilityResult {
        score: raw_score.round().clamp(0.0, 100.0) as u8,
        label: ReadabilityLabel::from_score(raw_score),
        grade_level: round_to(raw_grade, 1).max(0.0),
        word_count,
        sentence_count,
        complex_words,
        avg_sentence_length: round_to(words_per_sentence, 1),
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_words_have_one_syllable() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("a"), 1);
        assert_eq!(count_syllables(""), 1);
    }

    #[test]
    fn test_syllable_heuristic() {
        assert_eq!(count_syllables("sunny"), 2);
        assert_eq!(count_syllables("readability"), 5);
        // trailing "ed" is silent
        assert_eq!(count_syllables("jumped"), 1);
        // leading "y" is not a vowel
        assert_eq!(count_syllables("yellow"), 2);
        assert_eq!(count_syllables("Beautiful"), 4);
    }

    #[test]
    fn test_two_simple_sentences() {
        let result = analyze_readability("The cat sat on the mat. It was a sunny day.");
        assert_eq!(result.sentence_count, 2);
        // whitespace split: "mat." and "day." are words too
        assert_eq!(result.word_count, 11);
        assert_eq!(result.complex_words, 0);
        assert_eq!(result.score, 100);
        assert_eq!(result.label, ReadabilityLabel::VeryEasy);
        // raw grade is about -0.57
        assert_eq!(result.grade_level, 0.0);
        assert_eq!(result.avg_sentence_length, 5.5);
        assert_eq!(result.recommendations, vec![CLEAR_WRITING_TIP.to_string()]);
    }

    #[test]
    fn test_empty_input_is_degenerate_but_valid() {
        let result = analyze_readability("");
        assert_eq!(result.word_count, 1);
        assert_eq!(result.sentence_count, 1);
        assert!(result.score <= 100);
        assert!(!result.recommendations.is_empty());
    }

    #[test]
    fn test_text_without_terminator_is_one_sentence() {
        let result = analyze_readability("no punctuation at all here");
        assert_eq!(result.sentence_count, 1);
        assert_eq!(result.word_count, 5);
    }

    #[test]
    fn test_long_complex_sentence_triggers_all_tips() {
        let text = "Comprehensive institutional organizations systematically \
                    operationalize interdisciplinary methodologies, \
                    facilitating extraordinarily sophisticated collaborative \
                    environmental initiatives throughout multinational \
                    communities, universities, laboratories, municipalities \
                    and international associations simultaneously.";
        let result = analyze_readability(text);
        assert_eq!(result.sentence_count, 1);
        assert!(result.word_count > 20);
        assert_eq!(result.score, 0);
        assert_eq!(result.label, ReadabilityLabel::VeryDifficult);
        assert_eq!(
            result.recommendations,
            vec![
                LONG_SENTENCES_TIP.to_string(),
                COMPLEX_WORDS_TIP.to_string(),
                DIFFICULT_TIP.to_string(),
            ]
        );
    }
}
