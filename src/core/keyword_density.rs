use crate::core::tokenizer::{is_significant, tokenize};
use crate::domain::model::{KeywordDensityResult, KeywordEntry};
use std::collections::HashMap;

pub const MAX_KEYWORDS: usize = 15;

/// Counts significant words and reports the most frequent ones with their
/// share of all words. Equal counts keep first-occurrence order.
pub fn analyze_keyword_density(text: &str) -> KeywordDensityResult {
    let words = tokenize(text);
    let total_words = words.len();

    if total_words == 0 {
        return KeywordDensityResult::default();
    }

    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for word in words.iter().filter(|w| is_significant(w)) {
        match positions.get(word.as_str()) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(word.as_str(), counts.len());
                counts.push((word.as_str(), 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    let keywords = counts
        .into_iter()
        .take(MAX_KEYWORDS)
        .map(|(word, count)| KeywordEntry {
            word: word.to_string(),
            count,
            density: round_to(count as f64 / total_words as f64 * 100.0, 2),
        })
        .collect();

    KeywordDensityResult {
        keywords,
        total_words,
    }
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
