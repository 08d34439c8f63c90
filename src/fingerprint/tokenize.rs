use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());
static PHRASE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,:;]+").unwrap());

/// Split on runs of `.`, `!` or `?`. Only a trailing empty piece is dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences: Vec<&str> = SENTENCE_END.split(text).collect();
    if sentences.last() == Some(&"") {
        sentences.pop();
    }
    sentences
}

/// Split a sentence on runs of `,`, `:` or `;`.
pub fn split_phrases(sentence: &str) -> Vec<&str> {
    PHRASE_BREAK.split(sentence).collect()
}

pub fn split_words(phrase: &str) -> Vec<&str> {
    phrase.split_whitespace().collect()
}

fn frequencies(words: &[&str]) -> HashMap<String, usize> {
    let mut freq = HashMap::new();
    for word in words {
        *freq.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    freq
}

/// Number of different words, ignoring case.
pub fn distinct_words(words: &[&str]) -> usize {
    frequencies(words).len()
}

/// Number of words (ignoring case) that occur exactly once.
pub fn hapax_words(words: &[&str]) -> usize {
    frequencies(words).values().filter(|count| **count == 1).count()
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
