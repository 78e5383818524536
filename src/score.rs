use std::collections::BTreeSet;

use crate::{
    error::{Result, WordSearchError},
    search::PathSearch,
};

pub const DEFAULT_MIN_WORD_LENGTH: usize = 3;

/// One point for reaching `min_length`, one more per extra character.
pub fn word_score(word: &str, min_length: usize) -> usize {
    let length = word.chars().count();
    if length < min_length {
        return 0;
    }
    1 + length - min_length
}

/// Total score of the scorable words: long enough, in the lexicon, and on
/// the board. Words are compared case-insensitively and counted once.
pub fn score_words<I, S>(search: &PathSearch, words: I, min_length: usize) -> Result<usize>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if min_length < 1 {
        return Err(WordSearchError::InvalidInput(String::from(
            "minimum word length must be at least 1",
        )));
    }

    let words: BTreeSet<String> = words
        .into_iter()
        .map(|word| word.as_ref().to_uppercase())
        .collect();

    let mut total = 0;
    for word in &words {
        if word.chars().count() < min_length || !search.lexicon().is_word(word) {
            continue;
        }
        if search.find_path(word)?.is_empty() {
            continue;
        }
        total += word_score(word, min_length);
    }

    Ok(total)
}
