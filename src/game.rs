use std::{collections::BTreeSet, path::Path as FilePath};

use crate::{
    board::Board,
    error::{Result, WordSearchError},
    lexicon::Lexicon,
    score::score_words,
    search::{Path, PathSearch},
};

/// A word-search game: a board that is always present and a lexicon that
/// must be loaded before any query.
#[derive(Clone, Debug, Default)]
pub struct Game {
    lexicon: Option<Lexicon>,
    board: Board,
}

impl Game {
    /// No lexicon, default 4×4 board.
    pub fn new() -> Game {
        Game::default()
    }

    pub fn load_lexicon<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lexicon = Some(Lexicon::build(words));
    }

    pub fn load_lexicon_file<P: AsRef<FilePath>>(&mut self, path: P) -> Result<()> {
        self.lexicon = Some(Lexicon::load(path)?);
        Ok(())
    }

    pub fn set_lexicon(&mut self, lexicon: Lexicon) {
        self.lexicon = Some(lexicon);
    }

    pub fn set_board<I, S>(&mut self, tiles: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.board = Board::new(tiles)?;
        Ok(())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn lexicon(&self) -> Result<&Lexicon> {
        self.lexicon
            .as_ref()
            .ok_or(WordSearchError::NotInitialized("lexicon"))
    }

    pub fn is_valid_word(&self, word: &str) -> Result<bool> {
        Ok(self.lexicon()?.contains(word))
    }

    pub fn is_valid_prefix(&self, prefix: &str) -> Result<bool> {
        Ok(self.lexicon()?.has_prefix(prefix))
    }

    pub fn is_on_board(&self, word: &str) -> Result<Path> {
        self.search()?.find_path(word)
    }

    pub fn all_scorable_words(&self, min_length: usize) -> Result<BTreeSet<String>> {
        let found = self.search()?.find_all_words(min_length)?;
        Ok(found.into_iter().map(|(word, _)| word).collect())
    }

    pub fn score_for_words<I, S>(&self, words: I, min_length: usize) -> Result<usize>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        score_words(&self.search()?, words, min_length)
    }

    pub fn search(&self) -> Result<PathSearch<'_>> {
        Ok(PathSearch::new(&self.board, self.lexicon()?))
    }
}
