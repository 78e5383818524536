//! Depth-first, prefix-pruned search for words on a [`Board`].
//!
//! Starting cells are tried in row-major order and neighbors in the fixed
//! order given by [`Board::neighbors`], so results are reproducible. All
//! scratch state lives in a search frame created per call, which lets one
//! board and lexicon be searched from several threads at once.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use crate::{
    board::Board,
    error::{Result, WordSearchError},
    lexicon::Lexicon,
};

pub mod cache;

use cache::CachedIsViable;

/// Row-major cell indices, in the order their tiles spell a word.
pub type Path = Vec<usize>;

pub struct PathSearch<'s> {
    board: &'s Board,
    lexicon: &'s Lexicon,
    graph: Vec<Vec<usize>>,
}

struct SearchFrame {
    visited: Vec<bool>,
    path: Path,
    current: String,
}

impl SearchFrame {
    fn new(cells: usize) -> SearchFrame {
        SearchFrame {
            visited: vec![false; cells],
            path: Vec::with_capacity(cells),
            current: String::new(),
        }
    }

    /// Steps onto `index`, returning the length to truncate back to.
    fn enter(&mut self, index: usize, tile: &str) -> usize {
        let mark = self.current.len();
        self.visited[index] = true;
        self.path.push(index);
        self.current.push_str(tile);
        mark
    }

    fn leave(&mut self, index: usize, mark: usize) {
        self.visited[index] = false;
        self.path.pop();
        self.current.truncate(mark);
    }
}

impl<'s> PathSearch<'s> {
    pub fn new(board: &'s Board, lexicon: &'s Lexicon) -> PathSearch<'s> {
        PathSearch {
            board,
            lexicon,
            graph: board.adjacency(),
        }
    }

    pub fn board(&self) -> &'s Board {
        self.board
    }

    pub fn lexicon(&self) -> &'s Lexicon {
        self.lexicon
    }

    /// The first path spelling `word`, or an empty path if the board does not
    /// contain it. Branches die as soon as they stop being a lexicon prefix,
    /// so a word no lexicon entry starts with is never found.
    pub fn find_path(&self, word: &str) -> Result<Path> {
        let target = word.to_uppercase();
        let first = match target.chars().next() {
            Some(first) => first,
            None => {
                return Err(WordSearchError::InvalidInput(String::from(
                    "cannot search for an empty word",
                )))
            }
        };

        let mut frame = SearchFrame::new(self.board.tiles.len());

        for (start, tile) in self.board.tiles.iter().enumerate() {
            if tile.chars().next() != Some(first) {
                trace!(start, "skipping start");
                continue;
            }

            if self.path_from(&mut frame, start, &target) {
                debug!(word = %target, path = ?frame.path, "found word");
                return Ok(frame.path);
            }
        }

        Ok(Path::new())
    }

    /// Every lexicon word of at least `min_length` characters on the board,
    /// each with the first path discovered for it.
    pub fn find_all_words(&self, min_length: usize) -> Result<BTreeMap<String, Path>> {
        if min_length < 1 {
            return Err(WordSearchError::InvalidInput(String::from(
                "minimum word length must be at least 1",
            )));
        }

        let mut found = BTreeMap::new();
        let mut cache = CachedIsViable::new();
        let mut frame = SearchFrame::new(self.board.tiles.len());

        for start in 0..self.board.tiles.len() {
            self.words_from(&mut frame, start, min_length, &mut cache, &mut found);
        }

        debug!(
            words = found.len(),
            min_length,
            prefixes = cache.len(),
            "finished board search"
        );

        Ok(found)
    }

    /// Leaves the frame holding the matching path when it returns true.
    fn path_from(&self, frame: &mut SearchFrame, index: usize, target: &str) -> bool {
        let mark = frame.enter(index, &self.board.tiles[index]);

        if target.starts_with(frame.current.as_str()) && self.lexicon.is_viable(&frame.current) {
            if frame.current == target {
                return true;
            }

            for &next in &self.graph[index] {
                if !frame.visited[next] && self.path_from(frame, next, target) {
                    return true;
                }
            }
        }

        frame.leave(index, mark);
        false
    }

    fn words_from(
        &self,
        frame: &mut SearchFrame,
        index: usize,
        min_length: usize,
        cache: &mut CachedIsViable,
        found: &mut BTreeMap<String, Path>,
    ) {
        let mark = frame.enter(index, &self.board.tiles[index]);

        if cache.is_viable(&frame.current, self.lexicon) {
            if frame.current.chars().count() >= min_length
                && self.lexicon.is_word(&frame.current)
                && !found.contains_key(&frame.current)
            {
                found.insert(frame.current.clone(), frame.path.clone());
            }

            for &next in &self.graph[index] {
                if !frame.visited[next] {
                    self.words_from(frame, next, min_length, cache, found);
                }
            }
        }

        frame.leave(index, mark);
    }
}
