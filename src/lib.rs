//! Finds dictionary words on a square grid of letter tiles and scores them.
//!
//! ```
//! use wordsearch::{Board, Lexicon, PathSearch};
//!
//! let board = Board::default();
//! let lexicon = Lexicon::build(vec!["elan", "peel"]);
//! let search = PathSearch::new(&board, &lexicon);
//!
//! assert_eq!(vec![0, 5, 4, 9], search.find_path("elan").unwrap());
//! assert_eq!(2, search.find_all_words(3).unwrap().len());
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod lexicon;
pub mod score;
pub mod search;

pub use board::Board;
pub use error::{Result, WordSearchError};
pub use game::Game;
pub use lexicon::Lexicon;
pub use score::{score_words, word_score, DEFAULT_MIN_WORD_LENGTH};
pub use search::{Path, PathSearch};
