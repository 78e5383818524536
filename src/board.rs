use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, WordSearchError};

/// An N×N grid of tiles, stored row-major and upper-cased.
#[derive(PartialEq, Eq, Debug, Hash, Clone, Serialize)]
pub struct Board {
    pub(crate) tiles: Vec<String>,
    pub(crate) size: usize,
}

impl Board {
    /// Builds a board from row-major tiles. The tile count must be a
    /// non-zero perfect square.
    pub fn new<I, S>(tiles: I) -> Result<Board>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let tiles: Vec<String> = tiles
            .into_iter()
            .map(|tile| tile.as_ref().to_uppercase())
            .collect();

        if tiles.is_empty() {
            return Err(WordSearchError::InvalidInput(String::from(
                "board has no tiles",
            )));
        }

        let size = (tiles.len() as f64).sqrt().round() as usize;
        if size * size != tiles.len() {
            return Err(WordSearchError::InvalidInput(format!(
                "{} tiles do not form a square",
                tiles.len()
            )));
        }

        debug!(size, "built board");

        Ok(Board { tiles, size })
    }

    /// Parses whitespace-separated tiles, e.g. `"E E C A\nA L E P ..."`.
    pub fn parse(contents: &str) -> Result<Board> {
        Board::new(contents.split_whitespace())
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn tiles(&self) -> &[String] {
        &self.tiles
    }

    /// Panics if the cell is off the board.
    pub fn tile_at(&self, row: usize, col: usize) -> &str {
        &self.tiles[self.index(row, col)]
    }

    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }

    /// The in-bounds cells around `(row, col)`, row-major within the 3×3
    /// neighborhood. `(row, col)` must be on the board.
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        debug_assert!(row < self.size && col < self.size);

        let mut result = Vec::with_capacity(8);

        let rows = row.saturating_sub(1)..=(row + 1).min(self.size - 1);
        for r in rows {
            let cols = col.saturating_sub(1)..=(col + 1).min(self.size - 1);
            for c in cols {
                if (r, c) != (row, col) {
                    result.push((r, c));
                }
            }
        }

        result
    }

    pub(crate) fn adjacency(&self) -> Vec<Vec<usize>> {
        (0..self.tiles.len())
            .map(|index| {
                let (row, col) = self.position(index);
                self.neighbors(row, col)
                    .into_iter()
                    .map(|(r, c)| self.index(r, c))
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Board {
        Board {
            tiles: "E E C A A L E P H N B O Q T T Y"
                .split(' ')
                .map(String::from)
                .collect(),
            size: 4,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.tiles.iter().map(|t| t.chars().count()).max().unwrap_or(1);

        for row in 0..self.size {
            for col in 0..self.size {
                if col != 0 {
                    write!(f, " ")?;
                }
                if col != self.size - 1 {
                    write!(f, "{:<width$}", self.tile_at(row, col), width = width)?;
                } else {
                    write!(f, "{}", self.tile_at(row, col))?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Board;

    #[test]
    fn it_works() {
        let result = Board::parse(
            "
a b c
d e f
g h i
",
        );

        assert!(result.is_ok());

        let b = result.unwrap();
        assert_eq!(3, b.size());
        assert_eq!("A", b.tile_at(0, 0));
        assert_eq!("F", b.tile_at(1, 2));
        assert_eq!(7, b.index(2, 1));
        assert_eq!((2, 1), b.position(7));
    }

    #[test]
    fn rejects_non_square() {
        assert!(Board::new(vec!["A", "B", "C"]).unwrap_err().is_invalid_input());
        assert!(Board::new(Vec::<String>::new()).unwrap_err().is_invalid_input());
    }

    #[test]
    fn multi_char_tiles() {
        let b = Board::new(vec!["qu", "a", "i", "d"]).unwrap();
        assert_eq!(2, b.size());
        assert_eq!("QU", b.tile_at(0, 0));
    }

    #[test]
    fn neighbors_works() {
        let b = Board::default();

        assert_eq!(vec![(0, 1), (1, 0), (1, 1)], b.neighbors(0, 0));
        assert_eq!(
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)],
            b.neighbors(1, 1)
        );
        assert_eq!(vec![(2, 2), (2, 3), (3, 2)], b.neighbors(3, 3));
        assert_eq!(
            vec![(0, 2), (0, 3), (1, 2), (2, 2), (2, 3)],
            b.neighbors(1, 3)
        );
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn neighbors_off_the_board() {
        Board::default().neighbors(4, 0);
    }

    #[test]
    fn single_cell_has_no_neighbors() {
        let b = Board::new(vec!["A"]).unwrap();
        assert!(b.neighbors(0, 0).is_empty());
        assert_eq!(vec![Vec::<usize>::new()], b.adjacency());
    }

    #[test]
    fn display_works() {
        let b = Board::new(vec!["QU", "A", "I", "D"]).unwrap();
        assert_eq!("QU A\nI  D\n", b.to_string());

        assert_eq!(
            "E E C A\nA L E P\nH N B O\nQ T T Y\n",
            Board::default().to_string()
        );
    }
}
