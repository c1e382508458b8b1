//! Puzzle vector validation.
//!
//! A 2×2 grid is four cells, one qubit per cell; a 1 marks a pre-filled cell,
//! a 0 an empty one. Validation happens here, before any circuit construction.

use std::fmt;
use std::str::FromStr;

use crate::error::InvalidPuzzleError;

/// Number of cells in the 2×2 grid.
pub const PUZZLE_CELLS: usize = 4;

/// A validated puzzle vector. Index position maps 1:1 to a qubit index.
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Puzzle([u8; PUZZLE_CELLS]);

impl Puzzle {
    /// Validate a raw cell vector: exactly four entries, each 0 or 1.
    pub fn new(cells: &[u8]) -> Result<Self, InvalidPuzzleError> {
        if cells.len() != PUZZLE_CELLS {
            return Err(InvalidPuzzleError::WrongLength(cells.len()));
        }
        let mut fixed = [0u8; PUZZLE_CELLS];
        for (index, &value) in cells.iter().enumerate() {
            if value > 1 {
                return Err(InvalidPuzzleError::NonBinaryCell { index, value });
            }
            fixed[index] = value;
        }
        Ok(Self(fixed))
    }

    pub fn cells(&self) -> &[u8; PUZZLE_CELLS] {
        &self.0
    }

    /// Indices of pre-filled cells, in qubit order.
    pub fn filled_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter(|(_, &value)| value == 1)
            .map(|(index, _)| index)
    }

    pub fn num_filled(&self) -> usize {
        self.filled_indices().count()
    }
}

impl FromStr for Puzzle {
    type Err = InvalidPuzzleError;

    /// Parse the CLI form, e.g. `"1000"`: one character per cell, qubit 0 first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != PUZZLE_CELLS {
            return Err(InvalidPuzzleError::WrongLength(chars.len()));
        }
        let mut cells = [0u8; PUZZLE_CELLS];
        for (index, &cell) in chars.iter().enumerate() {
            cells[index] = match cell {
                '0' => 0,
                '1' => 1,
                _ => return Err(InvalidPuzzleError::UnparsableCell { index, cell }),
            };
        }
        Ok(Self(cells))
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for value in self.0 {
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_vectors_accepted() {
        for cells in [[0, 0, 0, 0], [1, 0, 0, 0], [1, 1, 1, 1], [0, 1, 0, 1]] {
            let puzzle = Puzzle::new(&cells).unwrap();
            assert_eq!(puzzle.cells(), &cells);
        }
    }

    #[test]
    fn test_wrong_length_rejected() {
        assert_eq!(
            Puzzle::new(&[1, 0]).unwrap_err(),
            InvalidPuzzleError::WrongLength(2)
        );
        assert_eq!(
            Puzzle::new(&[1, 0, 0, 0, 1]).unwrap_err(),
            InvalidPuzzleError::WrongLength(5)
        );
    }

    #[test]
    fn test_non_binary_cell_rejected() {
        assert_eq!(
            Puzzle::new(&[1, 0, 2, 0]).unwrap_err(),
            InvalidPuzzleError::NonBinaryCell { index: 2, value: 2 }
        );
    }

    #[test]
    fn test_filled_indices() {
        let puzzle = Puzzle::new(&[1, 0, 0, 1]).unwrap();
        let filled: Vec<usize> = puzzle.filled_indices().collect();
        assert_eq!(filled, vec![0, 3]);
        assert_eq!(puzzle.num_filled(), 2);
    }

    #[test]
    fn test_parse_and_display_round_trip() {
        let puzzle: Puzzle = "1001".parse().unwrap();
        assert_eq!(puzzle.cells(), &[1, 0, 0, 1]);
        assert_eq!(puzzle.to_string(), "1001");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "10".parse::<Puzzle>().unwrap_err(),
            InvalidPuzzleError::WrongLength(2)
        );
        assert_eq!(
            "10a0".parse::<Puzzle>().unwrap_err(),
            InvalidPuzzleError::UnparsableCell { index: 2, cell: 'a' }
        );
        assert_eq!(
            "1020".parse::<Puzzle>().unwrap_err(),
            InvalidPuzzleError::UnparsableCell { index: 2, cell: '2' }
        );
    }
}
