//! Board storage and the set of open cells.

use crate::types::{Coordinate, DIMENSION, Mark};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// One board position and whatever mark sits on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    coord: Coordinate,
    mark: Option<Mark>,
}

impl Cell {
    /// The position of this cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    /// The mark on this cell, if any.
    pub fn mark(&self) -> Option<Mark> {
        self.mark
    }

    /// True if no mark has been placed here.
    pub fn is_empty(&self) -> bool {
        self.mark.is_none()
    }
}

/// 3x3 grid of cells, indexed by [`Coordinate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; DIMENSION]; DIMENSION],
}

impl Board {
    /// Builds a fresh board with every cell empty.
    ///
    /// Each call produces an independent value; games never share a board.
    pub fn empty() -> Self {
        Self {
            cells: std::array::from_fn(|row| {
                std::array::from_fn(|col| Cell {
                    coord: Coordinate::ALL[row * DIMENSION + col],
                    mark: None,
                })
            }),
        }
    }

    /// Returns the cell at `coord`.
    pub fn cell(&self, coord: Coordinate) -> &Cell {
        &self.cells[coord.row()][coord.col()]
    }

    /// Returns the mark at `coord`, if any.
    pub fn get(&self, coord: Coordinate) -> Option<Mark> {
        self.cell(coord).mark
    }

    /// True if `coord` holds no mark.
    pub fn is_empty(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_empty()
    }

    /// Places `mark` at `coord` if the cell is empty.
    ///
    /// Returns `false` and leaves the board untouched when the cell is taken.
    pub(crate) fn place(&mut self, coord: Coordinate, mark: Mark) -> bool {
        let cell = &mut self.cells[coord.row()][coord.col()];
        if cell.mark.is_some() {
            return false;
        }
        cell.mark = Some(mark);
        true
    }

    /// The cells of row `row`, left to right.
    pub(crate) fn row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        self.cells[row].iter()
    }

    /// The cells of column `col`, top to bottom.
    pub(crate) fn column(&self, col: usize) -> impl Iterator<Item = &Cell> {
        self.cells.iter().map(move |row| &row[col])
    }

    /// Top-left to bottom-right diagonal.
    pub fn diagonal(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().enumerate().map(|(i, row)| &row[i])
    }

    /// Top-right to bottom-left diagonal.
    pub fn anti_diagonal(&self) -> impl Iterator<Item = &Cell> {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, row)| &row[DIMENSION - 1 - i])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    /// Number of cells holding a mark.
    pub fn occupied_count(&self) -> usize {
        self.cells().filter(|c| !c.is_empty()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

/// Coordinates still open for a move, in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSet {
    coords: Vec<Coordinate>,
}

impl AvailableSet {
    /// All nine coordinates.
    pub fn full() -> Self {
        Self {
            coords: Coordinate::ALL.to_vec(),
        }
    }

    /// Removes `coord`, returning whether it was present.
    pub(crate) fn remove(&mut self, coord: Coordinate) -> bool {
        match self.coords.iter().position(|c| *c == coord) {
            Some(i) => {
                self.coords.remove(i);
                true
            }
            None => false,
        }
    }

    /// Picks one open coordinate uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Coordinate> {
        self.coords.choose(rng).copied()
    }

    /// True if `coord` is open.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.coords.contains(&coord)
    }

    /// Number of open coordinates.
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// True once every cell is taken.
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The open coordinates.
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coords
    }

    /// Iterates over the open coordinates.
    pub fn iter(&self) -> impl Iterator<Item = &Coordinate> {
        self.coords.iter()
    }
}

impl Default for AvailableSet {
    fn default() -> Self {
        Self::full()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_boards_are_independent() {
        let mut a = Board::empty();
        let b = Board::empty();
        assert!(a.place(c(1, 1), Mark::X));
        assert_eq!(a.get(c(1, 1)), Some(Mark::X));
        assert!(b.is_empty(c(1, 1)));
    }

    #[test]
    fn test_cells_carry_their_coordinates() {
        let board = Board::empty();
        for (cell, coord) in board.cells().zip(Coordinate::ALL) {
            assert_eq!(cell.coord(), coord);
        }
    }

    #[test]
    fn test_place_refuses_occupied_cell() {
        let mut board = Board::empty();
        assert!(board.place(c(0, 2), Mark::O));
        assert!(!board.place(c(0, 2), Mark::X));
        assert_eq!(board.get(c(0, 2)), Some(Mark::O));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_line_iterators() {
        let board = Board::empty();
        let anti: Vec<_> = board.anti_diagonal().map(|cell| cell.coord()).collect();
        assert_eq!(anti, vec![c(0, 2), c(1, 1), c(2, 0)]);
        let column: Vec<_> = board.column(1).map(|cell| cell.coord()).collect();
        assert_eq!(column, vec![c(0, 1), c(1, 1), c(2, 1)]);
    }

    #[test]
    fn test_available_set_shrinks_and_chooses_members() {
        let mut available = AvailableSet::full();
        assert_eq!(available.len(), 9);
        assert!(available.remove(c(1, 1)));
        assert!(!available.remove(c(1, 1)));
        assert_eq!(available.len(), 8);

        let mut rng = ChaCha8Rng::seed_from_u64(3);
        for _ in 0..32 {
            let pick = available.choose(&mut rng).unwrap();
            assert!(available.contains(pick));
            assert_ne!(pick, c(1, 1));
        }
    }
}
