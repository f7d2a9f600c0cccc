pub mod color;
pub mod error;
pub mod notation;

mod display;

use std::ops::{Deref, DerefMut};

use color::Color;
use error::BoardError;

/// Number of cells along each edge of the board.
pub const BOARD_SIZE: usize = 15;

/// The 4 undirected axes a row of five can lie on: vertical, horizontal,
/// and the two diagonals.
pub const AXES: [(i8, i8); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// A 0-indexed `(row, col)` pair referring to one cell. Row 0 renders at the
/// top of the board, so `(7, 7)` is the center cell `h8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, PartialOrd, Ord)]
pub struct Coord {
    row: u8,
    col: u8,
}

impl Coord {
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!((row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE);
        Self { row, col }
    }

    /// The center cell, the opening move on an empty board.
    pub fn center() -> Self {
        Self::new((BOARD_SIZE / 2) as u8, (BOARD_SIZE / 2) as u8)
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Steps `(dr, dc)` away from this cell, or `None` if that leaves the
    /// board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Coord> {
        let row = self.row as i16 + dr as i16;
        let col = self.col as i16 + dc as i16;
        if row < 0 || row >= BOARD_SIZE as i16 || col < 0 || col >= BOARD_SIZE as i16 {
            return None;
        }
        Some(Coord::new(row as u8, col as u8))
    }
}

/// Represents the state of a gomoku board: a 15x15 grid of cells, where
/// `None` is an empty cell. The search mutates the grid in place through
/// [`PlacedStone`] and restores it before returning.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<Color>; BOARD_SIZE]; BOARD_SIZE],
    stone_count: u16,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
            stone_count: 0,
        }
    }
}

impl Board {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn get(&self, coord: Coord) -> Option<Color> {
        self.cells[coord.row as usize][coord.col as usize]
    }

    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    pub fn put(&mut self, coord: Coord, color: Color) -> Result<(), BoardError> {
        let cell = &mut self.cells[coord.row as usize][coord.col as usize];
        if cell.is_some() {
            return Err(BoardError::CellOccupiedError { coord });
        }
        *cell = Some(color);
        self.stone_count += 1;
        Ok(())
    }

    pub fn remove(&mut self, coord: Coord) -> Option<Color> {
        let removed = self.cells[coord.row as usize][coord.col as usize].take();
        if removed.is_some() {
            self.stone_count -= 1;
        }
        removed
    }

    pub fn stone_count(&self) -> u16 {
        self.stone_count
    }

    /// True when no stone has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.stone_count == 0
    }

    /// True when every cell is occupied, the draw condition.
    pub fn is_full(&self) -> bool {
        self.stone_count as usize == BOARD_SIZE * BOARD_SIZE
    }

    /// All cells in row-major order.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Coord::new(row, col)))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        Self::coords().filter(move |&coord| !self.is_occupied(coord))
    }
}

/// Scoped stone placement for the search's try/undo protocol. The stone is
/// placed on construction and removed again when the guard drops, so the undo
/// runs on every exit path, including early returns.
pub struct PlacedStone<'a> {
    board: &'a mut Board,
    coord: Coord,
}

impl<'a> PlacedStone<'a> {
    pub fn place(board: &'a mut Board, coord: Coord, color: Color) -> Result<Self, BoardError> {
        board.put(coord, color)?;
        Ok(Self { board, coord })
    }
}

impl Deref for PlacedStone<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for PlacedStone<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for PlacedStone<'_> {
    fn drop(&mut self) {
        self.board.remove(self.coord);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_get_remove() {
        let mut board = Board::new();
        let coord = Coord::new(7, 7);

        assert_eq!(board.get(coord), None);
        board.put(coord, Color::Black).unwrap();
        assert_eq!(board.get(coord), Some(Color::Black));
        assert_eq!(board.stone_count(), 1);

        assert_eq!(board.remove(coord), Some(Color::Black));
        assert_eq!(board.get(coord), None);
        assert_eq!(board.stone_count(), 0);
    }

    #[test]
    fn test_put_occupied_cell() {
        let mut board = Board::new();
        let coord = Coord::new(0, 0);
        board.put(coord, Color::Black).unwrap();

        let result = board.put(coord, Color::White);
        assert!(matches!(result, Err(BoardError::CellOccupiedError { .. })));
        assert_eq!(board.get(coord), Some(Color::Black));
    }

    #[test]
    fn test_remove_empty_cell() {
        let mut board = Board::new();
        assert_eq!(board.remove(Coord::new(3, 3)), None);
        assert_eq!(board.stone_count(), 0);
    }

    #[test]
    fn test_is_empty_and_is_full() {
        let mut board = Board::new();
        assert!(board.is_empty());
        assert!(!board.is_full());

        for coord in Board::coords() {
            board.put(coord, Color::Black).unwrap();
        }
        assert!(!board.is_empty());
        assert!(board.is_full());
    }

    #[test]
    fn test_coords_cover_the_board() {
        assert_eq!(Board::coords().count(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(Board::coords().next(), Some(Coord::new(0, 0)));
        assert_eq!(Board::coords().last(), Some(Coord::new(14, 14)));
    }

    #[test]
    fn test_empty_cells() {
        let mut board = Board::new();
        assert_eq!(board.empty_cells().count(), 225);

        board.put(Coord::new(7, 7), Color::Black).unwrap();
        assert_eq!(board.empty_cells().count(), 224);
        assert!(board.empty_cells().all(|coord| !board.is_occupied(coord)));
    }

    #[test]
    fn test_offset_stays_on_the_board() {
        let center = Coord::center();
        assert_eq!(center.offset(1, -1), Some(Coord::new(8, 6)));
        assert_eq!(center.offset(0, 0), Some(center));

        let corner = Coord::new(0, 0);
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(2, 2), Some(Coord::new(2, 2)));

        let far_corner = Coord::new(14, 14);
        assert_eq!(far_corner.offset(1, 0), None);
        assert_eq!(far_corner.offset(0, 1), None);
    }

    #[test]
    fn test_placed_stone_restores_on_drop() {
        let mut board = Board::new();
        let coord = Coord::new(5, 5);

        {
            let placed = PlacedStone::place(&mut board, coord, Color::White).unwrap();
            assert_eq!(placed.get(coord), Some(Color::White));
        }

        assert_eq!(board.get(coord), None);
        assert!(board.is_empty());
    }

    #[test]
    fn test_placed_stone_restores_on_early_return() {
        fn place_and_bail(board: &mut Board, coord: Coord) -> bool {
            let placed = PlacedStone::place(board, coord, Color::Black).unwrap();
            if placed.is_occupied(coord) {
                return true;
            }
            false
        }

        let mut board = Board::new();
        let coord = Coord::new(2, 9);
        assert!(place_and_bail(&mut board, coord));
        assert_eq!(board.get(coord), None);
    }

    #[test]
    fn test_placed_stone_rejects_occupied_cell() {
        let mut board = Board::new();
        let coord = Coord::new(4, 4);
        board.put(coord, Color::Black).unwrap();

        assert!(PlacedStone::place(&mut board, coord, Color::White).is_err());
        assert_eq!(board.get(coord), Some(Color::Black));
    }

    #[test]
    fn test_center() {
        assert_eq!(Coord::center(), Coord::new(7, 7));
    }
}
