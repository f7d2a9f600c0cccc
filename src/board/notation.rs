//! Text notation for board positions: 15 rows of `[.xo]` cells separated by
//! `/`, top row first. `x` is a black stone, `o` is a white stone, `.` is an
//! empty cell.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::color::Color;
use super::{Board, Coord, BOARD_SIZE};

/// The empty board, the default starting point for cli commands.
pub const EMPTY_POSITION: &str = "...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............\
                                  /...............";

static POSITION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new("^[.xo]{15}(/[.xo]{15}){14}$").expect("POSITION_RE regex should be valid")
});

#[derive(Error, Debug)]
pub enum ParseBoardError {
    #[error("invalid position notation: {input:?}")]
    InvalidNotation { input: String },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(notation: &str) -> Result<Self, Self::Err> {
        if !POSITION_RE.is_match(notation) {
            return Err(ParseBoardError::InvalidNotation {
                input: notation.to_string(),
            });
        }

        let mut board = Board::new();
        for (row, row_str) in notation.split('/').enumerate() {
            for (col, cell_char) in row_str.chars().enumerate() {
                if let Some(color) = Color::from_char(cell_char) {
                    board.put(Coord::new(row as u8, col as u8), color).unwrap();
                }
            }
        }
        Ok(board)
    }
}

impl Board {
    /// Renders the position in the same notation that `FromStr` accepts.
    pub fn to_notation(&self) -> String {
        let mut rows = Vec::with_capacity(BOARD_SIZE);
        for row in 0..BOARD_SIZE as u8 {
            let mut row_str = String::with_capacity(BOARD_SIZE);
            for col in 0..BOARD_SIZE as u8 {
                row_str.push(match self.get(Coord::new(row, col)) {
                    Some(color) => color.to_char(),
                    None => '.',
                });
            }
            rows.push(row_str);
        }
        rows.join("/")
    }
}
