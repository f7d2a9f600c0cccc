//! Difficulty levels and move selection.

use std::fmt;
use std::str::FromStr;

use crate::board::color::Color;
use crate::board::{Board, Coord};
use crate::evaluate;
use crate::searcher::worker::{search_in_worker, SearchRequest};
use crate::searcher::SearchError;

/// Base search depth used by the hard difficulty.
pub const HARD_SEARCH_DEPTH: u8 = 3;

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let difficulty_str = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", difficulty_str)
    }
}

// used for parsing cli args
type ParseError = &'static str;
impl FromStr for Difficulty {
    type Err = ParseError;
    fn from_str(difficulty: &str) -> Result<Self, Self::Err> {
        match difficulty {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err("invalid difficulty; options are: easy, medium, hard"),
        }
    }
}

/// Selects the next cell for `color` to play at the given difficulty. Easy
/// plays a uniformly random empty cell. Medium greedily takes the highest
/// scoring cell, breaking ties at random. Hard runs the minimax search on a
/// worker thread.
pub fn select_move(
    board: &Board,
    difficulty: Difficulty,
    color: Color,
) -> Result<Coord, SearchError> {
    match difficulty {
        Difficulty::Easy => random_move(board),
        Difficulty::Medium => greedy_move(board, color),
        Difficulty::Hard => searched_move(board, color),
    }
}

fn random_move(board: &Board) -> Result<Coord, SearchError> {
    let empties: Vec<Coord> = board.empty_cells().collect();
    if empties.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    Ok(empties[fastrand::usize(..empties.len())])
}

fn greedy_move(board: &Board, color: Color) -> Result<Coord, SearchError> {
    let mut best_score = i32::MIN;
    let mut best_moves: Vec<Coord> = Vec::new();

    for coord in board.empty_cells() {
        let score = evaluate::evaluate_cell(board, coord, color);
        if score > best_score {
            best_score = score;
            best_moves.clear();
            best_moves.push(coord);
        } else if score == best_score {
            best_moves.push(coord);
        }
    }

    if best_moves.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }
    Ok(best_moves[fastrand::usize(..best_moves.len())])
}

fn searched_move(board: &Board, color: Color) -> Result<Coord, SearchError> {
    search_in_worker(SearchRequest {
        board: board.clone(),
        ai_color: color,
        depth: HARD_SEARCH_DEPTH,
    })
}
