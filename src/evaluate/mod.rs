use crate::board::color::Color;
use crate::board::{Board, Coord, AXES};

// Pattern scores, checked in this order. The win and block-win scores are
// significantly larger than any sum of lesser pattern scores, so the search
// always prefers completing (or denying) a row of five over positional gains.
pub const WIN_SCORE: i32 = 10000;
pub const BLOCK_WIN_SCORE: i32 = 5000;
pub const OPEN_THREE_SCORE: i32 = 1000;
pub const BLOCK_OPEN_THREE_SCORE: i32 = 800;
pub const OPEN_TWO_SCORE: i32 = 400;
pub const BLOCK_OPEN_TWO_SCORE: i32 = 300;
const STONE_WEIGHT: i32 = 10;
const OPEN_END_WEIGHT: i32 = 5;

#[derive(Debug, Clone, Copy)]
pub enum GameEnding {
    Win(Color),
    Draw,
}

/// Returns the game ending state if the game has ended, otherwise returns
/// None. `last_move` must be the cell the most recent stone was placed on.
#[inline(always)]
pub fn game_ending(board: &Board, last_move: Coord, last_player: Color) -> Option<GameEnding> {
    if winning_move(board, last_move, last_player) {
        return Some(GameEnding::Win(last_player));
    }

    if board.is_full() {
        return Some(GameEnding::Draw);
    }

    None
}

/// True when the stone on `coord` is part of a contiguous row of five or more
/// `color` stones. Walks up to 4 cells out in both directions of each axis,
/// so rows longer than five still count.
#[inline(always)]
pub fn winning_move(board: &Board, coord: Coord, color: Color) -> bool {
    AXES.iter().any(|&(dr, dc)| {
        let mut count = 1;
        for &dir in &[1i8, -1] {
            for step in 1..5i8 {
                match coord.offset(dr * dir * step, dc * dir * step) {
                    Some(neighbor) if board.get(neighbor) == Some(color) => count += 1,
                    _ => break,
                }
            }
        }
        count >= 5
    })
}

/// Scores placing a `color` stone on the empty cell `coord` by summing the
/// pattern score along each of the four axes.
#[inline(always)]
pub fn evaluate_cell(board: &Board, coord: Coord, color: Color) -> i32 {
    AXES.iter()
        .map(|&axis| evaluate_direction(board, coord, axis, color))
        .sum()
}

/// Walks up to 4 cells out in both directions of one axis, tallying stones of
/// each color seen. An empty cell ends the walk on that side and counts as an
/// open end; the board edge ends the walk without one. Opponent stones are
/// tallied but do not end the walk.
#[inline(always)]
fn evaluate_direction(board: &Board, coord: Coord, axis: (i8, i8), color: Color) -> i32 {
    let (dr, dc) = axis;
    let mut own: i32 = 0;
    let mut theirs: i32 = 0;
    let mut open_ends: i32 = 0;

    for &dir in &[1i8, -1] {
        for step in 1..5i8 {
            let neighbor = match coord.offset(dr * dir * step, dc * dir * step) {
                Some(neighbor) => neighbor,
                None => break,
            };
            match board.get(neighbor) {
                Some(c) if c == color => own += 1,
                Some(_) => theirs += 1,
                None => {
                    open_ends += 1;
                    break;
                }
            }
        }
    }

    if own >= 4 {
        return WIN_SCORE;
    }
    if theirs >= 4 {
        return BLOCK_WIN_SCORE;
    }
    if own == 3 && open_ends == 2 {
        return OPEN_THREE_SCORE;
    }
    if theirs == 3 && open_ends == 2 {
        return BLOCK_OPEN_THREE_SCORE;
    }
    if own == 2 && open_ends == 2 {
        return OPEN_TWO_SCORE;
    }
    if theirs == 2 && open_ends == 2 {
        return BLOCK_OPEN_TWO_SCORE;
    }
    own * STONE_WEIGHT + open_ends * OPEN_END_WEIGHT
}

/// Scores the whole position for `ai_color` by weighing both sides' placement
/// prospects over every empty cell. Positive favors `ai_color`.
#[inline(always)]
pub fn board_potential(board: &Board, ai_color: Color) -> i32 {
    let human_color = ai_color.opposite();
    let mut ai_total: i32 = 0;
    let mut human_total: i32 = 0;

    for coord in board.empty_cells() {
        ai_total += evaluate_cell(board, coord, ai_color);
        human_total += evaluate_cell(board, coord, human_color);
    }

    // 0.5 and 0.3 weightings, kept in integer arithmetic
    (ai_total * 5 - human_total * 3) / 10
}
