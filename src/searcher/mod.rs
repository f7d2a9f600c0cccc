use crate::board::color::Color;
use crate::board::{Board, Coord, PlacedStone};
use crate::evaluate::{self, WIN_SCORE};
use crate::move_generator::{all_empty_cells, generate_candidates};
use log::debug;
use thiserror::Error;

pub mod worker;

// Forward pruning tiers. Candidates scoring above DEEPEN_SCORE_THRESHOLD are
// searched one ply deeper than the base depth, candidates above
// RECURSE_SCORE_THRESHOLD are searched at the base depth, and the rest keep
// their immediate cell score without recursing.
pub const DEEPEN_SCORE_THRESHOLD: i32 = 500;
pub const RECURSE_SCORE_THRESHOLD: i32 = 100;

pub struct Searcher {
    search_depth: u8,
    searched_position_count: usize,
    termination_count: usize,
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("no available moves")]
    NoAvailableMoves,
}

impl Searcher {
    pub fn new(depth: u8) -> Self {
        Self {
            search_depth: depth,
            searched_position_count: 0,
            termination_count: 0,
        }
    }

    pub fn searched_position_count(&self) -> usize {
        self.searched_position_count
    }

    pub fn termination_count(&self) -> usize {
        self.termination_count
    }

    /// Selects the best cell for `ai_color` to place a stone on. The board is
    /// mutated during the search and restored before returning. On an empty
    /// board the center cell is returned without searching. A candidate that
    /// completes a row of five is returned as soon as it is found.
    pub fn search(&mut self, board: &mut Board, ai_color: Color) -> Result<Coord, SearchError> {
        self.searched_position_count = 0;
        self.termination_count = 0;

        if board.is_empty() {
            return Ok(Coord::center());
        }

        let human_color = ai_color.opposite();
        let mut candidates = generate_candidates(board);
        if candidates.is_empty() {
            candidates = all_empty_cells(board);
        }
        if candidates.is_empty() {
            return Err(SearchError::NoAvailableMoves);
        }

        let mut best_score = i32::MIN;
        let mut best_move = None;

        for &candidate in candidates.iter() {
            let mut placed = PlacedStone::place(board, candidate, ai_color).unwrap();

            if evaluate::winning_move(&placed, candidate, ai_color) {
                debug!("search: {} completes a row of five", candidate);
                return Ok(candidate);
            }

            let cell_score = evaluate::evaluate_cell(&placed, candidate, ai_color);
            let score = if cell_score > DEEPEN_SCORE_THRESHOLD {
                self.alpha_beta_min(
                    self.search_depth + 1,
                    &mut placed,
                    i32::MIN,
                    i32::MAX,
                    ai_color,
                    human_color,
                    candidate,
                )
            } else if cell_score > RECURSE_SCORE_THRESHOLD {
                self.alpha_beta_min(
                    self.search_depth,
                    &mut placed,
                    i32::MIN,
                    i32::MAX,
                    ai_color,
                    human_color,
                    candidate,
                )
            } else {
                cell_score
            };
            debug!("search: candidate {} scored {}", candidate, score);

            if score > best_score {
                best_score = score;
                best_move = Some(candidate);
            }
        }

        let best_move = best_move.ok_or(SearchError::NoAvailableMoves)?;
        debug!(
            "search: selected {} with score {} ({} positions searched, {} cutoffs)",
            best_move, best_score, self.searched_position_count, self.termination_count
        );
        Ok(best_move)
    }

    /// Scores the position after an engine stone landed on `last_move`, with
    /// the human to reply. Minimizes over the human's candidate replies.
    fn alpha_beta_min(
        &mut self,
        depth: u8,
        board: &mut Board,
        alpha: i32,
        mut beta: i32,
        ai_color: Color,
        human_color: Color,
        last_move: Coord,
    ) -> i32 {
        self.searched_position_count += 1;

        if evaluate::winning_move(board, last_move, ai_color) {
            return WIN_SCORE;
        }
        if depth == 0 {
            return evaluate::board_potential(board, ai_color);
        }
        if board.is_full() {
            return 0;
        }

        let candidates = generate_candidates(board);
        let mut min_eval = i32::MAX;

        for &candidate in candidates.iter() {
            let mut placed = PlacedStone::place(board, candidate, human_color).unwrap();
            let score = self.alpha_beta_max(
                depth - 1,
                &mut placed,
                alpha,
                beta,
                ai_color,
                human_color,
                candidate,
            );

            if score < min_eval {
                min_eval = score;
            }
            if score < beta {
                beta = score;
            }
            if beta <= alpha {
                self.termination_count += 1;
                break;
            }
        }

        if min_eval == i32::MAX {
            // no candidate replies, score the board as it stands
            return evaluate::board_potential(board, ai_color);
        }
        min_eval
    }

    /// Scores the position after a human stone landed on `last_move`, with
    /// the engine to reply. Maximizes over the engine's candidate replies.
    fn alpha_beta_max(
        &mut self,
        depth: u8,
        board: &mut Board,
        mut alpha: i32,
        beta: i32,
        ai_color: Color,
        human_color: Color,
        last_move: Coord,
    ) -> i32 {
        self.searched_position_count += 1;

        if evaluate::winning_move(board, last_move, human_color) {
            return -WIN_SCORE;
        }
        if depth == 0 {
            return evaluate::board_potential(board, ai_color);
        }
        if board.is_full() {
            return 0;
        }

        let candidates = generate_candidates(board);
        let mut max_eval = i32::MIN;

        for &candidate in candidates.iter() {
            let mut placed = PlacedStone::place(board, candidate, ai_color).unwrap();
            let score = self.alpha_beta_min(
                depth - 1,
                &mut placed,
                alpha,
                beta,
                ai_color,
                human_color,
                candidate,
            );

            if score > max_eval {
                max_eval = score;
            }
            if score > alpha {
                alpha = score;
            }
            if beta <= alpha {
                self.termination_count += 1;
                break;
            }
        }

        if max_eval == i32::MIN {
            // no candidate replies, score the board as it stands
            return evaluate::board_potential(board, ai_color);
        }
        max_eval
    }
}
