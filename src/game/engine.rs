use crate::board::color::Color;
use crate::board::error::BoardError;
use crate::board::{Board, Coord};
use crate::evaluate::{self, GameEnding};
use crate::searcher::SearchError;
use crate::strategy::{self, Difficulty};
use thiserror::Error;

/// Core engine state and configuration
#[derive(Clone)]
pub struct EngineConfig {
    pub difficulty: Difficulty,
    pub starting_position: Board,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Hard,
            starting_position: Board::default(),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid move")]
    InvalidMove,
    #[error("Board error: {error:?}")]
    BoardError { error: BoardError },
    #[error("Search error: {error:?}")]
    SearchError { error: SearchError },
}

/// The main gomoku engine: tracks the board, whose turn it is, and the move
/// history, and plays engine moves at a configured difficulty.
pub struct Engine {
    board: Board,
    current_turn: Color,
    move_history: Vec<Coord>,
    ending: Option<GameEnding>,
    difficulty: Difficulty,
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_config(EngineConfig::default())
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        // Black opens, so the stone count decides whose turn a loaded
        // position is.
        let current_turn = if config.starting_position.stone_count() % 2 == 0 {
            Color::Black
        } else {
            Color::White
        };

        Self {
            board: config.starting_position,
            current_turn,
            move_history: Vec::new(),
            ending: None,
            difficulty: config.difficulty,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Color {
        self.current_turn
    }

    pub fn last_move(&self) -> Option<Coord> {
        self.move_history.last().copied()
    }

    pub fn check_game_over(&self) -> Option<GameEnding> {
        self.ending
    }

    /// Places a stone for the player whose turn it is. Rejects moves once the
    /// game has ended. The turn passes to the opponent even when the move
    /// ends the game, so `undo` restores the mover's turn uniformly.
    pub fn apply_move(&mut self, coord: Coord) -> Result<(), EngineError> {
        if self.ending.is_some() {
            return Err(EngineError::InvalidMove);
        }

        let mover = self.current_turn;
        self.board
            .put(coord, mover)
            .map_err(|error| EngineError::BoardError { error })?;

        self.move_history.push(coord);
        self.ending = evaluate::game_ending(&self.board, coord, mover);
        self.current_turn = mover.opposite();
        Ok(())
    }

    /// Picks and plays a move for the current turn at the engine's
    /// configured difficulty.
    pub fn make_engine_move(&mut self) -> Result<Coord, EngineError> {
        self.make_engine_move_with(self.difficulty)
    }

    /// Picks and plays a move for the current turn at the given difficulty.
    pub fn make_engine_move_with(&mut self, difficulty: Difficulty) -> Result<Coord, EngineError> {
        if self.ending.is_some() {
            return Err(EngineError::InvalidMove);
        }

        let coord = strategy::select_move(&self.board, difficulty, self.current_turn)
            .map_err(|error| EngineError::SearchError { error })?;
        self.apply_move(coord)?;
        Ok(coord)
    }

    /// Takes back the most recent move, restoring the mover's turn and
    /// clearing any recorded ending.
    pub fn undo(&mut self) -> Option<Coord> {
        let coord = self.move_history.pop()?;
        self.board.remove(coord);
        self.current_turn = self.current_turn.opposite();
        self.ending = None;
        Some(coord)
    }
}
