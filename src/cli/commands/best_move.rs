//! Best move command - determine the engine's move from a position.

use gomoku::board::color::Color;
use gomoku::board::notation::EMPTY_POSITION;
use gomoku::board::Board;
use gomoku::strategy::{self, Difficulty};
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct BestMoveArgs {
    #[structopt(long = "position", default_value = EMPTY_POSITION)]
    pub position: Board,
    #[structopt(short, long, default_value = "hard")]
    pub difficulty: Difficulty,
    #[structopt(short, long, default_value = "black")]
    pub color: Color,
}

impl Command for BestMoveArgs {
    fn execute(self) {
        match strategy::select_move(&self.position, self.difficulty, self.color) {
            Ok(best_move) => println!("{}", best_move),
            Err(err) => eprintln!("Failed to determine a move: {}", err),
        }
    }
}
