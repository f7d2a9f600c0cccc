//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{best_move::BestMoveArgs, watch::WatchArgs, Command};

#[derive(StructOpt)]
#[structopt(
    name = "gomoku",
    about = "A five-in-a-row engine with minimax search and selectable difficulty"
)]
pub enum Gomoku {
    #[structopt(
        name = "best-move",
        about = "Determine the engine's move from a given position, provided in position notation with `--position` (default: the empty board). The playing strength can be set with `--difficulty` (default: hard) and the color to move with `--color` (default: black)."
    )]
    BestMove(BestMoveArgs),
    #[structopt(
        name = "watch",
        about = "Watch the engine play against itself. The difficulty of each side can be set with `--black` and `--white` (default: hard), and the delay between moves with `--delay` (default: 500 milliseconds)."
    )]
    Watch(WatchArgs),
}

impl Command for Gomoku {
    fn execute(self) {
        match self {
            Self::BestMove(cmd) => cmd.execute(),
            Self::Watch(cmd) => cmd.execute(),
        }
    }
}
