//! Watch command - watch the engine play against itself.

use std::thread::sleep;
use std::time::{Duration, Instant};

use gomoku::board::color::Color;
use gomoku::evaluate::GameEnding;
use gomoku::game::engine::Engine;
use gomoku::strategy::Difficulty;
use structopt::StructOpt;
use termion::clear;

use super::Command;

#[derive(StructOpt)]
pub struct WatchArgs {
    #[structopt(
        long = "black",
        default_value = "hard",
        help = "Difficulty for the black player"
    )]
    pub black: Difficulty,
    #[structopt(
        long = "white",
        default_value = "hard",
        help = "Difficulty for the white player"
    )]
    pub white: Difficulty,
    #[structopt(
        long = "delay",
        default_value = "500",
        help = "Delay between moves in milliseconds"
    )]
    pub delay_ms: u64,
}

impl Command for WatchArgs {
    fn execute(self) {
        let mut engine = Engine::new();

        println!("{}", clear::All);

        loop {
            sleep(Duration::from_millis(self.delay_ms));

            match engine.check_game_over() {
                Some(GameEnding::Win(color)) => {
                    println!("{} wins!", color);
                    break;
                }
                Some(GameEnding::Draw) => {
                    println!("draw!");
                    break;
                }
                None => (),
            }

            let current_turn = engine.current_turn();
            let difficulty = match current_turn {
                Color::Black => self.black,
                Color::White => self.white,
            };

            let started_at = Instant::now();
            match engine.make_engine_move_with(difficulty) {
                Ok(best_move) => {
                    println!("{}", clear::All);
                    println!("{}", engine.board());
                    println!("* Turn: {} ({})", current_turn, difficulty);
                    println!("* Move: {} ({:?})", best_move, started_at.elapsed());
                    println!("* Stones: {}", engine.board().stone_count());
                }
                Err(error) => {
                    println!("error: {}", error);
                    break;
                }
            }
        }
    }
}
