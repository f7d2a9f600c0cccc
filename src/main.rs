use crate::cli::commands::Command;
use crate::cli::Gomoku;
use structopt::StructOpt;

mod cli;

fn main() {
    env_logger::init();
    Gomoku::from_args().execute();
}
