pub mod board;
pub mod evaluate;
pub mod game;
pub mod move_generator;
pub mod searcher;
pub mod strategy;
