//! One-shot background search.
//!
//! Hard difficulty runs each search on a freshly spawned thread with a
//! private snapshot of the board, so the caller's loop stays responsive and a
//! crashed search cannot poison shared state. The reply travels back over an
//! mpsc channel.

use std::sync::mpsc;
use std::thread;

use log::warn;

use crate::board::color::Color;
use crate::board::{Board, Coord};

use super::{SearchError, Searcher};

/// A search job: a private snapshot of the position plus the engine's color
/// and base search depth.
pub struct SearchRequest {
    pub board: Board,
    pub ai_color: Color,
    pub depth: u8,
}

/// Runs the search on a dedicated thread and blocks for the reply.
///
/// Failure degrades in two rungs. A search that fails inside the worker is
/// replaced by a uniformly random empty cell, posted back as a normal reply.
/// A worker that cannot be spawned, or that dies without replying at all, is
/// replaced by recomputing the search synchronously on the calling thread.
pub fn search_in_worker(request: SearchRequest) -> Result<Coord, SearchError> {
    let fallback_board = request.board.clone();
    let ai_color = request.ai_color;
    let depth = request.depth;

    let (sender, receiver) = mpsc::channel();
    let spawned = thread::Builder::new().spawn(move || {
        let SearchRequest {
            mut board,
            ai_color,
            depth,
        } = request;

        let mut searcher = Searcher::new(depth);
        let reply = match searcher.search(&mut board, ai_color) {
            Ok(coord) => Ok(coord),
            Err(error) => match random_empty_cell(&board) {
                Some(coord) => {
                    warn!("worker search failed ({}), playing random cell {}", error, coord);
                    Ok(coord)
                }
                None => Err(error),
            },
        };
        let _ = sender.send(reply);
    });

    let handle = match spawned {
        Ok(handle) => handle,
        Err(error) => {
            warn!("could not spawn a search worker ({}), recomputing synchronously", error);
            return search_synchronously(fallback_board, ai_color, depth);
        }
    };

    match receiver.recv() {
        Ok(reply) => {
            let _ = handle.join();
            reply
        }
        Err(_) => {
            warn!("search worker died without replying, recomputing synchronously");
            search_synchronously(fallback_board, ai_color, depth)
        }
    }
}

// The degraded path shared by both dispatch failures: run the same search on
// the caller's thread with the snapshot taken before the spawn.
fn search_synchronously(
    mut board: Board,
    ai_color: Color,
    depth: u8,
) -> Result<Coord, SearchError> {
    Searcher::new(depth).search(&mut board, ai_color)
}

fn random_empty_cell(board: &Board) -> Option<Coord> {
    let empties: Vec<Coord> = board.empty_cells().collect();
    if empties.is_empty() {
        return None;
    }
    Some(empties[fastrand::usize(..empties.len())])
}
