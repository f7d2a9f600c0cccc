//! Candidate move generation.

use rustc_hash::FxHashSet;
use smallvec::{smallvec, SmallVec};

use crate::board::{Board, Coord};

/// Chebyshev distance within which empty cells next to stones are considered
/// candidate moves.
pub const CANDIDATE_RADIUS: i8 = 2;

/// A list of candidate cells that is optimized for small sizes.
pub type CandidateList = SmallVec<[Coord; 32]>;

/// Generates the candidate cells for the next move: every empty cell within
/// Chebyshev distance [`CANDIDATE_RADIUS`] of an occupied cell. Cells are
/// discovered by scanning occupied cells in row-major order, so the result
/// order is deterministic for a given position. Returns an empty list when no
/// stone has been placed yet.
pub fn generate_candidates(board: &Board) -> CandidateList {
    let mut candidates: CandidateList = smallvec![];
    let mut visited: FxHashSet<Coord> = FxHashSet::default();

    for coord in Board::coords() {
        if !board.is_occupied(coord) {
            continue;
        }

        for dr in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
            for dc in -CANDIDATE_RADIUS..=CANDIDATE_RADIUS {
                let neighbor = match coord.offset(dr, dc) {
                    Some(neighbor) => neighbor,
                    None => continue,
                };
                if board.is_occupied(neighbor) || !visited.insert(neighbor) {
                    continue;
                }
                candidates.push(neighbor);
            }
        }
    }

    candidates
}

/// Every empty cell in row-major order. The fallback candidate list when the
/// neighborhood scan comes up empty.
pub fn all_empty_cells(board: &Board) -> CandidateList {
    board.empty_cells().collect()
}
