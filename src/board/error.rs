use thiserror::Error;

use super::Coord;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("cannot put a stone on a cell that is already occupied: {coord}")]
    CellOccupiedError { coord: Coord },
}
