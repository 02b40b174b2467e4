use thiserror::Error;

/// Reasons a move is refused. None of these mutate the board.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    #[error("Cell index {0} is outside the board")]
    OutOfRange(usize),

    #[error("Cell {0} is already marked")]
    CellOccupied(usize),

    #[error("Not your turn")]
    InvalidTurn,

    #[error("Cannot place an empty mark")]
    EmptyMark,

    #[error("No empty cells left")]
    NoMovesLeft,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown difficulty '{0}', expected easy, medium or hard")]
pub struct ParseDifficultyError(pub String);
