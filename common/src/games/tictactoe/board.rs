use super::error::MoveError;
use super::types::{BOARD_SIZE, Mark, WinPattern};
use super::win_detector::{find_winning_pattern, is_winner};

/// 3x3 grid stored row-major, indices 0..9:
///
/// ```text
/// 0 | 1 | 2
/// 3 | 4 | 5
/// 6 | 7 | 8
/// ```
///
/// The board only manages cells. Turn order belongs to the game state.
/// It is `Copy`, so the bot evaluates hypothetical moves on a copy and the
/// live board is never touched during a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Mark; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Mark; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Mark; BOARD_SIZE] {
        &self.cells
    }

    pub fn cell_at(&self, index: usize) -> Result<Mark, MoveError> {
        self.cells
            .get(index)
            .copied()
            .ok_or(MoveError::OutOfRange(index))
    }

    pub fn is_empty_at(&self, index: usize) -> bool {
        self.cell_at(index) == Ok(Mark::Empty)
    }

    pub fn place(&mut self, index: usize, mark: Mark) -> Result<(), MoveError> {
        if mark == Mark::Empty {
            return Err(MoveError::EmptyMark);
        }
        if self.cell_at(index)? != Mark::Empty {
            return Err(MoveError::CellOccupied(index));
        }
        self.cells[index] = mark;
        Ok(())
    }

    /// Copy of the board with `mark` at `index`, or `None` if the move is illegal.
    pub fn with_move(&self, index: usize, mark: Mark) -> Option<Board> {
        let mut next = *self;
        next.place(index, mark).ok()?;
        Some(next)
    }

    pub fn winner_for(&self, mark: Mark) -> bool {
        is_winner(&self.cells, mark)
    }

    pub fn winning_pattern(&self, mark: Mark) -> Option<WinPattern> {
        find_winning_pattern(&self.cells, mark)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }

    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Mark::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == mark).count()
    }

    pub fn reset(&mut self) {
        self.cells = [Mark::Empty; BOARD_SIZE];
    }
}
