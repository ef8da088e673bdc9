use crate::{GameError, Result};

/// Index of a board square, 0-8, row-major over the 3x3 grid.
pub type CellIx = u8;

/// Squares per board side.
pub const GRID_SIZE: CellIx = 3;

/// Total squares on the board.
pub const CELL_COUNT: CellIx = GRID_SIZE * GRID_SIZE;

/// Row-major index for `(row, col)`.
pub const fn to_cell(row: CellIx, col: CellIx) -> CellIx {
    row * GRID_SIZE + col
}

/// Splits a row-major index back into `(row, col)`.
pub const fn to_row_col(cell: CellIx) -> (CellIx, CellIx) {
    (cell / GRID_SIZE, cell % GRID_SIZE)
}

pub const fn validate_cell(cell: CellIx) -> Result<CellIx> {
    if cell < CELL_COUNT {
        Ok(cell)
    } else {
        Err(GameError::InvalidCell)
    }
}
