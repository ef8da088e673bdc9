use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 8 lines that end a game: 3 rows, 3 columns, 2 diagonals.
///
/// The scan in [`GameEngine::place`] visits these in declared order and
/// stops at the first completed line.
pub const WIN_LINES: [[CellIx; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameState {
    InProgress,
    Won(Player),
    Tied,
}

impl GameState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won(_) | Self::Tied)
    }

    pub const fn winner(self) -> Option<Player> {
        match self {
            Self::Won(player) => Some(player),
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::InProgress
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won,
    Tied,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won => true,
            Tied => true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEngine {
    board: [Square; CELL_COUNT as usize],
    turn: Player,
    state: GameState,
    move_count: Saturating<u8>,
    winning_line: Option<[CellIx; 3]>,
}

impl GameEngine {
    pub fn new() -> Self {
        Self {
            board: [Square::Empty; CELL_COUNT as usize],
            turn: Player::X,
            state: Default::default(),
            move_count: Saturating(0),
            winning_line: None,
        }
    }

    /// Clears the board and hands the opening move back to `X`.
    /// Unconditional, also from finished games.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    /// The line that ended the game, if it ended with a win.
    pub fn winning_line(&self) -> Option<[CellIx; 3]> {
        self.winning_line
    }

    pub fn moves_made(&self) -> u8 {
        self.move_count.0
    }

    pub fn square_at(&self, cell: CellIx) -> Square {
        self.board[cell as usize]
    }

    pub fn board(&self) -> &[Square; CELL_COUNT as usize] {
        &self.board
    }

    pub fn can_place_at(&self, cell: CellIx) -> bool {
        if self.state.is_finished() {
            return false;
        }

        matches!(validate_cell(cell), Ok(cell) if self.board[cell as usize].is_empty())
    }

    /// Places the mark of the player to move on `cell`.
    ///
    /// An occupied square is `Ok(NoChange)`; an accepted move flips the
    /// turn, also when it ends the game.
    pub fn place(&mut self, cell: CellIx) -> Result<MoveOutcome> {
        use MoveOutcome::*;

        let cell = validate_cell(cell)?;
        self.check_not_finished()?;

        if !self.board[cell as usize].is_empty() {
            return Ok(NoChange);
        }

        let mover = self.turn;
        self.board[cell as usize] = Square::Marked(mover);
        self.move_count += 1;
        self.turn = mover.opponent();

        if let Some(line) = self.completed_line() {
            self.winning_line = Some(line);
            self.state = GameState::Won(mover);
            log::debug!("game over: {} wins on {:?}", mover, line);
            Ok(Won)
        } else if self.move_count.0 >= CELL_COUNT {
            self.state = GameState::Tied;
            log::debug!("game over: tie");
            Ok(Tied)
        } else {
            Ok(Placed)
        }
    }

    /// First line in [`WIN_LINES`] order whose three squares hold the
    /// same non-empty mark.
    fn completed_line(&self) -> Option<[CellIx; 3]> {
        WIN_LINES.into_iter().find(|&[a, b, c]| {
            let first = self.board[a as usize];
            !first.is_empty()
                && first == self.board[b as usize]
                && first == self.board[c as usize]
        })
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
