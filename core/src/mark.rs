use serde::{Deserialize, Serialize};

/// One of the two players.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub const fn opponent(self) -> Self {
        use Player::*;
        match self {
            X => O,
            O => X,
        }
    }

    pub const fn glyph(self) -> &'static str {
        use Player::*;
        match self {
            X => "X",
            O => "O",
        }
    }
}

impl core::fmt::Display for Player {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Contents of a single board square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Square {
    Empty,
    Marked(Player),
}

impl Square {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::Marked(player) => player.glyph(),
        }
    }
}

impl Default for Square {
    fn default() -> Self {
        Self::Empty
    }
}
