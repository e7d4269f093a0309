use serde::{Deserialize, Serialize};

/// Runtime state of a single square stored in the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SquareState {
    pub is_clicked: bool,
    pub is_bomb: bool,
}

impl SquareState {
    pub const MINE: Self = Self {
        is_clicked: false,
        is_bomb: true,
    };

    pub const fn clicked(self) -> Self {
        Self {
            is_clicked: true,
            ..self
        }
    }
}

/// What a host should draw for a square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SquareView {
    Hidden,
    /// Revealed with no adjacent mines
    Empty,
    Count(u8),
    Mine,
}

impl SquareView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for SquareView {
    fn default() -> Self {
        Self::Hidden
    }
}
