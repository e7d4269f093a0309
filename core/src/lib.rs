#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use alloc::vec::Vec;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use tile::*;
pub use types::*;

mod engine;
mod error;
mod game;
mod generator;
mod tile;
mod types;

pub const DEFAULT_GRID_SIZE: GridSize = GridSize::new(20, 20);
pub const DEFAULT_MINE_PROBABILITY_PERCENT: u8 = 20;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub grid_size: GridSize,
    pub mine_probability_percent: u8,
}

impl GameConfig {
    pub const fn new_unchecked(grid_size: GridSize, mine_probability_percent: u8) -> Self {
        Self {
            grid_size,
            mine_probability_percent,
        }
    }

    pub fn new(grid_size: GridSize, mine_probability_percent: u8) -> Result<Self> {
        let config = Self::new_unchecked(grid_size, mine_probability_percent);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.grid_size.is_valid() {
            return Err(GameError::InvalidGridSize);
        }
        if self.mine_probability_percent > 100 {
            return Err(GameError::InvalidMineProbability);
        }
        Ok(())
    }

    pub const fn total_squares(&self) -> SquareCount {
        self.grid_size.total_squares()
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_GRID_SIZE, DEFAULT_MINE_PROBABILITY_PERCENT)
    }
}

/// Sparse board: only mined or clicked squares have an entry, anything else is a
/// hidden safe square.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "BoardRepr", try_from = "BoardRepr")]
pub struct Board {
    size: GridSize,
    squares: HashMap<Location, SquareState>,
    mine_count: SquareCount,
}

impl Board {
    pub fn empty(size: GridSize) -> Self {
        Self {
            size,
            squares: HashMap::new(),
            mine_count: 0,
        }
    }

    pub fn from_mine_locations(size: GridSize, mines: &[Location]) -> Result<Self> {
        let mut board = Self::empty(size);
        for &location in mines {
            board.place_mine(board.validate_location(location)?);
        }
        Ok(board)
    }

    pub fn validate_location(&self, location: Location) -> Result<Location> {
        if self.size.contains(location) {
            Ok(location)
        } else {
            Err(GameError::InvalidLocation)
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn mine_count(&self) -> SquareCount {
        self.mine_count
    }

    /// Number of stored entries, mines plus clicked safe squares.
    pub fn entry_count(&self) -> usize {
        self.squares.len()
    }

    pub fn square(&self, location: Location) -> SquareState {
        self.squares.get(&location).copied().unwrap_or_default()
    }

    pub fn contains_mine(&self, location: Location) -> bool {
        self.squares.get(&location).is_some_and(|square| square.is_bomb)
    }

    pub fn is_revealed(&self, location: Location) -> bool {
        self.squares.get(&location).is_some_and(|square| square.is_clicked)
    }

    pub fn adjacent_mine_count(&self, location: Location) -> u8 {
        // at most 8 neighbors, fits
        location
            .neighbors()
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }

    pub fn iter(&self) -> impl Iterator<Item = (Location, SquareState)> + '_ {
        self.squares.iter().map(|(&location, &square)| (location, square))
    }

    pub(crate) fn place_mine(&mut self, location: Location) {
        let previous = self.squares.insert(location, SquareState::MINE);
        if !previous.is_some_and(|square| square.is_bomb) {
            self.mine_count += 1;
        }
    }

    /// Marks the square as clicked, keeping its mine flag, and returns the new state.
    pub(crate) fn mark_clicked(&mut self, location: Location) -> SquareState {
        let square = self.squares.entry(location).or_default();
        *square = square.clicked();
        *square
    }
}

#[derive(Serialize, Deserialize)]
struct BoardRepr {
    size: GridSize,
    squares: Vec<(Location, SquareState)>,
}

impl From<Board> for BoardRepr {
    fn from(board: Board) -> Self {
        let mut squares: Vec<_> = board.squares.into_iter().collect();
        squares.sort_unstable_by_key(|&(location, _)| location);
        Self {
            size: board.size,
            squares,
        }
    }
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        if !repr.size.is_valid() {
            return Err(GameError::InvalidGridSize);
        }
        let mut board = Self::empty(repr.size);
        for (location, square) in repr.squares {
            let location = board.validate_location(location)?;
            board.squares.insert(location, square);
        }
        board.mine_count = board
            .squares
            .values()
            .filter(|square| square.is_bomb)
            .count() as SquareCount;
        Ok(board)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
        }
    }
}
