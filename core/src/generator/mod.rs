use crate::*;
use alloc::vec::Vec;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Board;
}

/// Places mines exactly where asked, anything off the grid is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedBoardGenerator {
    mines: Vec<Location>,
}

impl FixedBoardGenerator {
    pub fn new(mines: impl IntoIterator<Item = Location>) -> Self {
        Self {
            mines: mines.into_iter().collect(),
        }
    }
}

impl BoardGenerator for FixedBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        let mut board = Board::empty(config.grid_size);
        for location in self.mines {
            match board.validate_location(location) {
                Ok(location) => board.place_mine(location),
                Err(_) => log::warn!("Dropping mine outside of the grid at {:?}", location),
            }
        }
        board
    }
}
