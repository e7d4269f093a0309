use super::*;
use rand::Rng;

/// Rolls every square of the grid independently: a square holds a mine when a uniform
/// draw in `0..100` lands below the configured percentage.
pub fn generate<R: Rng + ?Sized>(config: GameConfig, rng: &mut R) -> Board {
    let mut board = Board::empty(config.grid_size);

    for location in config.grid_size.locations() {
        let roll: u8 = rng.random_range(0..100);
        if roll < config.mine_probability_percent {
            board.place_mine(location);
        }
    }

    log::debug!(
        "Generated {} mines on {} squares ({}% chance)",
        board.mine_count(),
        config.total_squares(),
        config.mine_probability_percent
    );
    board
}

/// Seeded, reproducible variant of [`generate`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Board {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        log::debug!("Generating board with seed {}", self.seed);
        let mut rng = SmallRng::seed_from_u64(self.seed);
        generate(config, &mut rng)
    }
}
