use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Grid width and height must be positive")]
    InvalidGridSize,
    #[error("Mine probability must be a percentage between 0 and 100")]
    InvalidMineProbability,
    #[error("Location is outside of the grid")]
    InvalidLocation,
    #[error("Game state does not match the board")]
    InconsistentSession,
}

pub type Result<T> = core::result::Result<T, GameError>;
