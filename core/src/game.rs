use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::*;

/// Notifications sent to subscribers, once per transition.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// First safe square revealed
    Started,
    /// A mine was revealed, the game is over
    MineHit(Location),
    /// A new board replaced the previous one
    Restarted,
}

type Observer = Box<dyn FnMut(&GameEvent)>;

/// Owns the current session and regenerates it on restart.
pub struct Game {
    config: GameConfig,
    seed: u64,
    rng: SmallRng,
    session: Session,
    observers: Vec<Observer>,
}

impl Game {
    /// Starts a game seeded from the thread-local generator.
    #[cfg(feature = "std")]
    pub fn new(config: GameConfig) -> Result<Self> {
        use rand::Rng;
        Self::with_seed(config, rand::rng().random())
    }

    pub fn with_seed(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        log::debug!("New game {:?}, seed: {}", config, seed);
        let mut rng = SmallRng::seed_from_u64(seed);
        let session = Session::new(generate(config, &mut rng));
        Ok(Self {
            config,
            seed,
            rng,
            session,
            observers: Vec::new(),
        })
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn board(&self) -> &Board {
        self.session.board()
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    pub fn is_mine(&self, location: Location) -> bool {
        self.session.is_mine(location)
    }

    pub fn is_revealed(&self, location: Location) -> bool {
        self.session.is_revealed(location)
    }

    pub fn adjacent_mine_count(&self, location: Location) -> u8 {
        self.session.adjacent_mine_count(location)
    }

    pub fn square_view(&self, location: Location) -> SquareView {
        self.session.square_view(location)
    }

    /// Registers a callback invoked for every [`GameEvent`].
    pub fn subscribe(&mut self, observer: impl FnMut(&GameEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn reveal(&mut self, location: Location) -> Result<RevealOutcome> {
        let previous = self.session.state();
        let outcome = self.session.reveal(location)?;

        match outcome {
            RevealOutcome::HitMine => self.emit(GameEvent::MineHit(location)),
            RevealOutcome::Revealed if previous.is_initial() => self.emit(GameEvent::Started),
            _ => {}
        }
        Ok(outcome)
    }

    /// Throws away the current board and deals a new one from the game's generator.
    pub fn restart(&mut self) {
        let board = generate(self.config, &mut self.rng);
        self.replace_session(board);
    }

    /// Like [`Game::restart`] but with a caller supplied generator.
    pub fn restart_with(&mut self, generator: impl BoardGenerator) {
        let board = generator.generate(self.config);
        self.replace_session(board);
    }

    fn replace_session(&mut self, board: Board) {
        log::debug!(
            "Restarting from {:?}, {} mines on the new board",
            self.session.state(),
            board.mine_count()
        );
        self.session = Session::new(board);
        self.emit(GameEvent::Restarted);
    }

    fn emit(&mut self, event: GameEvent) {
        for observer in self.observers.iter_mut() {
            observer(&event);
        }
    }
}

impl fmt::Debug for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Game")
            .field("config", &self.config)
            .field("seed", &self.seed)
            .field("session", &self.session)
            .field("observers", &self.observers.len())
            .finish()
    }
}
