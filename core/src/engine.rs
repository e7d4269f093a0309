use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - NotStarted -> Started
/// - NotStarted -> GameOver
/// - Started -> GameOver
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Nothing revealed yet
    NotStarted,
    /// At least one safe square revealed
    Started,
    /// A mine was revealed, no more moves are accepted
    GameOver,
}

impl GameState {
    pub const fn is_initial(self) -> bool {
        matches!(self, Self::NotStarted)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::GameOver)
    }

    /// State after revealing a square, `is_mine` telling what was under it.
    pub const fn after_reveal(self, is_mine: bool) -> Self {
        use GameState::*;
        match (self, is_mine) {
            (GameOver, _) => GameOver,
            (_, true) => GameOver,
            (NotStarted | Started, false) => Started,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::NotStarted
    }
}

/// One board together with the state of play on it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionRepr")]
pub struct Session {
    board: Board,
    state: GameState,
    triggered_mine: Option<Location>,
}

impl Session {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            state: Default::default(),
            triggered_mine: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_final()
    }

    pub fn size(&self) -> GridSize {
        self.board.size()
    }

    /// The mine that ended the game, if any.
    pub fn triggered_mine(&self) -> Option<Location> {
        self.triggered_mine
    }

    pub fn is_mine(&self, location: Location) -> bool {
        self.board.contains_mine(location)
    }

    pub fn is_revealed(&self, location: Location) -> bool {
        self.board.is_revealed(location)
    }

    pub fn adjacent_mine_count(&self, location: Location) -> u8 {
        self.board.adjacent_mine_count(location)
    }

    /// How a host should draw the square, once the game is over every square shows
    /// its content even if it was never clicked.
    pub fn square_view(&self, location: Location) -> SquareView {
        if !self.board.size().contains(location) {
            return SquareView::Hidden;
        }
        if !self.state.is_final() && !self.board.is_revealed(location) {
            return SquareView::Hidden;
        }

        if self.board.contains_mine(location) {
            SquareView::Mine
        } else {
            match self.board.adjacent_mine_count(location) {
                0 => SquareView::Empty,
                count => SquareView::Count(count),
            }
        }
    }

    pub fn reveal(&mut self, location: Location) -> Result<RevealOutcome> {
        if self.state.is_final() {
            log::trace!("Ignoring reveal at {:?}, game is over", location);
            return Ok(RevealOutcome::NoChange);
        }

        let location = self.board.validate_location(location)?;

        let square = self.board.mark_clicked(location);
        let previous = self.state;
        self.state = previous.after_reveal(square.is_bomb);
        log::trace!("Revealed {:?}, mine: {}", location, square.is_bomb);

        if square.is_bomb {
            log::info!("Mine hit at {:?}", location);
            self.triggered_mine = Some(location);
            Ok(RevealOutcome::HitMine)
        } else {
            if previous.is_initial() {
                log::debug!("Game started at {:?}", location);
            }
            Ok(RevealOutcome::Revealed)
        }
    }
}

#[derive(Deserialize)]
struct SessionRepr {
    board: Board,
    state: GameState,
    triggered_mine: Option<Location>,
}

impl TryFrom<SessionRepr> for Session {
    type Error = GameError;

    fn try_from(repr: SessionRepr) -> Result<Self> {
        let SessionRepr {
            board,
            state,
            triggered_mine,
        } = repr;

        let mut clicked_safe = false;
        for (location, square) in board.iter() {
            match (square.is_clicked, square.is_bomb) {
                (true, true) if triggered_mine != Some(location) => {
                    return Err(GameError::InconsistentSession);
                }
                (true, false) => clicked_safe = true,
                _ => {}
            }
        }

        // GameOver carries exactly the clicked mine that ended it
        let consistent = match (state, triggered_mine) {
            (GameState::GameOver, Some(mine)) => {
                board.size().contains(mine)
                    && board.is_revealed(mine)
                    && board.contains_mine(mine)
            }
            (GameState::GameOver, None) => false,
            (_, Some(_)) => false,
            (GameState::NotStarted, None) => !clicked_safe,
            (GameState::Started, None) => clicked_safe,
        };
        if !consistent {
            return Err(GameError::InconsistentSession);
        }

        Ok(Self {
            board,
            state,
            triggered_mine,
        })
    }
}
