use std::fmt;

use sweeper_core::{GameState, Location, Session, SquareView};

fn glyph(view: SquareView) -> char {
    match view {
        SquareView::Hidden => '#',
        SquareView::Empty => '.',
        SquareView::Count(count) => char::from(b'0' + count),
        SquareView::Mine => '*',
    }
}

pub fn status_line(state: GameState) -> &'static str {
    match state {
        GameState::NotStarted => "Pick a square to start.",
        GameState::Started => "Game in progress.",
        GameState::GameOver => "Game over, type `restart` for a new board.",
    }
}

/// Draws the board as text, columns left to right and rows top to bottom, with the
/// last digit of each index in the margins.
pub struct BoardView<'a>(pub &'a Session);

impl fmt::Display for BoardView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        let size = session.size();
        let label_width = (size.height - 1).max(0).to_string().len();

        write!(f, "{:label_width$} ", "")?;
        for column in 0..size.width {
            write!(f, " {}", column % 10)?;
        }
        writeln!(f)?;

        for row in 0..size.height {
            write!(f, "{row:>label_width$} ")?;
            for column in 0..size.width {
                let view = session.square_view(Location::new(column, row));
                write!(f, " {}", glyph(view))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn render(session: &Session) -> String {
    BoardView(session).to_string()
}
