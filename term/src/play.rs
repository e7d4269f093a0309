use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use anyhow::Context;
use sweeper_core::{Game, GameEvent};

use crate::command::{Command, HELP};
use crate::render::{render, status_line};

/// Reads commands line by line until `quit` or end of input, redrawing after every
/// change.
pub fn run<R: BufRead, W: Write>(game: &mut Game, input: R, mut output: W) -> anyhow::Result<()> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    game.subscribe(move |event| sink.borrow_mut().push(*event));

    draw(game, &mut output)?;

    for line in input.lines() {
        let line = line.context("Failed to read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };
        log::trace!("command: {:?}", command);

        let redraw = match command {
            Command::Reveal(location) => match game.reveal(location) {
                Ok(outcome) if outcome.has_update() => true,
                Ok(_) if game.session().is_finished() => {
                    writeln!(output, "The game is over, nothing left to reveal.")?;
                    false
                }
                Ok(_) => false,
                Err(err) => {
                    writeln!(output, "{err}")?;
                    false
                }
            },
            Command::Restart => {
                game.restart();
                true
            }
            Command::Help => {
                writeln!(output, "{HELP}")?;
                false
            }
            Command::Quit => break,
        };

        for event in events.borrow_mut().drain(..) {
            if let GameEvent::MineHit(location) = event {
                writeln!(
                    output,
                    "Bomb clicked at column {}, row {}!",
                    location.column, location.row
                )?;
            }
        }

        if redraw {
            draw(game, &mut output)?;
        }
    }

    output.flush().context("Failed to flush output")?;
    Ok(())
}

fn draw<W: Write>(game: &Game, output: &mut W) -> anyhow::Result<()> {
    write!(output, "{}", render(game.session()))?;
    writeln!(output, "{}", status_line(game.state()))?;
    Ok(())
}
