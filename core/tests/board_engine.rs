use std::cell::Cell;
use std::collections::HashSet;
use std::rc::Rc;

use sweeper_core::*;

fn config(width: Coord, height: Coord, percent: u8) -> GameConfig {
    GameConfig::new(GridSize::new(width, height), percent).unwrap()
}

fn count_mine_hits(game: &mut Game) -> Rc<Cell<u32>> {
    let hits = Rc::new(Cell::new(0));
    let sink = Rc::clone(&hits);
    game.subscribe(move |event| {
        if matches!(event, GameEvent::MineHit(_)) {
            sink.set(sink.get() + 1);
        }
    });
    hits
}

#[test]
fn fresh_boards_only_hold_unclicked_mines() {
    for seed in 0..32 {
        let board = RandomBoardGenerator::new(seed).generate(config(10, 8, 35));

        for (location, square) in board.iter() {
            assert!(square.is_bomb, "{location:?} stored without a mine");
            assert!(!square.is_clicked);
            assert!(board.size().contains(location));
        }
    }
}

#[test]
fn adjacency_matches_a_brute_force_count() {
    let board = RandomBoardGenerator::new(11).generate(config(9, 9, 40));
    let mines: HashSet<Location> = board
        .iter()
        .filter(|(_, square)| square.is_bomb)
        .map(|(location, _)| location)
        .collect();

    for location in board.size().locations() {
        let mut expected = 0;
        for d_column in -1..=1 {
            for d_row in -1..=1 {
                if (d_column, d_row) == (0, 0) {
                    continue;
                }
                let neighbor = Location::new(location.column + d_column, location.row + d_row);
                if mines.contains(&neighbor) {
                    expected += 1;
                }
            }
        }
        assert_eq!(board.adjacent_mine_count(location), expected, "at {location:?}");
    }
}

#[test]
fn two_mines_in_a_corner() {
    let mines = [Location::new(0, 0), Location::new(1, 0)];
    let board = Board::from_mine_locations(GridSize::new(6, 6), &mines).unwrap();

    assert_eq!(board.adjacent_mine_count(Location::new(0, 1)), 2);
    assert_eq!(board.adjacent_mine_count(Location::new(5, 5)), 0);
}

#[test]
fn zero_probability_never_ends_the_game() {
    let mut game = Game::with_seed(config(6, 5, 0), 5).unwrap();
    let hits = count_mine_hits(&mut game);

    for location in GridSize::new(6, 5).locations() {
        assert_eq!(game.reveal(location).unwrap(), RevealOutcome::Revealed);
        assert_eq!(game.state(), GameState::Started);
    }
    assert_eq!(hits.get(), 0);
}

#[test]
fn full_probability_ends_on_the_first_reveal() {
    for seed in 0..8 {
        let mut game = Game::with_seed(config(4, 4, 100), seed).unwrap();
        let hits = count_mine_hits(&mut game);

        let location = Location::new((seed % 4) as Coord, 2);
        assert_eq!(game.reveal(location).unwrap(), RevealOutcome::HitMine);
        assert_eq!(game.state(), GameState::GameOver);
        assert_eq!(hits.get(), 1);
    }
}

#[test]
fn game_over_is_terminal() {
    let mut game = Game::with_seed(config(5, 5, 100), 1).unwrap();
    let hits = count_mine_hits(&mut game);
    game.reveal(Location::new(2, 2)).unwrap();

    for location in GridSize::new(5, 5).locations() {
        assert_eq!(game.reveal(location).unwrap(), RevealOutcome::NoChange);
        assert_eq!(game.state(), GameState::GameOver);
    }
    assert_eq!(hits.get(), 1);
    assert_eq!(game.session().triggered_mine(), Some(Location::new(2, 2)));
}

#[test]
fn restart_deals_an_independent_board() {
    let mut game = Game::with_seed(config(8, 8, 50), 21).unwrap();
    for location in GridSize::new(8, 8).locations().take(5) {
        game.reveal(location).unwrap();
    }
    let previous = game.board().clone();

    game.restart();

    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.board().iter().all(|(_, square)| !square.is_clicked));
    assert_ne!(game.board(), &previous);
}

#[test]
fn restart_is_valid_from_every_state() {
    let mut game = Game::with_seed(config(3, 3, 0), 0).unwrap();
    game.restart();
    assert_eq!(game.state(), GameState::NotStarted);

    game.reveal(Location::new(0, 0)).unwrap();
    game.restart();
    assert_eq!(game.state(), GameState::NotStarted);

    game.restart_with(FixedBoardGenerator::new([Location::new(0, 0)]));
    game.reveal(Location::new(0, 0)).unwrap();
    assert_eq!(game.state(), GameState::GameOver);
    game.restart();
    assert_eq!(game.state(), GameState::NotStarted);
    assert!(!game.is_revealed(Location::new(0, 0)));
}

#[test]
fn revealing_densifies_the_sparse_board() {
    let mut game = Game::with_seed(config(4, 4, 0), 0).unwrap();
    assert_eq!(game.board().entry_count(), 0);

    game.reveal(Location::new(1, 2)).unwrap();
    game.reveal(Location::new(3, 3)).unwrap();

    assert_eq!(game.board().entry_count(), 2);
    assert_eq!(
        game.board().square(Location::new(1, 2)),
        SquareState {
            is_clicked: true,
            is_bomb: false
        }
    );
}

#[test]
fn queries_answer_for_off_grid_locations() {
    let game = Game::with_seed(config(2, 2, 100), 0).unwrap();
    let outside = Location::new(-1, 7);

    assert!(!game.is_mine(outside));
    assert!(!game.is_revealed(outside));
    assert_eq!(game.adjacent_mine_count(Location::new(-1, -1)), 1);
}

#[test]
fn session_snapshot_serializes() {
    let mut game = Game::with_seed(config(3, 2, 0), 0).unwrap();
    game.restart_with(FixedBoardGenerator::new([Location::new(2, 1)]));
    game.reveal(Location::new(0, 0)).unwrap();

    let json = serde_json::to_string(game.session()).unwrap();
    let restored: Session = serde_json::from_str(&json).unwrap();

    assert_eq!(&restored, game.session());
    assert!(restored.is_revealed(Location::new(0, 0)));
    assert!(restored.is_mine(Location::new(2, 1)));
}

fn session_json(squares: &str, state: &str, triggered_mine: &str) -> String {
    format!(
        r#"{{"board":{{"size":{{"width":3,"height":3}},"squares":[{squares}]}},"state":"{state}","triggered_mine":{triggered_mine}}}"#
    )
}

#[test]
fn session_snapshot_rejects_state_that_disagrees_with_the_board() {
    let clicked_mine = r#"[{"column":0,"row":0},{"is_clicked":true,"is_bomb":true}]"#;
    let clicked_safe = r#"[{"column":1,"row":1},{"is_clicked":true,"is_bomb":false}]"#;
    let hidden_mine = r#"[{"column":2,"row":2},{"is_clicked":false,"is_bomb":true}]"#;
    let origin = r#"{"column":0,"row":0}"#;
    let both = format!("{clicked_mine},{clicked_safe}");

    let rejected = [
        session_json(clicked_mine, "NotStarted", r#"{"column":9,"row":9}"#),
        session_json(clicked_mine, "NotStarted", "null"),
        session_json(clicked_mine, "Started", origin),
        session_json(clicked_safe, "GameOver", "null"),
        session_json(hidden_mine, "GameOver", r#"{"column":2,"row":2}"#),
        session_json(clicked_mine, "GameOver", r#"{"column":9,"row":9}"#),
        session_json(clicked_safe, "NotStarted", "null"),
        session_json(hidden_mine, "Started", "null"),
    ];
    for json in &rejected {
        let result = serde_json::from_str::<Session>(json);
        assert!(result.is_err(), "accepted {json}");
    }

    let accepted = [
        session_json(hidden_mine, "NotStarted", "null"),
        session_json(clicked_safe, "Started", "null"),
        session_json(&both, "GameOver", origin),
    ];
    for json in &accepted {
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.board().size(), GridSize::new(3, 3));
    }
}
