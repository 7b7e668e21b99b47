//! Tests for the typestate match lifecycle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_filler::{
    Color, FillerInvariants, GameInProgress, GameResult, GameSetup, Grid, InvariantSet,
    MatchConfig, Move, MoveError, Outcome, Player, Score, is_game_over, legal_colors,
};

fn fixture() -> GameSetup {
    let grid = Grid::from_indices(&[&[0, 1, 5], &[3, 4, 0], &[2, 0, 1]]).unwrap();
    GameSetup::from_grid(MatchConfig::new(3, 3, 6), grid).expect("Valid fixture")
}

#[test]
fn test_typestate_lifecycle() {
    let game = match fixture().start() {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Three colors remain"),
    };
    assert_eq!(game.to_move(), Player::A);

    let result = game.make_move(Move::new(Player::A, Color::Red)).expect("Valid move");
    let game = match result {
        GameResult::InProgress(g) => g,
        GameResult::Finished(_) => panic!("Game shouldn't finish after one move"),
    };

    assert_eq!(game.to_move(), Player::B);
    assert_eq!(game.turn(), 1);
}

#[test]
fn test_random_play_terminates() {
    for seed in 0..30 {
        let mut rng = StdRng::seed_from_u64(seed);
        let setup = GameSetup::new(MatchConfig::default(), &mut rng).unwrap();
        let cells = setup.grid().len();
        let mut result = setup.start();

        let mut moves = 0;
        let finished = loop {
            let game = match result {
                GameResult::InProgress(g) => g,
                GameResult::Finished(f) => break f,
            };
            assert!(FillerInvariants::check_all(&game).is_ok());

            let legal: Vec<Color> = game.legal_colors().into_iter().collect();
            assert!(!legal.is_empty(), "in-progress match must offer a move");
            let color = legal[rng.random_range(0..legal.len())];

            result = game.play(color).expect("Legal color");
            moves += 1;
            assert!(moves <= cells, "seed {seed}: match did not terminate");
        };

        assert_eq!(finished.turn(), finished.history().len());
        let homes = finished.config().homes();
        let over = is_game_over(finished.grid())
            || (legal_colors(Player::A, finished.grid(), homes).is_empty()
                && legal_colors(Player::B, finished.grid(), homes).is_empty());
        assert!(over, "seed {seed}");
        assert_eq!(*finished.outcome(), finished.score().outcome());
    }
}

#[test]
fn test_replay_reproduces_match() {
    let mut rng = StdRng::seed_from_u64(11);
    let setup = GameSetup::new(MatchConfig::default(), &mut rng).unwrap();

    let mut game = setup.clone().start().in_progress().unwrap();
    for _ in 0..4 {
        let Some(color) = game.legal_colors().into_iter().next() else {
            break;
        };
        match game.play(color).unwrap() {
            GameResult::InProgress(next) => game = next,
            GameResult::Finished(_) => return,
        }
    }

    let replayed = GameInProgress::replay(setup, game.history())
        .unwrap()
        .in_progress()
        .unwrap();
    assert_eq!(replayed, game);
}

#[test]
fn test_replay_stops_at_first_bad_move() {
    let moves = [
        Move::new(Player::A, Color::Red),
        Move::new(Player::B, Color::Orange),
    ];
    // Orange is B's own color.
    let err = GameInProgress::replay(fixture(), &moves).unwrap_err();
    assert_eq!(
        err,
        MoveError::IllegalColor {
            player: Player::B,
            color: Color::Orange
        }
    );
}

#[test]
fn test_from_grid_validation() {
    let config = MatchConfig::new(2, 2, 3);

    let wrong_size = Grid::from_indices(&[&[0, 1, 2], &[1, 2, 0]]).unwrap();
    assert!(GameSetup::from_grid(config.clone(), wrong_size).is_err());

    let out_of_palette = Grid::from_indices(&[&[0, 4], &[1, 0]]).unwrap();
    assert!(GameSetup::from_grid(config.clone(), out_of_palette).is_err());

    let same_homes = Grid::from_indices(&[&[1, 0], &[0, 1]]).unwrap();
    assert!(GameSetup::from_grid(config, same_homes).is_err());
}

#[test]
fn test_finished_game_restarts() {
    let grid = Grid::from_indices(&[&[0, 1], &[0, 1]]).unwrap();
    let finished = GameSetup::from_grid(MatchConfig::new(2, 2, 3), grid)
        .unwrap()
        .start()
        .finished()
        .unwrap();
    assert_eq!(finished.score(), Score { a: 2, b: 2 });
    assert_eq!(*finished.outcome(), Outcome::Tie);
    assert!(finished.undo().is_none());

    let setup = finished.restart(&mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(setup.grid().rows(), 2);
    assert_eq!(*setup.config().num_colors(), 3);
}
