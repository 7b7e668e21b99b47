//! Tests for random grid generation.

use rand::SeedableRng;
use rand::rngs::StdRng;
use strictly_filler::{
    Corner, GridError, HomeCorners, MatchConfig, Player, generate, satisfies_constraints,
};

#[test]
fn test_generated_grids_satisfy_constraints() {
    for seed in 0..200 {
        let config = MatchConfig::default();
        let grid = generate(&config, &mut StdRng::seed_from_u64(seed)).expect("Valid config");

        assert_eq!(grid.rows(), 7);
        assert_eq!(grid.cols(), 8);
        assert!(satisfies_constraints(&grid, &config), "seed {seed}");
    }
}

#[test]
fn test_small_palettes_and_shapes() {
    let shapes = [(1, 2, 3), (2, 1, 3), (3, 3, 3), (4, 9, 4), (10, 10, 5), (2, 2, 6)];
    for (rows, cols, num_colors) in shapes {
        let config = MatchConfig::new(rows, cols, num_colors);
        for seed in 0..50 {
            let grid = generate(&config, &mut StdRng::seed_from_u64(seed)).expect("Valid config");
            assert!(
                satisfies_constraints(&grid, &config),
                "{rows}x{cols}/{num_colors} seed {seed}"
            );
            assert!(grid.distinct_colors().len() <= num_colors);
        }
    }
}

#[test]
fn test_custom_home_corners() {
    let homes = HomeCorners::new(Corner::TopLeft, Corner::BottomRight);
    let config = MatchConfig::new(5, 6, 4).with_homes(homes);
    for seed in 0..50 {
        let grid = generate(&config, &mut StdRng::seed_from_u64(seed)).expect("Valid config");
        let a = grid.get(homes.cell(Player::A, 5, 6));
        let b = grid.get(homes.cell(Player::B, 5, 6));
        assert_ne!(a, b);
    }
}

#[test]
fn test_diagonal_homes_with_three_colors() {
    let homes = HomeCorners::new(Corner::TopLeft, Corner::BottomRight);
    for (rows, cols) in [(3, 3), (4, 4), (5, 6), (7, 8)] {
        let config = MatchConfig::new(rows, cols, 3).with_homes(homes);
        for seed in 0..1000 {
            let grid = generate(&config, &mut StdRng::seed_from_u64(seed))
                .unwrap_or_else(|e| panic!("{rows}x{cols} seed {seed}: {e}"));
            assert!(satisfies_constraints(&grid, &config));
        }
    }
}

#[test]
fn test_same_seed_same_grid() {
    let config = MatchConfig::default();
    let first = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();
    let second = generate(&config, &mut StdRng::seed_from_u64(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_invalid_configs_rejected() {
    let mut rng = StdRng::seed_from_u64(0);

    for config in [
        MatchConfig::new(0, 8, 6),
        MatchConfig::new(7, 0, 6),
        MatchConfig::new(7, 8, 2),
        MatchConfig::new(7, 8, 7),
    ] {
        assert!(matches!(
            generate(&config, &mut rng),
            Err(GridError::InvalidDimensions { .. })
        ));
    }

    // A 1x1 grid puts both homes on the same cell.
    assert_eq!(
        generate(&MatchConfig::new(1, 1, 3), &mut rng),
        Err(GridError::HomeCornersOverlap { rows: 1, cols: 1 })
    );
}
