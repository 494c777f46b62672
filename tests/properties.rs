use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use torus_life::{GameBoard, NeighborTopology, Pattern};

fn live_cells(board: &GameBoard) -> Vec<(usize, usize)> {
    board
        .iter()
        .filter(|(_, _, cell)| cell.is_alive())
        .map(|(r, c, _)| (r, c))
        .collect()
}

/// Naive reference step computed straight from coordinates, without staging.
fn reference_step(board: &GameBoard) -> Vec<bool> {
    let (rows, cols) = (board.rows() as isize, board.cols() as isize);
    let mut next = Vec::with_capacity((rows * cols) as usize);
    for r in 0..rows {
        for c in 0..cols {
            let mut count = 0;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if dr == 0 && dc == 0 {
                        continue;
                    }
                    let nr = (r + dr).rem_euclid(rows) as usize;
                    let nc = (c + dc).rem_euclid(cols) as usize;
                    if board.cell(nr, nc).unwrap().is_alive() {
                        count += 1;
                    }
                }
            }
            let alive = board.cell(r as usize, c as usize).unwrap().is_alive();
            next.push(matches!((alive, count), (true, 2) | (true, 3) | (false, 3)));
        }
    }
    next
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn every_cell_has_eight_wrapped_neighbors(rows in 3usize..20, cols in 3usize..20) {
        let topology = NeighborTopology::new(rows, cols);
        prop_assert_eq!(topology.len(), rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                let set = topology.neighbors(r, c);
                let mut unique = set.to_vec();
                unique.sort();
                unique.dedup();
                prop_assert_eq!(unique.len(), 8);
                prop_assert!(!set.contains(&(r, c)));
                for &(nr, nc) in set {
                    let dr = (nr + rows - r) % rows;
                    let dc = (nc + cols - c) % cols;
                    prop_assert!(dr == 0 || dr == 1 || dr == rows - 1);
                    prop_assert!(dc == 0 || dc == 1 || dc == cols - 1);
                }
            }
        }
    }

    #[test]
    fn next_generation_depends_only_on_snapshot(seed in any::<u64>(), rows in 3usize..16, cols in 3usize..16) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut board = GameBoard::new(rows, cols, 8.0).unwrap();
        board.randomize_with(&mut rng, 0.35);

        let mut a = board.clone();
        let mut b = board.clone();
        a.next_generation();
        b.next_generation();
        prop_assert_eq!(live_cells(&a), live_cells(&b));

        let expected = reference_step(&board);
        let actual: Vec<bool> = a.iter().map(|(_, _, cell)| cell.is_alive()).collect();
        prop_assert_eq!(actual, expected);
        prop_assert!(a.iter().all(|(_, _, cell)| cell.pending().is_none()));
        prop_assert_eq!(a.generation(), 1);
    }

    #[test]
    fn get_cell_matches_pixel_bounds(x in -50.0f32..250.0, y in -50.0f32..250.0) {
        let board = GameBoard::new(10, 20, 10.0).unwrap();
        let inside = (0.0..200.0).contains(&x) && (0.0..100.0).contains(&y);
        prop_assert_eq!(board.get_cell(x, y).is_some(), inside);
        if inside {
            prop_assert_eq!(board.cell_coord_at(x, y), Some(((y / 10.0) as usize, (x / 10.0) as usize)));
        }
    }
}

#[test]
fn seeded_randomize_is_reproducible() {
    let mut a = GameBoard::new(20, 20, 4.0).unwrap();
    let mut b = GameBoard::new(20, 20, 4.0).unwrap();
    a.randomize_with(&mut ChaCha8Rng::seed_from_u64(12345), 0.2);
    b.randomize_with(&mut ChaCha8Rng::seed_from_u64(12345), 0.2);
    assert_eq!(live_cells(&a), live_cells(&b));
}

#[test]
fn ages_track_survival_streaks() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let mut board = GameBoard::new(24, 24, 4.0).unwrap();
    board.randomize_with(&mut rng, 0.3);

    let mut expected_age = vec![0u32; 24 * 24];
    for _ in 0..20 {
        let before: Vec<bool> = board.iter().map(|(_, _, cell)| cell.is_alive()).collect();
        board.next_generation();
        for (i, (_, _, cell)) in board.iter().enumerate() {
            expected_age[i] = match (before[i], cell.is_alive()) {
                (true, true) => expected_age[i] + 1,
                _ => 0,
            };
            assert_eq!(cell.age(), expected_age[i]);
        }
    }
}

#[test]
fn lightweight_spaceship_moves_two_cells_in_four_generations() {
    let mut board = GameBoard::new(12, 16, 4.0).unwrap();
    board.place_pattern(&Pattern::LightweightSpaceship, 4, 4);
    let start = live_cells(&board);
    for _ in 0..4 {
        board.next_generation();
    }
    // This orientation travels left
    let moved: Vec<_> = start.iter().map(|&(r, c)| (r, c - 2)).collect();
    assert_eq!(live_cells(&board), moved);
}

#[test]
fn randomize_probability_roughly_holds() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let mut board = GameBoard::new(200, 200, 1.0).unwrap();
    let p: f64 = rng.gen_range(0.1..0.9);
    board.randomize_with(&mut rng, p);
    let observed = board.population() as f64 / 40_000.0;
    assert!((observed - p).abs() < 0.03, "observed {observed}, expected {p}");
}

#[test]
fn gosper_gun_emits_a_glider_every_thirty_generations() {
    let mut board = GameBoard::new(120, 120, 4.0).unwrap();
    board.place_pattern(&Pattern::GosperGliderGun, 0, 0);
    assert_eq!(board.population(), 36);
    for _ in 0..60 {
        board.next_generation();
    }
    assert_eq!(board.population(), 46);
}
