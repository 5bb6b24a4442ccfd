use std::collections::HashSet;

use life_badge::domain::{LifeEngine, StepMode, TickOutcome, presets};
use rand::{SeedableRng, rngs::StdRng};

fn engine(width: usize, height: usize) -> LifeEngine<StdRng> {
    LifeEngine::new(width, height, StdRng::seed_from_u64(0x11FE)).unwrap()
}

fn collect_live(engine: &LifeEngine<StdRng>) -> HashSet<(usize, usize)> {
    let (width, height) = engine.dimensions();
    let mut out = HashSet::new();
    for y in 0..height {
        for x in 0..width {
            if engine.is_alive(x, y).unwrap() {
                out.insert((x, y));
            }
        }
    }
    out
}

fn translated(cells: &[(usize, usize)], by: (usize, usize), width: usize, height: usize) -> HashSet<(usize, usize)> {
    cells
        .iter()
        .map(|&(x, y)| ((x + by.0) % width, (y + by.1) % height))
        .collect()
}

#[test]
fn glider_translates_diagonally_every_four_ticks() {
    for mode in StepMode::all() {
        let mut e = engine(10, 10).with_step_mode(mode);
        let glider = presets::glider();
        e.seed_pattern(&glider, (0, 0)).unwrap();

        for _ in 0..4 {
            assert_eq!(e.tick(), TickOutcome::Advanced);
        }

        assert_eq!(collect_live(&e), translated(&glider.cells, (1, 1), 10, 10), "{}", mode.name());
    }
}

#[test]
fn glider_wraps_around_the_torus() {
    let mut e = engine(12, 9);
    let glider = presets::glider();
    e.seed_pattern(&glider, (10, 7)).unwrap();

    for _ in 0..8 {
        e.tick();
    }

    assert_eq!(collect_live(&e), translated(&glider.cells, (12, 9), 12, 9));
}

#[test]
fn lone_cell_dies_of_underpopulation() {
    for (width, height) in [(10, 10), (3, 3), (33, 2)] {
        let mut e = engine(width, height);
        e.set_cell(1, 1, true).unwrap();
        e.tick();
        assert_eq!(e.population(), 0, "{width}x{height}");
    }
}

#[test]
fn dead_grid_stays_dead() {
    let mut e = engine(20, 20);
    for _ in 0..e.stagnation_threshold() - 1 {
        assert_eq!(e.tick(), TickOutcome::Advanced);
        assert_eq!(e.population(), 0);
        assert_eq!(e.hash(), 0);
    }
}

#[test]
fn still_life_hash_is_stable() {
    let mut e = engine(10, 10);
    e.seed_pattern(&presets::block(), (4, 4)).unwrap();
    let before = e.hash();

    e.tick();
    e.tick();

    assert_eq!(e.hash(), before);
    assert_eq!(e.population(), 4);
}

#[test]
fn stagnation_reseeds_exactly_at_threshold() {
    let threshold = 6;
    let mut e = engine(10, 10).with_stagnation_threshold(threshold).unwrap();
    e.seed_pattern(&presets::block(), (4, 4)).unwrap();
    let still_life = e.current().clone();

    for _ in 0..threshold - 1 {
        assert_eq!(e.tick(), TickOutcome::Advanced);
    }
    assert_eq!(e.population(), 4);
    assert_eq!(e.stagnation_count(), threshold - 1);
    assert!(e.is_stagnant());

    assert_eq!(e.tick(), TickOutcome::Reseeded);
    assert_eq!(e.stagnation_count(), 0);
    assert_ne!(e.current(), &still_life);
}

#[test]
fn period_two_oscillator_counts_as_stagnant() {
    let mut e = engine(10, 10).with_stagnation_threshold(4).unwrap();
    e.seed_pattern(&presets::blinker(), (3, 3)).unwrap();

    let outcomes: Vec<_> = (0..5).map(|_| e.tick()).collect();

    // First tick flips the blinker, then every tick repeats two back
    assert_eq!(outcomes[..4], [TickOutcome::Advanced; 4]);
    assert_eq!(outcomes[4], TickOutcome::Reseeded);
}

#[test]
fn corner_cell_sees_opposite_corner() {
    let (w, h) = (8, 6);
    let mut e = engine(w, h);
    // (0, 0) survives only if (w - 1, h - 1) counts as its second neighbour
    e.set_cell(0, 0, true).unwrap();
    e.set_cell(1, 1, true).unwrap();
    e.set_cell(w - 1, h - 1, true).unwrap();

    e.tick();

    assert!(e.is_alive(0, 0).unwrap());
    assert_eq!(e.population(), 1);
}

#[test]
fn birth_across_both_seams() {
    let (w, h) = (7, 5);
    let mut e = engine(w, h);
    for (x, y) in [(w - 1, h - 1), (0, h - 1), (w - 1, 0)] {
        e.set_cell(x, y, true).unwrap();
    }

    e.tick();

    assert!(e.is_alive(0, 0).unwrap());
}

#[test]
fn randomize_density_is_about_half() {
    let mut e = engine(30, 30);
    let samples = 200;
    let total: usize = (0..samples)
        .map(|_| {
            e.randomize();
            e.population()
        })
        .sum();

    let density = total as f64 / (samples as f64 * 900.0);
    assert!((0.47..0.53).contains(&density), "density was {density}");
}

#[test]
fn seeding_is_additive() {
    let mut e = engine(10, 10);
    e.set_cell(9, 0, true).unwrap();
    e.seed_pattern(&presets::block(), (0, 0)).unwrap();
    assert_eq!(e.population(), 5);
}
