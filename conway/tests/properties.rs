//! Property-based tests for the universe.
//!
//! Properties run over arbitrary small grids, random seeds and coordinates,
//! against one or both storage layouts.

use conway::{BitCells, ByteCells, Cell, Layout, Seed, Universe, UniverseError};
use proptest::prelude::*;

fn dims() -> impl Strategy<Value = (u32, u32)> {
    (1u32..24, 1u32..24)
}

// =============================================================================
// Buffer length
// =============================================================================

proptest! {
    /// The bit layout needs ceil(w*h / 8) bytes
    #[test]
    fn prop_bit_buffer_len((w, h) in dims()) {
        let u: Universe<BitCells> = Universe::new(w, h).unwrap();
        let cells = (u.width() * u.height()) as usize;
        prop_assert_eq!(u.cells().len(), cells.div_ceil(8));
        prop_assert_eq!(u.cells().cell_count(), cells);
    }

    /// The byte layout needs exactly w*h bytes
    #[test]
    fn prop_byte_buffer_len((w, h) in dims()) {
        let u: Universe<ByteCells> = Universe::new(w, h).unwrap();
        prop_assert_eq!(u.cells().len(), (u.width() * u.height()) as usize);
    }

    /// Buffer length never changes across ticks and toggles
    #[test]
    fn prop_buffer_len_is_stable((w, h) in dims(), seed: u64, ticks in 0usize..6) {
        let mut u: Universe = Universe::with_seed(w, h, Seed::Random(seed)).unwrap();
        let len = u.cells().len();
        for _ in 0..ticks {
            u.tick();
            u.toggle(0, 0).unwrap();
        }
        prop_assert_eq!(u.cells().len(), len);
    }
}

// =============================================================================
// Determinism
// =============================================================================

fn run<L: Layout>(w: u32, h: u32, seed: u64, ticks: usize) -> Universe<L> {
    let mut u = Universe::with_seed(w, h, Seed::Random(seed)).unwrap();
    for _ in 0..ticks {
        u.tick();
    }
    u
}

proptest! {
    /// Same seed and tick count, same grid
    #[test]
    fn prop_ticks_are_deterministic((w, h) in dims(), seed: u64, ticks in 0usize..12) {
        let a: Universe<BitCells> = run(w, h, seed, ticks);
        let b: Universe<BitCells> = run(w, h, seed, ticks);
        prop_assert_eq!(a.cells().as_bytes(), b.cells().as_bytes());
        prop_assert_eq!(a.generation(), ticks as u64);
    }

    /// Both layouts evolve identically
    #[test]
    fn prop_layouts_agree((w, h) in dims(), seed: u64, ticks in 0usize..12) {
        let bits: Universe<BitCells> = run(w, h, seed, ticks);
        let bytes: Universe<ByteCells> = run(w, h, seed, ticks);
        let a: Vec<Cell> = bits.cells().iter_cells().map(|(_, _, c)| c).collect();
        let b: Vec<Cell> = bytes.cells().iter_cells().map(|(_, _, c)| c).collect();
        prop_assert_eq!(a, b);
    }
}

// =============================================================================
// Mutation
// =============================================================================

proptest! {
    /// toggle twice restores the grid exactly
    #[test]
    fn prop_double_toggle_is_identity(
        (w, h) in dims(),
        seed: u64,
        row in 0u32..24,
        col in 0u32..24,
    ) {
        let (row, col) = (row % h, col % w);
        let mut u: Universe = Universe::with_seed(w, h, Seed::Random(seed)).unwrap();
        let before = u.clone();

        u.toggle(row, col).unwrap();
        prop_assert_ne!(u.get(row, col), before.get(row, col));
        prop_assert_eq!(u.population().abs_diff(before.population()), 1);

        u.toggle(row, col).unwrap();
        prop_assert_eq!(&u, &before);
    }

    /// Out-of-range toggles fail and change nothing
    #[test]
    fn prop_toggle_out_of_bounds(
        (w, h) in dims(),
        seed: u64,
        extra_row in 0u32..8,
        col in 0u32..32,
    ) {
        let mut u: Universe<ByteCells> = Universe::with_seed(w, h, Seed::Random(seed)).unwrap();
        let before = u.clone();
        let row = h + extra_row;

        prop_assert_eq!(
            u.toggle(row, col),
            Err(UniverseError::OutOfBounds { row, col, width: w, height: h })
        );
        prop_assert!(u.toggle(col % h, w + extra_row).is_err());
        prop_assert_eq!(&u, &before);
    }

    /// Toggles never advance the generation counter
    #[test]
    fn prop_toggle_keeps_generation((w, h) in dims(), ticks in 0usize..4) {
        let mut u: Universe = Universe::new(w, h).unwrap();
        for _ in 0..ticks {
            u.tick();
        }
        u.toggle(h - 1, w - 1).unwrap();
        prop_assert_eq!(u.generation(), ticks as u64);
    }
}

// =============================================================================
// Fixed points and views
// =============================================================================

proptest! {
    /// An all-dead grid stays dead
    #[test]
    fn prop_dead_is_fixed_point((w, h) in dims(), ticks in 0usize..10) {
        let mut u: Universe = Universe::new(w, h).unwrap();
        for _ in 0..ticks {
            u.tick();
        }
        prop_assert_eq!(u.population(), 0);
        prop_assert!(u.cells().iter().all(|&b| b == 0));
    }

    /// Two views with no mutation in between see the same bytes
    #[test]
    fn prop_views_agree((w, h) in dims(), seed: u64) {
        let u: Universe = Universe::with_seed(w, h, Seed::Random(seed)).unwrap();
        let first = u.cells();
        let second = u.cells();
        prop_assert_eq!(first.as_bytes(), second.as_bytes());
        prop_assert_eq!(first.as_ptr(), second.as_ptr());
    }

    /// Bit layout padding past the last cell is always zero
    #[test]
    fn prop_padding_bits_stay_clear((w, h) in dims(), seed: u64, ticks in 0usize..6) {
        let mut u: Universe<BitCells> = Universe::with_seed(w, h, Seed::Random(seed)).unwrap();
        for _ in 0..ticks {
            u.tick();
        }
        let cells = (w * h) as usize;
        let view = u.cells();
        let bytes = view.as_bytes();
        let used = cells % 8;
        if used != 0 {
            prop_assert_eq!(bytes[bytes.len() - 1] >> used, 0);
        }
        let alive = view.iter_cells().filter(|(_, _, c)| c.is_alive()).count();
        prop_assert_eq!(alive, u.population());
    }
}
