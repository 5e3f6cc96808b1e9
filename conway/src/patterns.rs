// patterns.rs - Named starting patterns and initial seeds

use crate::layout::Layout;
use crate::torus::Torus;

/// A named pattern as (row, col) offsets from its top-left corner.
#[derive(Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(u32, u32)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(0, 0), (0, 1), (0, 2)],
};

pub const TOAD: Pattern = Pattern {
    name: "Toad",
    cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
};

pub const BEACON: Pattern = Pattern {
    name: "Beacon",
    cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
};

pub const PULSAR: Pattern = Pattern {
    name: "Pulsar",
    cells: &[
        // Top half
        (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
        (2, 0), (2, 5), (2, 7), (2, 12),
        (3, 0), (3, 5), (3, 7), (3, 12),
        (4, 0), (4, 5), (4, 7), (4, 12),
        (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
        // Bottom half (mirrored)
        (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
        (8, 0), (8, 5), (8, 7), (8, 12),
        (9, 0), (9, 5), (9, 7), (9, 12),
        (10, 0), (10, 5), (10, 7), (10, 12),
        (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "R-pentomino",
    cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
};

pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
    name: "Gosper Glider Gun",
    cells: &[
        (4, 0), (4, 1), (5, 0), (5, 1),
        (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
        (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
        (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
        (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
        (2, 34), (3, 34), (2, 35), (3, 35),
    ],
};

pub const PATTERNS: &[&Pattern] = &[
    &GLIDER,
    &BLINKER,
    &TOAD,
    &BEACON,
    &PULSAR,
    &R_PENTOMINO,
    &GOSPER_GLIDER_GUN,
];

impl Pattern {
    /// Case-insensitive lookup in [`PATTERNS`].
    pub fn find(name: &str) -> Option<&'static Pattern> {
        PATTERNS
            .iter()
            .copied()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    /// Bounding box as (rows, cols).
    pub fn extent(&self) -> (u32, u32) {
        self.cells.iter().fold((0, 0), |(rows, cols), &(r, c)| {
            (rows.max(r + 1), cols.max(c + 1))
        })
    }
}

/// Initial configuration for a new universe.
///
/// There is no ambient randomness: a random fill always carries its seed, so
/// the same `Seed` on the same dimensions always produces the same grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seed {
    /// Every cell dead.
    #[default]
    Dead,
    /// Cell `i` alive iff `i % 2 == 0 || i % 7 == 0`.
    Alternating,
    /// Each cell alive with probability one half, from a seeded LCG.
    Random(u64),
    /// A library pattern centred on the grid.
    Pattern(&'static Pattern),
}

impl Seed {
    pub(crate) fn fill<L: Layout>(&self, cells: &mut L, torus: Torus) {
        cells.clear();
        match *self {
            Seed::Dead => {}
            Seed::Alternating => {
                for i in (0..torus.len()).filter(|i| i % 2 == 0 || i % 7 == 0) {
                    cells.set(i, true);
                }
            }
            Seed::Random(seed) => {
                let mut lcg = Lcg::new(seed);
                for i in 0..torus.len() {
                    cells.set(i, lcg.next_bit());
                }
            }
            Seed::Pattern(pattern) => {
                let (row, col) = centre(pattern, torus);
                stamp(pattern, cells, torus, row, col);
            }
        }
    }
}

/// Top-left anchor that centres `pattern`, or (0, 0) if it is larger than the grid.
fn centre(pattern: &Pattern, torus: Torus) -> (u32, u32) {
    let (rows, cols) = pattern.extent();
    (
        torus.height().saturating_sub(rows) / 2,
        torus.width().saturating_sub(cols) / 2,
    )
}

/// Sets the pattern's cells alive with its top-left at (row, col), wrapping.
pub(crate) fn stamp<L: Layout>(pattern: &Pattern, cells: &mut L, torus: Torus, row: u32, col: u32) {
    for &(d_row, d_col) in pattern.cells {
        let r = ((u64::from(row) + u64::from(d_row)) % u64::from(torus.height())) as u32;
        let c = ((u64::from(col) + u64::from(d_col)) % u64::from(torus.width())) as u32;
        cells.set(torus.index(r, c), true);
    }
}

/// Knuth's MMIX linear congruential generator.
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        // Scramble the seed so nearby seeds do not start on nearby states.
        Self(seed ^ 0x9E37_79B9_7F4A_7C15)
    }

    fn next_bit(&mut self) -> bool {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        // Low bits of an LCG have short periods; use the top one.
        self.0 >> 63 == 1
    }
}
