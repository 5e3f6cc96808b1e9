// torus.rs - Row-major index mapping on a wrapping grid

/// Dimensions of a toroidal grid. Row `y`, column `x` lives at `y * width + x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Torus {
    width: u32,
    height: u32,
}

/// Offsets of the eight Moore neighbours as (row, col) deltas.
#[rustfmt::skip]
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

impl Torus {
    /// Caller guarantees both dimensions are nonzero and `width * height`
    /// fits in `usize`.
    pub(crate) fn new(width: u32, height: u32) -> Self {
        debug_assert!(width > 0 && height > 0);
        Self { width, height }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn contains(&self, row: u32, col: u32) -> bool {
        row < self.height && col < self.width
    }

    #[inline]
    pub fn index(&self, row: u32, col: u32) -> usize {
        debug_assert!(
            self.contains(row, col),
            "index: out of bounds ({}, {}) for {}x{} grid",
            row,
            col,
            self.width,
            self.height
        );
        row as usize * self.width as usize + col as usize
    }

    /// Inverse of [`Torus::index`], returning (row, col).
    #[inline]
    pub fn coords(&self, index: usize) -> (u32, u32) {
        let width = self.width as usize;
        ((index / width) as u32, (index % width) as u32)
    }

    /// Moves (row, col) by a signed offset, wrapping at every edge.
    ///
    /// Uses Euclidean remainder so `col = 0, d_col = -1` lands on `width - 1`.
    #[inline]
    pub fn offset(&self, row: u32, col: u32, d_row: i32, d_col: i32) -> (u32, u32) {
        (
            wrap(row, d_row, self.height),
            wrap(col, d_col, self.width),
        )
    }

    /// Linear indices of the eight wrapped neighbours of (row, col).
    ///
    /// On grids narrower or shorter than three cells some of these coincide;
    /// every one of the eight positions is still reported.
    pub fn neighbours(&self, row: u32, col: u32) -> [usize; 8] {
        NEIGHBOUR_OFFSETS.map(|(d_row, d_col)| {
            let (r, c) = self.offset(row, col, d_row, d_col);
            self.index(r, c)
        })
    }
}

#[inline]
fn wrap(coord: u32, delta: i32, extent: u32) -> u32 {
    (i64::from(coord) + i64::from(delta)).rem_euclid(i64::from(extent)) as u32
}
