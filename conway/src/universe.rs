// universe.rs - The toroidal Game of Life universe

use std::fmt;

use log::{debug, trace};

use crate::error::{Result, UniverseError};
use crate::layout::{BitCells, Layout};
use crate::patterns::{self, Pattern, Seed};
use crate::rule::next_state;
use crate::torus::Torus;
use crate::view::CellsView;
use crate::Cell;

/// A fixed-size grid of cells whose edges wrap around.
///
/// Coordinates are always given as (row, col): `row` counts down from the top
/// (`0..height`), `col` counts right from the left edge (`0..width`). Cell
/// (row, col) is stored at linear index `row * width + col`.
///
/// The universe is plain data with no interior mutability. It is not meant to
/// be shared between threads without the caller's own synchronization.
#[derive(Debug, Clone)]
pub struct Universe<L: Layout = BitCells> {
    torus: Torus,
    cells: L,
    /// Scratch buffer for the next generation, swapped with `cells` on tick.
    next: L,
    generation: u64,
}

impl<L: Layout> Universe<L> {
    /// Creates an all-dead universe.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::with_seed(width, height, Seed::Dead)
    }

    /// Creates a universe with an explicit starting configuration.
    pub fn with_seed(width: u32, height: u32, seed: Seed) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(UniverseError::InvalidDimensions { width, height });
        }
        // `u32 * u32` always fits a 64-bit usize, but not a 32-bit one.
        (width as usize)
            .checked_mul(height as usize)
            .ok_or(UniverseError::InvalidDimensions { width, height })?;

        let torus = Torus::new(width, height);
        let mut cells = L::dead(torus.len());
        seed.fill(&mut cells, torus);
        let next = L::dead(torus.len());

        debug!(
            "new {}x{} universe ({} layout, {} bytes, seed {:?})",
            width,
            height,
            L::NAME,
            cells.as_bytes().len(),
            seed
        );

        Ok(Self {
            torus,
            cells,
            next,
            generation: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.torus.width()
    }

    pub fn height(&self) -> u32 {
        self.torus.height()
    }

    /// Number of ticks since construction or the last [`Universe::clear`].
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.count_alive()
    }

    /// Zero-copy view of the current generation.
    ///
    /// The view borrows `self`, so it cannot outlive the next mutating call.
    pub fn cells(&self) -> CellsView<'_, L> {
        CellsView::new(&self.cells, self.torus)
    }

    /// Advances one generation.
    ///
    /// Every cell of the next generation is computed from the current one into
    /// the scratch buffer, which then replaces the live buffer by swap.
    pub fn tick(&mut self) {
        let width = self.width();
        let height = self.height();

        for row in 0..height {
            let north = if row == 0 { height - 1 } else { row - 1 };
            let south = if row + 1 == height { 0 } else { row + 1 };

            for col in 0..width {
                let west = if col == 0 { width - 1 } else { col - 1 };
                let east = if col + 1 == width { 0 } else { col + 1 };

                #[rustfmt::skip]
                let neighbours = [
                    (north, west), (north, col), (north, east),
                    (row, west),                 (row, east),
                    (south, west), (south, col), (south, east),
                ];
                let count = neighbours
                    .iter()
                    .filter(|&&(r, c)| self.cells.get(self.torus.index(r, c)))
                    .count() as u8;

                let idx = self.torus.index(row, col);
                let cell = Cell::from(self.cells.get(idx));
                self.next.set(idx, next_state(cell, count).is_alive());
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;

        trace!(
            "generation {}: population {}",
            self.generation,
            self.cells.count_alive()
        );
    }

    /// Flips the state of cell (row, col).
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells.toggle(idx);
        Ok(())
    }

    pub fn get(&self, row: u32, col: u32) -> Result<Cell> {
        let idx = self.checked_index(row, col)?;
        Ok(Cell::from(self.cells.get(idx)))
    }

    pub fn set(&mut self, row: u32, col: u32, cell: Cell) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.cells.set(idx, cell.is_alive());
        Ok(())
    }

    /// Sets `pattern`'s cells alive with its top-left at (row, col).
    ///
    /// The anchor must be on the grid; cells past the edge wrap around.
    pub fn place(&mut self, pattern: &Pattern, row: u32, col: u32) -> Result<()> {
        self.checked_index(row, col)?;
        patterns::stamp(pattern, &mut self.cells, self.torus, row, col);
        debug!("placed {} at ({}, {})", pattern.name, row, col);
        Ok(())
    }

    /// Kills every cell and resets the generation counter.
    pub fn clear(&mut self) {
        self.cells.clear();
        self.generation = 0;
    }

    /// Live cells among the eight wrapped neighbours of (row, col).
    pub fn live_neighbor_count(&self, row: u32, col: u32) -> Result<u8> {
        self.checked_index(row, col)?;
        Ok(self
            .torus
            .neighbours(row, col)
            .iter()
            .filter(|&&i| self.cells.get(i))
            .count() as u8)
    }

    /// Text rendering, one line per row: `◼` alive, `◻` dead.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn checked_index(&self, row: u32, col: u32) -> Result<usize> {
        if self.torus.contains(row, col) {
            Ok(self.torus.index(row, col))
        } else {
            debug!(
                "rejected ({}, {}) on {}x{} grid",
                row,
                col,
                self.width(),
                self.height()
            );
            Err(UniverseError::OutOfBounds {
                row,
                col,
                width: self.width(),
                height: self.height(),
            })
        }
    }
}

// The scratch buffer holds a stale generation and takes no part in equality.
impl<L: Layout> PartialEq for Universe<L> {
    fn eq(&self, other: &Self) -> bool {
        self.torus == other.torus
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

impl<L: Layout> Eq for Universe<L> {}

impl<L: Layout> fmt::Display for Universe<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.width() as usize;
        for idx in 0..self.torus.len() {
            let symbol = if self.cells.get(idx) { '◼' } else { '◻' };
            write!(f, "{symbol}")?;
            if (idx + 1) % width == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ByteCells;
    use crate::patterns::{BLINKER, GLIDER};

    fn alive<L: Layout>(u: &Universe<L>) -> Vec<(u32, u32)> {
        u.cells()
            .iter_cells()
            .filter(|&(_, _, cell)| cell.is_alive())
            .map(|(r, c, _)| (r, c))
            .collect()
    }

    #[test_log::test]
    fn rejects_zero_dimensions() {
        assert_eq!(
            Universe::<BitCells>::new(0, 5),
            Err(UniverseError::InvalidDimensions { width: 0, height: 5 })
        );
        assert_eq!(
            Universe::<ByteCells>::new(5, 0),
            Err(UniverseError::InvalidDimensions { width: 5, height: 0 })
        );
    }

    #[test_log::test]
    fn new_is_all_dead() {
        let u: Universe = Universe::new(8, 4).unwrap();
        assert_eq!(u.width(), 8);
        assert_eq!(u.height(), 4);
        assert_eq!(u.population(), 0);
        assert_eq!(u.generation(), 0);
        assert_eq!(u.cells().len(), 4);
    }

    #[test_log::test]
    fn toggle_flips_one_cell() {
        let mut u: Universe<ByteCells> = Universe::new(4, 3).unwrap();
        u.toggle(2, 1).unwrap();
        assert_eq!(u.get(2, 1), Ok(Cell::Alive));
        assert_eq!(alive(&u), vec![(2, 1)]);
        // Row selects y, col selects x.
        assert_eq!(u.cells().as_bytes()[2 * 4 + 1], 1);
        u.toggle(2, 1).unwrap();
        assert_eq!(u.population(), 0);
        assert_eq!(u.generation(), 0);
    }

    #[test_log::test]
    fn toggle_out_of_bounds_changes_nothing() {
        let mut u: Universe = Universe::with_seed(4, 3, Seed::Random(3)).unwrap();
        let before = u.clone();
        assert_eq!(
            u.toggle(3, 0),
            Err(UniverseError::OutOfBounds { row: 3, col: 0, width: 4, height: 3 })
        );
        assert!(matches!(u.toggle(0, 4), Err(UniverseError::OutOfBounds { .. })));
        assert_eq!(u, before);
    }

    #[test_log::test]
    fn blinker_oscillates() {
        let mut u: Universe = Universe::new(5, 5).unwrap();
        u.place(&BLINKER, 2, 1).unwrap();
        assert_eq!(alive(&u), vec![(2, 1), (2, 2), (2, 3)]);

        u.tick();
        assert_eq!(alive(&u), vec![(1, 2), (2, 2), (3, 2)]);

        u.tick();
        assert_eq!(alive(&u), vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(u.generation(), 2);
    }

    #[test_log::test]
    fn neighbour_count_wraps_corners() {
        let mut u: Universe = Universe::new(3, 3).unwrap();
        u.toggle(0, 0).unwrap();
        assert_eq!(u.live_neighbor_count(0, 0), Ok(0));
        u.toggle(2, 2).unwrap();
        assert_eq!(u.live_neighbor_count(0, 0), Ok(1));
        assert_eq!(u.live_neighbor_count(2, 2), Ok(1));
        assert!(u.live_neighbor_count(3, 0).is_err());
    }

    #[test_log::test]
    fn glider_wraps_around_the_torus() {
        let mut u: Universe = Universe::new(8, 8).unwrap();
        u.place(&GLIDER, 0, 0).unwrap();
        let start = u.clone();
        // A glider moves one cell diagonally every four generations.
        for _ in 0..32 {
            u.tick();
        }
        assert_eq!(u.cells().as_bytes(), start.cells().as_bytes());
        assert_eq!(u.population(), 5);
    }

    #[test_log::test]
    fn place_and_set_check_bounds() {
        let mut u: Universe = Universe::new(4, 4).unwrap();
        assert!(u.place(&GLIDER, 4, 0).is_err());
        assert!(u.set(0, 9, Cell::Alive).is_err());
        assert_eq!(u.population(), 0);

        u.set(1, 1, Cell::Alive).unwrap();
        u.set(1, 1, Cell::Alive).unwrap();
        assert_eq!(u.population(), 1);
        u.set(1, 1, Cell::Dead).unwrap();
        assert_eq!(u.population(), 0);
    }

    #[test_log::test]
    fn clear_resets_generation() {
        let mut u: Universe = Universe::with_seed(6, 6, Seed::Alternating).unwrap();
        u.tick();
        u.tick();
        u.clear();
        assert_eq!(u.population(), 0);
        assert_eq!(u.generation(), 0);
    }

    #[test_log::test]
    fn tick_agrees_with_neighbour_counts() {
        for (w, h) in [(1, 1), (1, 5), (2, 2), (3, 7), (9, 4)] {
            let mut u: Universe<ByteCells> = Universe::with_seed(w, h, Seed::Random(11)).unwrap();
            for _ in 0..3 {
                let expected: Vec<Cell> = (0..h)
                    .flat_map(|row| (0..w).map(move |col| (row, col)))
                    .map(|(row, col)| {
                        next_state(u.get(row, col).unwrap(), u.live_neighbor_count(row, col).unwrap())
                    })
                    .collect();
                u.tick();
                let actual: Vec<Cell> = u.cells().iter_cells().map(|(_, _, c)| c).collect();
                assert_eq!(actual, expected, "{w}x{h} at generation {}", u.generation());
            }
        }
    }

    #[test_log::test]
    fn display_draws_rows() {
        let mut u: Universe = Universe::new(3, 2).unwrap();
        u.toggle(0, 0).unwrap();
        u.toggle(1, 2).unwrap();
        assert_eq!(u.render(), "◼◻◻\n◻◻◼\n");
    }
}
