// view.rs - Borrowed, zero-copy view of a universe's live cell buffer

use std::ops::Deref;

use crate::layout::Layout;
use crate::torus::Torus;
use crate::Cell;

/// Read-only view into the live buffer of a [`Universe`](crate::Universe).
///
/// The view borrows the universe, so `tick`, `toggle` and every other
/// mutating call are rejected by the compiler while it is alive. Take a fresh
/// view after each mutation; the buffer may have been swapped.
///
/// The bytes follow the layout's documented order (see [`crate::layout`]).
#[derive(Debug)]
pub struct CellsView<'a, L: Layout> {
    cells: &'a L,
    torus: Torus,
}

impl<'a, L: Layout> CellsView<'a, L> {
    pub(crate) fn new(cells: &'a L, torus: Torus) -> Self {
        Self { cells, torus }
    }

    pub fn width(&self) -> u32 {
        self.torus.width()
    }

    pub fn height(&self) -> u32 {
        self.torus.height()
    }

    /// The raw buffer, aliasing the universe's storage.
    pub fn as_bytes(&self) -> &'a [u8] {
        self.cells.as_bytes()
    }

    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes().as_ptr()
    }

    /// Length of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of cells described by the buffer.
    pub fn cell_count(&self) -> usize {
        self.torus.len()
    }

    /// State of cell `index`, or `None` past the last cell.
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        (index < self.torus.len()).then(|| Cell::from(self.cells.get(index)))
    }

    /// State of cell (row, col), or `None` outside the grid.
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        self.torus
            .contains(row, col)
            .then(|| Cell::from(self.cells.get(self.torus.index(row, col))))
    }

    /// Iterates over every cell in row-major order as (row, col, cell).
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u32, Cell)> + 'a {
        let cells = self.cells;
        let torus = self.torus;
        (0..torus.len()).map(move |index| {
            let (row, col) = torus.coords(index);
            (row, col, Cell::from(cells.get(index)))
        })
    }
}

impl<L: Layout> Clone for CellsView<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: Layout> Copy for CellsView<'_, L> {}

impl<L: Layout> Deref for CellsView<'_, L> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<L: Layout> AsRef<[u8]> for CellsView<'_, L> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
