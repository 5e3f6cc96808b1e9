// rule.rs - Conway's B3/S23 transition

use crate::Cell;

/// Next state of a cell given its current state and live neighbour count.
#[inline]
pub fn next_state(cell: Cell, live_neighbours: u8) -> Cell {
    match (cell, live_neighbours) {
        (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive, // Survival
        (Cell::Dead, 3) => Cell::Alive,                     // Birth
        _ => Cell::Dead,                                    // Death or stays dead
    }
}
