//! Conway's Game of Life on a fixed-size torus.
//!
//! [`Universe`] owns the grid and advances it with [`Universe::tick`]. A
//! renderer reads the current generation through [`Universe::cells`], which
//! lends out the live buffer instead of copying it. The buffer's byte order is
//! fixed by the [`Layout`] type parameter, documented in [`layout`].
//!
//! ```
//! use conway::{patterns::BLINKER, Universe};
//!
//! let mut universe: Universe = Universe::new(5, 5)?;
//! universe.place(&BLINKER, 2, 1)?;
//! universe.tick();
//!
//! let view = universe.cells();
//! assert_eq!(view.len(), 4); // 25 cells, one bit each
//! assert!(view.get(1, 2).unwrap().is_alive());
//! # Ok::<(), conway::UniverseError>(())
//! ```

mod cell;
mod error;
pub mod layout;
pub mod patterns;
mod rule;
mod torus;
mod universe;
mod view;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use cell::Cell;
pub use error::{Result, UniverseError};
pub use layout::{BitCells, ByteCells, Layout};
pub use patterns::{Pattern, Seed};
pub use rule::next_state;
pub use torus::Torus;
pub use universe::Universe;
pub use view::CellsView;
