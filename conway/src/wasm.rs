// wasm.rs - JavaScript bindings for the bit-packed universe
//
// JS reads the grid straight out of linear memory:
//
//   const ptr = universe.cells();
//   const cells = new Uint8Array(memory.buffer, ptr, universe.cells_len());
//   const alive = (cells[i >> 3] & (1 << (i & 7))) !== 0;  // i = row * width + col

use wasm_bindgen::prelude::*;

use crate::{BitCells, Seed, Universe};

#[wasm_bindgen(js_name = Universe)]
pub struct WasmUniverse {
    inner: Universe<BitCells>,
}

#[wasm_bindgen(js_class = Universe)]
impl WasmUniverse {
    /// An all-dead universe.
    pub fn new(width: u32, height: u32) -> Result<WasmUniverse, JsError> {
        let inner = Universe::new(width, height)?;
        Ok(Self { inner })
    }

    /// A universe filled from a seeded random generator.
    pub fn seeded(width: u32, height: u32, seed: u64) -> Result<WasmUniverse, JsError> {
        let inner = Universe::with_seed(width, height, Seed::Random(seed))?;
        Ok(Self { inner })
    }

    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    pub fn tick(&mut self) {
        self.inner.tick();
    }

    pub fn toggle_cell(&mut self, row: u32, col: u32) -> Result<(), JsError> {
        self.inner.toggle(row, col)?;
        Ok(())
    }

    /// Address of the live cell buffer in wasm memory.
    ///
    /// The pointer is only valid until the next call to `tick` or
    /// `toggle_cell`; both may swap or rewrite the buffer. Fetch it again
    /// after every mutation and never keep it across frames.
    pub fn cells(&self) -> *const u8 {
        self.inner.cells().as_ptr()
    }

    /// Length in bytes of the buffer behind [`WasmUniverse::cells`].
    pub fn cells_len(&self) -> usize {
        self.inner.cells().len()
    }

    pub fn render(&self) -> String {
        self.inner.render()
    }
}
