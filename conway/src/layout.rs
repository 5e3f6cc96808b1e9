// layout.rs - Storage layouts for the cell buffer
//
// Both layouts store cell `i = row * width + col` and expose their raw bytes,
// which is what a renderer reads. The byte order is part of the public contract:
//
//   BitCells  - ceil(N / 8) bytes, cell i is bit (i % 8) of byte (i / 8),
//               mask 1 << (i % 8). Padding bits past N are always zero.
//   ByteCells - N bytes, 0 = dead, 1 = alive.

use std::fmt::Debug;

/// A packed buffer of `N` binary cells addressed by linear index.
///
/// The universe is generic over this trait, so indexing and the transition
/// rule are written once for every layout.
pub trait Layout: Clone + Debug + PartialEq + Eq {
    /// Short name, used in logs.
    const NAME: &'static str;

    /// Number of bytes needed to hold `cells` cells.
    fn byte_len(cells: usize) -> usize;

    /// A buffer of `cells` dead cells.
    fn dead(cells: usize) -> Self;

    /// Whether cell `index` is alive. `index` must be below the cell count.
    fn get(&self, index: usize) -> bool;

    fn set(&mut self, index: usize, alive: bool);

    fn toggle(&mut self, index: usize) {
        let alive = self.get(index);
        self.set(index, !alive);
    }

    /// Marks every cell dead without reallocating.
    fn clear(&mut self);

    /// Number of live cells.
    fn count_alive(&self) -> usize;

    fn as_bytes(&self) -> &[u8];
}

/// One bit per cell, eight cells per byte, least significant bit first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitCells {
    bytes: Vec<u8>,
}

impl BitCells {
    #[inline]
    fn locate(index: usize) -> (usize, u8) {
        (index / 8, 1 << (index % 8))
    }
}

impl Layout for BitCells {
    const NAME: &'static str = "bits";

    #[inline]
    fn byte_len(cells: usize) -> usize {
        cells.div_ceil(8)
    }

    fn dead(cells: usize) -> Self {
        Self { bytes: vec![0; Self::byte_len(cells)] }
    }

    #[inline]
    fn get(&self, index: usize) -> bool {
        let (byte, mask) = Self::locate(index);
        self.bytes[byte] & mask != 0
    }

    #[inline]
    fn set(&mut self, index: usize, alive: bool) {
        let (byte, mask) = Self::locate(index);
        if alive {
            self.bytes[byte] |= mask;
        } else {
            self.bytes[byte] &= !mask;
        }
    }

    #[inline]
    fn toggle(&mut self, index: usize) {
        let (byte, mask) = Self::locate(index);
        self.bytes[byte] ^= mask;
    }

    fn clear(&mut self) {
        self.bytes.fill(0);
    }

    fn count_alive(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// One byte per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteCells {
    bytes: Vec<u8>,
}

impl Layout for ByteCells {
    const NAME: &'static str = "bytes";

    #[inline]
    fn byte_len(cells: usize) -> usize {
        cells
    }

    fn dead(cells: usize) -> Self {
        Self { bytes: vec![0; cells] }
    }

    #[inline]
    fn get(&self, index: usize) -> bool {
        self.bytes[index] != 0
    }

    #[inline]
    fn set(&mut self, index: usize, alive: bool) {
        self.bytes[index] = alive as u8;
    }

    fn clear(&mut self) {
        self.bytes.fill(0);
    }

    fn count_alive(&self) -> usize {
        self.bytes.iter().filter(|&&b| b != 0).count()
    }

    #[inline]
    fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
