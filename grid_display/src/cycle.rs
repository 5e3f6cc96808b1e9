// cycle.rs - Detects when the run has settled into a repeating state

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const HISTORY: usize = 10;

/// Remembers hashes of the last ten generations' cell buffers.
#[derive(Debug, Default)]
pub struct CycleDetector {
    history: [u64; HISTORY],
    count: usize,
}

impl CycleDetector {
    /// Records a generation; returns true if it matches one of the last ten.
    pub fn observe(&mut self, cells: &[u8]) -> bool {
        let mut hasher = DefaultHasher::new();
        cells.hash(&mut hasher);
        let hash = hasher.finish();

        let seen = self.count.min(HISTORY);
        if self.history[..seen].contains(&hash) {
            return true;
        }
        self.history[self.count % HISTORY] = hash;
        self.count += 1;
        false
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }
}
