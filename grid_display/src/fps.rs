// fps.rs - Frames-per-second over a sliding window

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const WINDOW: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FpsStats {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

pub struct FpsCounter {
    frames: VecDeque<f64>,
    last_frame: Instant,
}

impl FpsCounter {
    pub fn new(now: Instant) -> Self {
        Self {
            frames: VecDeque::with_capacity(WINDOW + 1),
            last_frame: now,
        }
    }

    /// Records a frame drawn at `now`.
    pub fn frame(&mut self, now: Instant) {
        let delta = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;
        if delta.is_zero() {
            return;
        }
        self.push(delta);
    }

    fn push(&mut self, delta: Duration) {
        self.frames.push_back(1.0 / delta.as_secs_f64());
        if self.frames.len() > WINDOW {
            self.frames.pop_front();
        }
    }

    /// Stats over the last 100 frames, or `None` before the first one.
    pub fn stats(&self) -> Option<FpsStats> {
        let latest = *self.frames.back()?;
        let (sum, min, max) = self.frames.iter().fold(
            (0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(sum, min, max), &fps| (sum + fps, min.min(fps), max.max(fps)),
        );
        Some(FpsStats {
            latest,
            mean: sum / self.frames.len() as f64,
            min,
            max,
        })
    }
}
