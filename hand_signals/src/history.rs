//! Bounded position history for velocity estimation.

use std::collections::VecDeque;

/// Default number of samples kept — roughly 80 ms of motion at 60 Hz.
pub const DEFAULT_CAPACITY: usize = 5;

/// One tracked palm/wrist sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrackedPoint {
    pub position: (f32, f32),
    /// Seconds, monotonic; the engine passes its own clock through.
    pub timestamp: f64,
}

/// Ring buffer of recent positions.  Pushing past capacity silently drops
/// the oldest entry.
#[derive(Clone, Debug)]
pub struct HistoryBuffer {
    samples: VecDeque<TrackedPoint>,
    capacity: usize,
}

impl HistoryBuffer {
    pub fn new(capacity: usize) -> Self {
        HistoryBuffer {
            samples: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, position: (f32, f32), timestamp: f64) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(TrackedPoint {
            position,
            timestamp,
        });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn oldest(&self) -> Option<&TrackedPoint> {
        self.samples.front()
    }

    pub fn newest(&self) -> Option<&TrackedPoint> {
        self.samples.back()
    }

    /// Forget everything.  Called when the tracked hand disappears so a
    /// reacquired hand does not produce a velocity spanning the gap.
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        HistoryBuffer::new(DEFAULT_CAPACITY)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
