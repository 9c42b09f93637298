//! Background frame acquisition with last-value semantics.
//!
//! Hardware detectors can take longer than the 16 ms frame budget, so the
//! worker polls on its own thread and publishes into a single mutex-guarded
//! slot.  The render loop reads whatever is freshest without blocking;
//! intermediate frames are overwritten, never queued.  A position pair is
//! written and read under one lock, so the reader can never observe a torn
//! value.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use hand_signals::FrameObservation;

use crate::source::HandSource;

// ════════════════════════════════════════════════════════════════════════════
// LatestSlot
// ════════════════════════════════════════════════════════════════════════════

/// Single-slot mailbox: a publish replaces whatever was there.
#[derive(Debug)]
pub struct LatestSlot<T> {
    inner: Arc<Mutex<Option<T>>>,
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        LatestSlot {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    pub fn publish(&self, value: T) {
        if let Ok(mut slot) = self.inner.lock() {
            *slot = Some(value);
        }
    }

    /// Remove and return the current value, leaving the slot empty.
    pub fn take(&self) -> Option<T> {
        self.inner.lock().ok().and_then(|mut slot| slot.take())
    }
}

impl<T: Clone> LatestSlot<T> {
    /// Return a copy of the freshest value, leaving it in place.
    pub fn latest(&self) -> Option<T> {
        self.inner.lock().ok().and_then(|slot| slot.clone())
    }
}

impl<T> Clone for LatestSlot<T> {
    fn clone(&self) -> Self {
        LatestSlot {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        LatestSlot::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// CaptureWorker
// ════════════════════════════════════════════════════════════════════════════

/// Owns the acquisition thread.  `stop` is a plain flag the worker checks
/// every iteration; stopping joins the thread.
pub struct CaptureWorker {
    slot: LatestSlot<FrameObservation>,
    stop: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl CaptureWorker {
    pub fn spawn<S: HandSource + 'static>(mut source: S) -> Self {
        let slot = LatestSlot::new();
        let stop = Arc::new(AtomicBool::new(false));

        let worker_slot = slot.clone();
        let worker_stop = Arc::clone(&stop);
        let handle = thread::spawn(move || {
            tracing::debug!("capture worker started");
            while !worker_stop.load(Ordering::Relaxed) {
                worker_slot.publish(source.poll());
                thread::sleep(Duration::from_millis(4));
            }
            tracing::debug!("capture worker stopping");
        });

        CaptureWorker {
            slot,
            stop,
            handle: Some(handle),
        }
    }

    /// Freshest frame seen so far, if any.  Never blocks on the worker.
    pub fn latest(&self) -> Option<FrameObservation> {
        self.slot.latest()
    }

    /// Signal the worker and wait for it to finish.
    pub fn stop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for CaptureWorker {
    fn drop(&mut self) {
        self.stop();
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_signals::{synth, Handedness};

    #[test]
    fn publish_overwrites_older_values() {
        let slot = LatestSlot::new();
        slot.publish(1u32);
        slot.publish(2);
        slot.publish(3);
        assert_eq!(slot.latest(), Some(3));
    }

    #[test]
    fn take_empties_the_slot() {
        let slot = LatestSlot::new();
        slot.publish(7u32);
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.take(), None);
        assert_eq!(slot.latest(), None);
    }

    #[test]
    fn clones_share_the_same_slot() {
        let a: LatestSlot<u32> = LatestSlot::new();
        let b = a.clone();
        a.publish(9);
        assert_eq!(b.latest(), Some(9));
    }

    /// A source that stamps each frame with an increasing x position.
    struct CountingSource {
        n: u32,
    }

    impl HandSource for CountingSource {
        fn poll(&mut self) -> FrameObservation {
            self.n += 1;
            let x = (self.n as f32) * 1e-4;
            FrameObservation::one(synth::open_hand(Handedness::Right, (x, 0.5)))
        }
    }

    #[test]
    fn worker_publishes_progressively_fresher_frames() {
        let mut worker = CaptureWorker::spawn(CountingSource { n: 0 });

        let first = loop {
            if let Some(f) = worker.latest() {
                break f;
            }
            thread::sleep(Duration::from_millis(1));
        };
        thread::sleep(Duration::from_millis(40));
        let later = worker.latest().expect("worker already produced a frame");
        worker.stop();

        let x = |f: &FrameObservation| f.right.as_ref().map(|h| h.landmarks[0].x).unwrap_or(0.0);
        assert!(x(&later) > x(&first), "later frame must be fresher");
    }

    #[test]
    fn stop_joins_and_is_idempotent() {
        let mut worker = CaptureWorker::spawn(CountingSource { n: 0 });
        worker.stop();
        // A second stop must be a no-op, not a hang or panic.
        worker.stop();
    }
}
