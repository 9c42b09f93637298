//! Scalar signal extraction over landmark frames.
//!
//! Pure functions only.  Missing input degrades to a neutral value; nothing
//! here panics or produces a NaN.

use crate::history::HistoryBuffer;
use crate::landmark::{
    HandObservation, Landmark, INDEX_MCP, INDEX_TIP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP,
    WRIST,
};

/// 3D Euclidean distance between two landmarks.
pub fn landmark_distance(a: Landmark, b: Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    let dz = a.z - b.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Thumb tip ↔ index tip distance — the fundamental continuous gesture
/// signal (zoom, color, attachment all derive from it).
pub fn pinch_distance(hand: &HandObservation) -> f32 {
    landmark_distance(hand.landmarks[THUMB_TIP], hand.landmarks[INDEX_TIP])
}

/// Closed-hand test.
///
/// The reference length is the wrist → index-knuckle distance, so the test
/// scales with apparent hand size.  A hand is a fist iff every non-thumb
/// fingertip sits closer to the wrist than 0.8× that reference.
pub fn is_fist(hand: &HandObservation) -> bool {
    let wrist = hand.landmarks[WRIST];
    let threshold = 0.8 * landmark_distance(hand.landmarks[INDEX_MCP], wrist);

    [INDEX_TIP, MIDDLE_TIP, RING_TIP, PINKY_TIP]
        .iter()
        .all(|&tip| landmark_distance(hand.landmarks[tip], wrist) < threshold)
}

/// Distance between the right index tip and the left wrist — the global
/// mode-switch trigger signal.
pub fn touch_distance(left: &HandObservation, right: &HandObservation) -> f32 {
    landmark_distance(right.landmarks[INDEX_TIP], left.landmarks[WRIST])
}

/// Mean (x, y) of all 21 landmarks — the tracked position of a hand.
pub fn palm_centroid(hand: &HandObservation) -> (f32, f32) {
    let mut sx = 0.0;
    let mut sy = 0.0;
    for lm in &hand.landmarks {
        sx += lm.x;
        sy += lm.y;
    }
    let n = hand.landmarks.len() as f32;
    (sx / n, sy / n)
}

/// Straight-line speed over the history window, in normalized units per
/// second.  Needs more than two samples; with fewer (or a non-increasing
/// clock) the hand is considered still.
pub fn velocity(history: &HistoryBuffer) -> f32 {
    if history.len() <= 2 {
        return 0.0;
    }
    let (start, end) = match (history.oldest(), history.newest()) {
        (Some(s), Some(e)) => (s, e),
        _ => return 0.0,
    };
    let dt = (end.timestamp - start.timestamp) as f32;
    if dt <= 0.0 {
        return 0.0;
    }
    let dx = end.position.0 - start.position.0;
    let dy = end.position.1 - start.position.1;
    (dx * dx + dy * dy).sqrt() / dt
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::Handedness;
    use crate::synth;

    #[test]
    fn landmark_distance_345_triangle() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.3, 0.4, 0.0);
        assert!((landmark_distance(a, b) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn landmark_distance_uses_depth() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::new(0.0, 0.0, 0.2);
        assert!((landmark_distance(a, b) - 0.2).abs() < 1e-6);
    }

    #[test]
    fn pinch_distance_matches_requested_gap() {
        let hand = synth::hand_with_pinch(Handedness::Right, (0.5, 0.5), 0.07);
        assert!((pinch_distance(&hand) - 0.07).abs() < 1e-6);
    }

    #[test]
    fn open_hand_is_not_a_fist() {
        let hand = synth::open_hand(Handedness::Left, (0.5, 0.5));
        assert!(!is_fist(&hand));
    }

    #[test]
    fn curled_hand_is_a_fist() {
        let hand = synth::fist_hand(Handedness::Left, (0.5, 0.5));
        assert!(is_fist(&hand));
    }

    #[test]
    fn fist_threshold_scales_with_hand_size() {
        // The same curl pattern doubled in size must still read as a fist.
        let mut hand = synth::fist_hand(Handedness::Left, (0.0, 0.0));
        for lm in &mut hand.landmarks {
            lm.x *= 2.0;
            lm.y *= 2.0;
        }
        assert!(is_fist(&hand));
    }

    #[test]
    fn touching_pair_is_within_trigger_range() {
        let frame = synth::touching_pair();
        let (left, right) = (frame.left.unwrap(), frame.right.unwrap());
        assert!(touch_distance(&left, &right) < 0.06);
    }

    #[test]
    fn apart_pair_is_outside_trigger_range() {
        let frame = synth::apart_pair();
        let (left, right) = (frame.left.unwrap(), frame.right.unwrap());
        assert!(touch_distance(&left, &right) > 0.06);
    }

    #[test]
    fn palm_centroid_tracks_the_palm() {
        let a = synth::open_hand(Handedness::Right, (0.2, 0.5));
        let b = synth::open_hand(Handedness::Right, (0.6, 0.5));
        let (ax, _) = palm_centroid(&a);
        let (bx, _) = palm_centroid(&b);
        assert!((bx - ax - 0.4).abs() < 1e-5);
    }

    #[test]
    fn velocity_needs_more_than_two_samples() {
        let mut h = HistoryBuffer::default();
        h.push((0.0, 0.0), 0.0);
        h.push((3.0, 4.0), 1.0);
        assert_eq!(velocity(&h), 0.0);
    }

    #[test]
    fn velocity_spans_oldest_to_newest() {
        let mut h = HistoryBuffer::default();
        h.push((0.0, 0.0), 0.0);
        h.push((1.0, 1.0), 1.0);
        h.push((6.0, 8.0), 2.0);
        // |(6,8)| / 2s = 5.0 — the middle sample does not matter.
        assert!((velocity(&h) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn velocity_guards_zero_time_span() {
        let mut h = HistoryBuffer::default();
        h.push((0.0, 0.0), 1.0);
        h.push((0.5, 0.0), 1.0);
        h.push((1.0, 0.0), 1.0);
        assert_eq!(velocity(&h), 0.0);
    }
}
