//! # hand_signals
//!
//! Data model and pure signal extraction for 21-point hand landmark frames.
//!
//! A detection backend (camera + model, or a keyboard simulator) produces one
//! [`FrameObservation`] per tick: up to one [`HandObservation`] per
//! handedness, each carrying 21 normalized landmarks in the standard hand
//! topology.  This crate turns those raw points into the scalar signals the
//! control layers consume:
//!
//! | Signal | Function | Used for |
//! |---|---|---|
//! | Pinch distance | [`pinch_distance`] | zoom, color, attachment |
//! | Palm centroid | [`palm_centroid`] | rotation deltas, tracked position |
//! | Cross-hand touch | [`touch_distance`] | mode-switch trigger |
//! | Closed fist | [`is_fist`] | discrete grab test |
//! | Velocity | [`velocity`] | fragment replication |
//!
//! Everything here is a pure function: no side effects, and a missing input
//! always yields a neutral value (`0.0` / `false`), never a panic or a NaN.

pub mod extract;
pub mod history;
pub mod landmark;
pub mod smooth;
pub mod synth;

pub use extract::{
    is_fist, landmark_distance, palm_centroid, pinch_distance, touch_distance, velocity,
};
pub use history::{HistoryBuffer, TrackedPoint};
pub use landmark::{
    FrameObservation, HandObservation, Handedness, Landmark, INDEX_MCP, INDEX_TIP, LANDMARK_COUNT,
    MIDDLE_MCP, MIDDLE_TIP, PINKY_TIP, RING_TIP, THUMB_TIP, WRIST,
};
pub use smooth::{exp_smooth, lerp, lerp3};
