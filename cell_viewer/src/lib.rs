//! # cell_viewer
//!
//! Windowed viewer for the gesture engine: four molecular point-cloud
//! scenes driven by a dual-hand landmark stream.
//!
//! ## Hand controls
//!
//! | Hand | Gesture | Action |
//! |---|---|---|
//! | Right | move palm | rotate the model |
//! | Right | pinch | zoom |
//! | Left | pinch | per-mode effect (shake / split / dock) |
//! | Left | fast movement | replicate PCR fragments |
//! | Both | touch left wrist with right index | next mode |
//!
//! ## Keyboard (simulation mode)
//!
//! Without hand-tracking hardware the hands are synthetic and driven from
//! the keyboard:
//!
//! | Key | Effect |
//! |---|---|
//! | Arrows | move the right palm |
//! | `W` / `S` | open / close the right pinch |
//! | `I` `J` `K` `L` | move the left palm |
//! | `E` / `D` | open / close the left pinch |
//! | `T` (hold) | cross-hand touch — mode switch |
//! | `G` | curl / uncurl the left hand into a fist |
//! | `X` / `Z` | toggle left / right hand presence |
//!
//! Pass-through controls work in both modes: `C` preview panel, `H` hand
//! control on/off, `R` reset camera, `A` cycle auto-rotation, `F`
//! fullscreen, mouse drag rotates, scroll wheel zooms, `Q`/`Esc` quits.
//!
//! ## Feature flags
//!
//! * (default) — **Simulation mode**: keyboard drives synthetic hands.
//! * `leap` — **Hardware mode**: a LeapMotion controller supplies real
//!   landmark frames through the background capture worker.

pub mod app;
pub mod capture;
pub mod model;
pub mod source;
pub mod visualizer;

pub use app::{run, ViewerConfig};

/// Application-level error type.
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("window error: {0}")]
    Window(String),

    #[error(transparent)]
    Engine(#[from] gesture_engine::EngineError),

    #[cfg(feature = "leap")]
    #[error("hand-tracking device error: {0}")]
    Device(String),
}
