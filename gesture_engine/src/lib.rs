//! # gesture_engine
//!
//! Turns a noisy per-frame stream of hand-landmark observations into stable
//! application state: a debounced four-mode state machine plus continuous
//! camera and effect parameters, fanned out per mode.
//!
//! ## Hand → control mapping
//!
//! | Hand | Signal | Action |
//! |---|---|---|
//! | Right | palm movement | rotate camera (Δ × 150) |
//! | Right | pinch | zoom, smoothed toward `5 + 20·t`, clamped 2–50 |
//! | Left | pinch | per-mode effect (shake / strand split / enzyme dock) |
//! | Left | wrist velocity | PCR fragment replication |
//! | Both | right index tip on left wrist | cycle mode, 45-frame cooldown |
//!
//! ## Modes
//!
//! `Bacteria → Dna → Enzyme → Pcr → Bacteria …` — cyclic.  A confirmed touch
//! gesture advances the cycle and starts the cooldown; touches seen during
//! the cooldown are dropped, not queued, so rapid finger contact produces
//! one transition rather than many.
//!
//! The per-tick entry point is [`Engine::tick`]: feed it one
//! [`hand_signals::FrameObservation`] and read back the [`ControlState`]
//! snapshot for the renderer.  Keyboard/mouse pass-through goes in via
//! [`Command`].  The engine holds all mutable state explicitly — nothing
//! global — and runs identically with synthetic frames, so it is fully
//! testable without a camera.

pub mod camera;
pub mod config;
pub mod effects;
pub mod engine;
pub mod mode;

pub use camera::CameraController;
pub use config::{EngineConfig, EngineError, ModeThresholds, PcrParams, PinchRange};
pub use effects::{EffectController, EffectParams, Fragment, FragmentArena};
pub use engine::{Command, ControlState, Engine};
pub use mode::{Mode, ModeMachine};
