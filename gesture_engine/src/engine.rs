//! The per-tick pipeline: one frame in, one control snapshot out.

use hand_signals::FrameObservation;

use crate::camera::CameraController;
use crate::config::{EngineConfig, EngineError};
use crate::effects::{EffectController, EffectParams, Fragment};
use crate::mode::{Mode, ModeMachine};

// ════════════════════════════════════════════════════════════════════════════
// ControlState
// ════════════════════════════════════════════════════════════════════════════

/// The engine's output, valid for exactly one frame.  The renderer reads
/// absolute values each tick — no deltas.
#[derive(Clone, Debug)]
pub struct ControlState {
    /// Clamped to the configured limits (2–50 by default).
    pub camera_distance: f32,
    /// Degrees, accumulated unbounded; wrap at render time.
    pub camera_rotation_x: f32,
    pub camera_rotation_y: f32,
    pub mode: Mode,
    pub effect: EffectParams,
}

impl ControlState {
    pub fn new(cfg: &EngineConfig) -> Self {
        ControlState {
            camera_distance: cfg.initial_distance,
            camera_rotation_x: 0.0,
            camera_rotation_y: 0.0,
            mode: Mode::Bacteria,
            effect: EffectParams::initial(Mode::Bacteria, cfg),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Command — keyboard / mouse pass-through
// ════════════════════════════════════════════════════════════════════════════

/// Direct controls that bypass gesture interpretation.  Mouse drag and the
/// right hand feed the same rotation accumulator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    ResetCamera,
    CycleAutoRotation,
    RotateBy { dx: f32, dy: f32 },
    ZoomBy(f32),
    SetHandControl(bool),
}

// ════════════════════════════════════════════════════════════════════════════
// Engine
// ════════════════════════════════════════════════════════════════════════════

/// Owns every piece of mutable control state and advances it one frame at a
/// time.  Constructible and runnable without any live camera — feed it
/// synthetic frames.
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    machine: ModeMachine,
    camera: CameraController,
    effects: EffectController,
    state: ControlState,
    hand_control: bool,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let state = ControlState::new(&config);
        let effects = EffectController::new(&config);
        Ok(Engine {
            config,
            machine: ModeMachine::new(),
            camera: CameraController::new(),
            effects,
            state,
            hand_control: true,
        })
    }

    /// Deterministic RNG variant for tests and scripted demos.
    pub fn with_seed(config: EngineConfig, seed: u64) -> Result<Self, EngineError> {
        config.validate()?;
        let state = ControlState::new(&config);
        let effects = EffectController::with_seed(&config, seed);
        Ok(Engine {
            config,
            machine: ModeMachine::new(),
            camera: CameraController::new(),
            effects,
            state,
            hand_control: true,
        })
    }

    /// Run one frame.  `now` is a monotonic clock in seconds.
    ///
    /// Order matters: the mode machine sees the frame first (a confirmed
    /// touch both switches mode and starts the cooldown), then the camera —
    /// suppressed for the whole cooldown, including the transition tick —
    /// then the per-mode effects.
    pub fn tick(&mut self, frame: &FrameObservation, now: f64) -> &ControlState {
        let empty = FrameObservation::empty();
        let frame = if self.hand_control { frame } else { &empty };

        if let Some(new_mode) = self.machine.tick(frame, &self.config) {
            self.state.mode = new_mode;
            self.state.effect = EffectParams::initial(new_mode, &self.config);
            if new_mode == Mode::Enzyme {
                // Look slightly from above while the enzyme docks.
                self.state.camera_rotation_x = self.config.enzyme_entry_tilt;
            }
        }

        self.camera.track(
            frame.right.as_ref(),
            self.state.mode,
            self.machine.is_cooling_down(),
            &mut self.state,
            &self.config,
        );
        self.effects
            .update(self.state.mode, frame, now, &mut self.state.effect, &self.config);

        &self.state
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::ResetCamera => {
                self.camera.reset(&mut self.state, &self.config);
                tracing::debug!("camera reset to startup pose");
            }
            Command::CycleAutoRotation => {
                let speed = self.camera.cycle_auto_rotation(&self.config);
                tracing::debug!(speed, "auto-rotation speed changed");
            }
            Command::RotateBy { dx, dy } => {
                self.state.camera_rotation_y += dx;
                self.state.camera_rotation_x += dy;
            }
            Command::ZoomBy(delta) => {
                let (lo, hi) = self.config.distance_limits;
                self.state.camera_distance = (self.state.camera_distance + delta).clamp(lo, hi);
            }
            Command::SetHandControl(enabled) => {
                self.hand_control = enabled;
                tracing::debug!(enabled, "hand control toggled");
            }
        }
    }

    // ── Accessors for the render loop ─────────────────────────────────────

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    pub fn mode(&self) -> Mode {
        self.state.mode
    }

    pub fn cooldown(&self) -> u32 {
        self.machine.cooldown()
    }

    pub fn fragments(&self) -> &[Fragment] {
        self.effects.fragments()
    }

    pub fn hand_control(&self) -> bool {
        self.hand_control
    }

    pub fn auto_rotation_speed(&self) -> f32 {
        self.camera.auto_rotation_speed(&self.config)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
