//! The ~60 Hz run loop: input → frame acquisition → engine tick → render.

use std::sync::mpsc;
use std::time::Instant;

use gesture_engine::{Command, ControlState, EffectParams, Engine, EngineConfig};
use hand_signals::FrameObservation;

use crate::capture::CaptureWorker;
use crate::model::SceneModels;
use crate::source::HandSource;
use crate::visualizer::{AppEvent, Hud, Visualizer};
use crate::ViewerError;

// ════════════════════════════════════════════════════════════════════════════
// ViewerConfig
// ════════════════════════════════════════════════════════════════════════════

pub struct ViewerConfig {
    /// Points per scene model.
    pub points: usize,
    /// Start with gesture control enabled.
    pub hand_control: bool,
    pub fullscreen: bool,
    /// Run acquisition on the background capture worker even in
    /// simulation mode.  Hardware mode always uses the worker.
    pub use_worker: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        ViewerConfig {
            points: 1600,
            hand_control: true,
            fullscreen: false,
            use_worker: false,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Acquisition — direct per-tick poll, or freshest-value worker
// ════════════════════════════════════════════════════════════════════════════

enum Acquisition {
    Direct(Box<dyn HandSource>),
    Worker(CaptureWorker),
}

impl Acquisition {
    /// One frame for this tick.  The worker path never blocks: a missing
    /// or stale frame degrades to "no hands".
    fn acquire(&mut self) -> FrameObservation {
        match self {
            Acquisition::Direct(source) => source.poll(),
            Acquisition::Worker(worker) => worker.latest().unwrap_or_default(),
        }
    }

    fn shutdown(&mut self) {
        if let Acquisition::Worker(worker) = self {
            worker.stop();
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// run() — the main application loop
// ════════════════════════════════════════════════════════════════════════════

/// Run the viewer until the window closes or the user quits.
pub fn run(cfg: ViewerConfig) -> Result<(), ViewerError> {
    let (sim_tx, sim_rx) = mpsc::channel();
    let mut vis = Visualizer::new(cfg.fullscreen, sim_tx)?;

    let scene = SceneModels::generate(cfg.points);
    let engine_cfg = EngineConfig::default();
    let fragment_lifespan = engine_cfg.pcr.lifespan as f32;
    let mut engine = Engine::new(engine_cfg)?;
    if !cfg.hand_control {
        engine.apply(Command::SetHandControl(false));
    }

    let mut acquisition = make_acquisition(&cfg, sim_rx)?;

    let started = Instant::now();
    let mut show_preview = true;
    let mut status = String::new();

    tracing::info!(points = cfg.points, "viewer started");

    'frames: while vis.is_open() {
        for event in vis.poll_input() {
            match event {
                AppEvent::Quit => break 'frames,
                AppEvent::TogglePreview => show_preview = !show_preview,
                AppEvent::ToggleFullscreen => vis.toggle_fullscreen()?,
                AppEvent::ToggleHandControl => {
                    let enabled = !engine.hand_control();
                    engine.apply(Command::SetHandControl(enabled));
                }
                AppEvent::Command(command) => engine.apply(command),
            }
        }

        let frame = acquisition.acquire();
        let now = started.elapsed().as_secs_f64();
        engine.tick(&frame, now);

        status.clear();
        describe_into(&mut status, engine.state(), engine.fragments().len());

        let hud = Hud {
            status: &status,
            hand_control: engine.hand_control(),
            show_preview,
            cooldown: engine.cooldown(),
            auto_speed: engine.auto_rotation_speed(),
            fragment_lifespan,
        };
        vis.render(engine.state(), engine.fragments(), &scene, &frame, &hud);
    }

    acquisition.shutdown();
    tracing::info!("viewer stopped");
    Ok(())
}

fn make_acquisition(
    cfg: &ViewerConfig,
    sim_rx: mpsc::Receiver<crate::source::SimInput>,
) -> Result<Acquisition, ViewerError> {
    #[cfg(feature = "leap")]
    {
        // Hardware polling can outrun the frame budget; always decouple it.
        let _ = sim_rx;
        let source = crate::source::LeapHandSource::new()?;
        let _ = cfg;
        return Ok(Acquisition::Worker(CaptureWorker::spawn(source)));
    }

    #[cfg(not(feature = "leap"))]
    {
        let source = crate::source::SimHandSource::new(sim_rx);
        if cfg.use_worker {
            Ok(Acquisition::Worker(CaptureWorker::spawn(source)))
        } else {
            Ok(Acquisition::Direct(Box::new(source)))
        }
    }
}

/// One-line status for the bar at the bottom of the window.
fn describe_into(out: &mut String, state: &ControlState, population: usize) {
    use std::fmt::Write;

    match &state.effect {
        EffectParams::Bacteria {
            shake_intensity,
            opacity,
            ..
        } => {
            let _ = write!(
                out,
                "BACTERIA  SHAKE {:.2}  OPACITY {:.2}",
                shake_intensity, opacity
            );
        }
        EffectParams::Dna {
            separation,
            helicase,
        } => {
            let _ = write!(out, "DNA  SEPARATION {:.2}  HELICASE {:.2}", separation, helicase);
        }
        EffectParams::Enzyme {
            attachment,
            attached,
            ..
        } => {
            let _ = write!(out, "ENZYME  ATTACH {:.2}", attachment);
            if *attached {
                let _ = write!(out, "  DOCKED");
            }
        }
        EffectParams::Pcr { velocity, .. } => {
            let _ = write!(out, "PCR  VELOCITY {:.2}  FRAGMENTS {}", velocity, population);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use gesture_engine::Mode;

    #[test]
    fn status_line_names_the_active_mode() {
        let cfg = EngineConfig::default();
        let mut state = ControlState::new(&cfg);
        let mut s = String::new();
        describe_into(&mut s, &state, 0);
        assert!(s.starts_with("BACTERIA"));

        state.mode = Mode::Pcr;
        state.effect = EffectParams::Pcr {
            velocity: 1.25,
            spawned: Vec::new(),
        };
        s.clear();
        describe_into(&mut s, &state, 42);
        assert!(s.contains("FRAGMENTS 42"));
    }

    #[test]
    fn docked_enzyme_is_called_out() {
        let cfg = EngineConfig::default();
        let mut state = ControlState::new(&cfg);
        state.mode = Mode::Enzyme;
        state.effect = EffectParams::Enzyme {
            attachment: 1.0,
            position: cfg.enzyme_dock,
            attached: true,
        };
        let mut s = String::new();
        describe_into(&mut s, &state, 0);
        assert!(s.contains("DOCKED"));
    }
}
