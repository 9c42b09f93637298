//! Left-hand effect control, dispatched on the current mode.
//!
//! Each mode reads a different signal out of the left hand: the Bacteria
//! shake rides an inverted pinch ramp, Dna strand separation a direct one,
//! the Enzyme docks on an inverted ramp, and Pcr replication follows wrist
//! velocity over the recent history window.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hand_signals::{
    lerp3, palm_centroid, pinch_distance, velocity, FrameObservation, HistoryBuffer, WRIST,
};

use crate::config::{EngineConfig, PcrParams};
use crate::mode::Mode;

// ════════════════════════════════════════════════════════════════════════════
// EffectParams
// ════════════════════════════════════════════════════════════════════════════

/// Per-mode effect output, one variant per mode.  Continuous fields keep
/// their last value while the driving hand is out of frame; only a mode
/// transition resets them.
#[derive(Clone, Debug)]
pub enum EffectParams {
    Bacteria {
        /// 0–1; the renderer scales its Gaussian vertex offsets by
        /// `intensity × 0.3`.
        shake_intensity: f32,
        /// 0 = white, 1 = fully red.
        color_blend: f32,
        opacity: f32,
    },
    Dna {
        /// 0–1; strands displace by ±factor × 10 along X.
        separation: f32,
        /// 0–1 travel of the helicase along the strand axis.
        helicase: f32,
    },
    Enzyme {
        attachment: f32,
        position: (f32, f32, f32),
        attached: bool,
    },
    Pcr {
        /// Wrist speed this tick, normalized units per second.
        velocity: f32,
        /// Fragments born this tick (at most `spawn_per_tick`).
        spawned: Vec<Fragment>,
    },
}

impl EffectParams {
    /// The neutral state a mode starts in right after a transition.
    pub fn initial(mode: Mode, cfg: &EngineConfig) -> Self {
        match mode {
            Mode::Bacteria => EffectParams::Bacteria {
                shake_intensity: 0.0,
                color_blend: 0.0,
                opacity: 1.0,
            },
            Mode::Dna => EffectParams::Dna {
                separation: 0.0,
                helicase: 0.0,
            },
            Mode::Enzyme => EffectParams::Enzyme {
                attachment: 0.0,
                position: cfg.enzyme_rest,
                attached: false,
            },
            Mode::Pcr => EffectParams::Pcr {
                velocity: 0.0,
                spawned: Vec::new(),
            },
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Fragment arena
// ════════════════════════════════════════════════════════════════════════════

/// One replicated DNA fragment.
#[derive(Clone, Copy, Debug)]
pub struct Fragment {
    pub position: (f32, f32, f32),
    /// Rotation angle in degrees around `axis`.
    pub angle: f32,
    pub axis: (f32, f32, f32),
    /// Remaining life in ticks; the fragment is culled at ≤ 0.
    pub life: i32,
}

/// Preallocated fragment population.  Spawning past the cap is refused and
/// culling uses swap-remove, so the backing storage never reallocates after
/// construction.
#[derive(Debug)]
pub struct FragmentArena {
    fragments: Vec<Fragment>,
    capacity: usize,
}

impl FragmentArena {
    pub fn new(capacity: usize) -> Self {
        FragmentArena {
            fragments: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn as_slice(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Spawn one fragment at a random pose, unless the population is full.
    pub fn spawn(&mut self, rng: &mut StdRng, pcr: &PcrParams) -> Option<Fragment> {
        if self.fragments.len() >= self.capacity {
            return None;
        }
        let s = pcr.scatter;
        let mut axis = (
            rng.gen_range(0.0..1.0f32),
            rng.gen_range(0.0..1.0f32),
            rng.gen_range(0.0..1.0f32),
        );
        let norm = (axis.0 * axis.0 + axis.1 * axis.1 + axis.2 * axis.2).sqrt();
        if norm > 1e-6 {
            axis = (axis.0 / norm, axis.1 / norm, axis.2 / norm);
        } else {
            axis = (0.0, 1.0, 0.0);
        }
        let fragment = Fragment {
            position: (
                rng.gen_range(-s..s),
                rng.gen_range(-s..s),
                rng.gen_range(-s..s),
            ),
            angle: rng.gen_range(0.0..360.0),
            axis,
            life: pcr.lifespan,
        };
        self.fragments.push(fragment);
        Some(fragment)
    }

    /// Age every fragment by `rate` and cull the dead in the same pass.
    pub fn decay(&mut self, rate: i32) {
        let mut i = 0;
        while i < self.fragments.len() {
            self.fragments[i].life -= rate;
            if self.fragments[i].life <= 0 {
                self.fragments.swap_remove(i);
            } else {
                i += 1;
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// EffectController
// ════════════════════════════════════════════════════════════════════════════

/// Owns the left-hand trackers (history window, fragment arena, RNG) and
/// writes the per-mode [`EffectParams`].
#[derive(Debug)]
pub struct EffectController {
    history: HistoryBuffer,
    arena: FragmentArena,
    rng: StdRng,
}

impl EffectController {
    pub fn new(cfg: &EngineConfig) -> Self {
        EffectController {
            history: HistoryBuffer::default(),
            arena: FragmentArena::new(cfg.pcr.max_fragments),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic variant for tests and scripted demos.
    pub fn with_seed(cfg: &EngineConfig, seed: u64) -> Self {
        EffectController {
            history: HistoryBuffer::default(),
            arena: FragmentArena::new(cfg.pcr.max_fragments),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn fragments(&self) -> &[Fragment] {
        self.arena.as_slice()
    }

    /// Per-tick effect update.  `now` is the engine clock in seconds, used
    /// only to timestamp the velocity history.
    pub fn update(
        &mut self,
        mode: Mode,
        frame: &FrameObservation,
        now: f64,
        effect: &mut EffectParams,
        cfg: &EngineConfig,
    ) {
        let left = frame.left.as_ref();
        match mode {
            Mode::Bacteria => {
                let hand = match left {
                    Some(h) => h,
                    None => return,
                };
                let ramp = cfg.thresholds(mode).effect_pinch;
                let intensity = ramp.normalize_inverted(pinch_distance(hand));
                *effect = EffectParams::Bacteria {
                    shake_intensity: intensity,
                    color_blend: intensity,
                    opacity: 1.0 - cfg.bacteria_opacity_drop * intensity,
                };
            }

            Mode::Dna => {
                let (mut separation, mut helicase) = match *effect {
                    EffectParams::Dna {
                        separation,
                        helicase,
                    } => (separation, helicase),
                    _ => (0.0, 0.0),
                };
                if let Some(hand) = left {
                    separation = cfg
                        .thresholds(mode)
                        .effect_pinch
                        .normalize(pinch_distance(hand));
                }
                if let (Some(l), Some(r)) = (frame.left.as_ref(), frame.right.as_ref()) {
                    let spread = (palm_centroid(r).0 - palm_centroid(l).0).abs();
                    helicase = cfg.helicase_spread.normalize(spread);
                }
                *effect = EffectParams::Dna {
                    separation,
                    helicase,
                };
            }

            Mode::Enzyme => {
                let hand = match left {
                    Some(h) => h,
                    None => return,
                };
                let attachment = cfg
                    .thresholds(mode)
                    .effect_pinch
                    .normalize_inverted(pinch_distance(hand));
                *effect = EffectParams::Enzyme {
                    attachment,
                    position: lerp3(cfg.enzyme_rest, cfg.enzyme_dock, attachment),
                    attached: attachment >= cfg.enzyme_attach_at,
                };
            }

            Mode::Pcr => {
                let vel = match left {
                    Some(hand) => {
                        let wrist = hand.landmarks[WRIST];
                        self.history.push((wrist.x, wrist.y), now);
                        velocity(&self.history)
                    }
                    None => {
                        // No gap-spanning velocities on reacquisition.
                        self.history.clear();
                        0.0
                    }
                };

                let mut spawned = Vec::new();
                if vel > cfg.pcr.spawn_velocity {
                    for _ in 0..cfg.pcr.spawn_per_tick {
                        if let Some(f) = self.arena.spawn(&mut self.rng, &cfg.pcr) {
                            spawned.push(f);
                        }
                    }
                }

                // Idle or absent hand → the population collapses quickly;
                // sustained motion keeps it alive.
                let rate = if vel < cfg.pcr.idle_velocity {
                    cfg.pcr.idle_decay
                } else {
                    cfg.pcr.active_decay
                };
                self.arena.decay(rate);

                *effect = EffectParams::Pcr {
                    velocity: vel,
                    spawned,
                };
            }
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
