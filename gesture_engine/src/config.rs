//! Engine configuration.
//!
//! Per-mode behavior differences are expressed as data — one threshold table
//! row per mode — rather than duplicated control paths.  The defaults are
//! the tuned production values; a config is validated once at engine
//! construction so the per-frame normalizations never divide by zero.

use crate::mode::Mode;

// ════════════════════════════════════════════════════════════════════════════
// PinchRange
// ════════════════════════════════════════════════════════════════════════════

/// Input range for normalizing a raw distance signal into `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchRange {
    pub min: f32,
    pub max: f32,
}

impl PinchRange {
    pub const fn new(min: f32, max: f32) -> Self {
        PinchRange { min, max }
    }

    /// Clamp-normalize `d`: 0 at or below `min`, 1 at or above `max`,
    /// linear in between.  A degenerate range yields 0 rather than NaN.
    pub fn normalize(&self, d: f32) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((d - self.min) / span).clamp(0.0, 1.0)
    }

    /// Inverted mapping: 1 at or below `min` (tight pinch = full effect),
    /// 0 at or above `max`.
    pub fn normalize_inverted(&self, d: f32) -> f32 {
        1.0 - self.normalize(d)
    }

    fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.max > self.min
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Per-mode threshold table
// ════════════════════════════════════════════════════════════════════════════

/// The two pinch ranges a mode cares about: one for the right-hand zoom,
/// one for the left-hand effect signal.
#[derive(Clone, Copy, Debug)]
pub struct ModeThresholds {
    pub zoom_pinch: PinchRange,
    pub effect_pinch: PinchRange,
}

// ════════════════════════════════════════════════════════════════════════════
// PCR fragment parameters
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug)]
pub struct PcrParams {
    /// Wrist speed above which fragments replicate.
    pub spawn_velocity: f32,
    /// Wrist speed below which the hand counts as idle.
    pub idle_velocity: f32,
    /// New fragments per tick while replicating.
    pub spawn_per_tick: usize,
    /// Hard population cap.
    pub max_fragments: usize,
    /// Initial fragment life, in ticks.
    pub lifespan: i32,
    /// Life lost per tick while the hand is idle or absent.
    pub idle_decay: i32,
    /// Life lost per tick while the hand is actively moving.
    pub active_decay: i32,
    /// Fragments scatter uniformly within ±scatter on each axis.
    pub scatter: f32,
}

impl Default for PcrParams {
    fn default() -> Self {
        PcrParams {
            spawn_velocity: 0.05,
            idle_velocity: 0.01,
            spawn_per_tick: 2,
            max_fragments: 200,
            lifespan: 180,
            idle_decay: 10,
            active_decay: 1,
            scatter: 10.0,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// EngineConfig
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Right-index-tip to left-wrist distance that confirms the
    /// mode-switch touch.
    pub touch_threshold: f32,
    /// Refractory period after a confirmed touch, in ticks.
    pub cooldown_frames: u32,
    /// Palm-delta → rotation-degrees gain.
    pub rotation_gain: f32,
    /// Exponential smoothing weight for the camera distance.
    pub zoom_alpha: f32,
    /// Camera distance at a fully closed pinch.
    pub near_distance: f32,
    /// Distance added at a fully open pinch.
    pub zoom_span: f32,
    /// Hard camera distance clamp.
    pub distance_limits: (f32, f32),
    pub initial_distance: f32,
    /// Selectable auto-rotation speeds, degrees per tick.
    pub auto_rotation_speeds: [f32; 4],
    /// X tilt applied on entering Enzyme mode, degrees.
    pub enzyme_entry_tilt: f32,
    /// Enzyme position at attachment 0 / 1.
    pub enzyme_rest: (f32, f32, f32),
    pub enzyme_dock: (f32, f32, f32),
    /// Attachment factor at which the enzyme counts as docked.
    pub enzyme_attach_at: f32,
    /// How much opacity the bacteria loses at full pinch intensity.
    pub bacteria_opacity_drop: f32,
    /// Inter-palm horizontal spread driving the helicase travel.
    pub helicase_spread: PinchRange,
    /// Indexed by `Mode::index()`.
    pub thresholds: [ModeThresholds; 4],
    pub pcr: PcrParams,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let zoom = PinchRange::new(0.02, 0.20);
        EngineConfig {
            touch_threshold: 0.06,
            cooldown_frames: 45,
            rotation_gain: 150.0,
            zoom_alpha: 0.4,
            near_distance: 5.0,
            zoom_span: 20.0,
            distance_limits: (2.0, 50.0),
            initial_distance: 15.0,
            auto_rotation_speeds: [0.1, 0.2, 0.5, 1.0],
            enzyme_entry_tilt: 30.0,
            enzyme_rest: (0.0, 5.0, 1.0),
            enzyme_dock: (0.0, 1.0, 1.0),
            enzyme_attach_at: 0.99,
            bacteria_opacity_drop: 0.6,
            helicase_spread: PinchRange::new(0.25, 0.8),
            thresholds: [
                // Bacteria: tight inverted ramp — closing the pinch shakes.
                ModeThresholds {
                    zoom_pinch: zoom,
                    effect_pinch: PinchRange::new(0.015, 0.1),
                },
                // Dna: pinch opens the strands.
                ModeThresholds {
                    zoom_pinch: zoom,
                    effect_pinch: PinchRange::new(0.02, 0.17),
                },
                // Enzyme: inverted — closing the pinch docks the enzyme.
                ModeThresholds {
                    zoom_pinch: zoom,
                    effect_pinch: PinchRange::new(0.02, 0.12),
                },
                // Pcr: effects are velocity-driven; the pinch row is only
                // used for zoom.
                ModeThresholds {
                    zoom_pinch: zoom,
                    effect_pinch: PinchRange::new(0.02, 0.17),
                },
            ],
            pcr: PcrParams::default(),
        }
    }
}

impl EngineConfig {
    pub fn thresholds(&self, mode: Mode) -> &ModeThresholds {
        &self.thresholds[mode.index()]
    }

    /// Check every range that later feeds a division or clamp.
    pub fn validate(&self) -> Result<(), EngineError> {
        for (i, row) in self.thresholds.iter().enumerate() {
            if !row.zoom_pinch.is_valid() {
                return Err(EngineError::InvalidPinchRange {
                    context: Mode::ALL[i].name(),
                    min: row.zoom_pinch.min,
                    max: row.zoom_pinch.max,
                });
            }
            if !row.effect_pinch.is_valid() {
                return Err(EngineError::InvalidPinchRange {
                    context: Mode::ALL[i].name(),
                    min: row.effect_pinch.min,
                    max: row.effect_pinch.max,
                });
            }
        }
        if !self.helicase_spread.is_valid() {
            return Err(EngineError::InvalidPinchRange {
                context: "helicase spread",
                min: self.helicase_spread.min,
                max: self.helicase_spread.max,
            });
        }
        let (lo, hi) = self.distance_limits;
        if !(lo.is_finite() && hi.is_finite() && lo < hi) {
            return Err(EngineError::InvalidDistanceLimits(lo, hi));
        }
        if !(self.zoom_alpha > 0.0 && self.zoom_alpha <= 1.0) {
            return Err(EngineError::InvalidSmoothingWeight(self.zoom_alpha));
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// EngineError
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("invalid pinch range for {context}: min {min} must lie below max {max}")]
    InvalidPinchRange {
        context: &'static str,
        min: f32,
        max: f32,
    },

    #[error("camera distance limits out of order: {0} .. {1}")]
    InvalidDistanceLimits(f32, f32),

    #[error("smoothing weight {0} outside (0, 1]")]
    InvalidSmoothingWeight(f32),
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let mut cfg = EngineConfig::default();
        cfg.thresholds[0].effect_pinch = PinchRange::new(0.1, 0.015);
        assert!(matches!(
            cfg.validate(),
            Err(EngineError::InvalidPinchRange { .. })
        ));
    }

    #[test]
    fn each_mode_has_its_own_effect_range() {
        let cfg = EngineConfig::default();
        assert_eq!(
            cfg.thresholds(Mode::Bacteria).effect_pinch,
            PinchRange::new(0.015, 0.1)
        );
        assert_eq!(
            cfg.thresholds(Mode::Dna).effect_pinch,
            PinchRange::new(0.02, 0.17)
        );
        assert_eq!(
            cfg.thresholds(Mode::Enzyme).effect_pinch,
            PinchRange::new(0.02, 0.12)
        );
    }

    #[test]
    fn normalize_saturates_at_both_ends() {
        let r = PinchRange::new(0.02, 0.20);
        assert_eq!(r.normalize(0.0), 0.0);
        assert_eq!(r.normalize(0.02), 0.0);
        assert_eq!(r.normalize(0.20), 1.0);
        assert_eq!(r.normalize(0.5), 1.0);
        assert!((r.normalize(0.11) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn normalize_is_monotonic_between_the_ends() {
        let r = PinchRange::new(0.015, 0.1);
        let mut prev = r.normalize_inverted(0.0);
        let mut d = 0.0;
        while d < 0.12 {
            let v = r.normalize_inverted(d);
            assert!(v <= prev + 1e-6);
            assert!((0.0..=1.0).contains(&v));
            prev = v;
            d += 0.001;
        }
    }

    #[test]
    fn degenerate_range_yields_zero_not_nan() {
        let r = PinchRange::new(0.1, 0.1);
        assert_eq!(r.normalize(0.5), 0.0);
        assert!(!r.normalize(0.5).is_nan());
    }
}
