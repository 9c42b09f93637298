//! Right-hand camera control: palm deltas rotate, pinch zooms.

use hand_signals::{exp_smooth, palm_centroid, pinch_distance, HandObservation};

use crate::config::EngineConfig;
use crate::engine::ControlState;
use crate::mode::Mode;

/// Maps right-hand signals onto the camera fields of [`ControlState`].
///
/// Rotation accumulates unbounded — the renderer wraps angles at draw time.
/// The tracked palm position resets to `None` whenever the hand leaves the
/// frame so reacquisition never produces a delta spanning the gap.
#[derive(Debug)]
pub struct CameraController {
    last_pos: Option<(f32, f32)>,
    speed_idx: usize,
}

impl CameraController {
    pub fn new() -> Self {
        CameraController {
            last_pos: None,
            // 0.2°/tick, the middle of the selectable speed set.
            speed_idx: 1,
        }
    }

    pub fn auto_rotation_speed(&self, cfg: &EngineConfig) -> f32 {
        cfg.auto_rotation_speeds[self.speed_idx]
    }

    /// Step to the next auto-rotation speed, wrapping around the set.
    pub fn cycle_auto_rotation(&mut self, cfg: &EngineConfig) -> f32 {
        self.speed_idx = (self.speed_idx + 1) % cfg.auto_rotation_speeds.len();
        self.auto_rotation_speed(cfg)
    }

    /// Put the camera back at its startup pose.
    pub fn reset(&mut self, state: &mut ControlState, cfg: &EngineConfig) {
        state.camera_distance = cfg.initial_distance;
        state.camera_rotation_x = 0.0;
        state.camera_rotation_y = 0.0;
        self.last_pos = None;
    }

    /// Per-tick camera update.
    ///
    /// Auto-rotation always runs.  Hand-driven rotation and zoom are
    /// suppressed while `suppressed` is set (the mode machine's cooldown),
    /// but the tracked palm position still follows the hand so control
    /// resumes without a jump.
    pub fn track(
        &mut self,
        hand: Option<&HandObservation>,
        mode: Mode,
        suppressed: bool,
        state: &mut ControlState,
        cfg: &EngineConfig,
    ) {
        state.camera_rotation_y += self.auto_rotation_speed(cfg);

        let hand = match hand {
            Some(h) => h,
            None => {
                self.last_pos = None;
                return;
            }
        };

        let pos = palm_centroid(hand);
        if !suppressed {
            if let Some((lx, ly)) = self.last_pos {
                state.camera_rotation_y += (pos.0 - lx) * cfg.rotation_gain;
                state.camera_rotation_x += (pos.1 - ly) * cfg.rotation_gain;
            }

            let t = cfg.thresholds(mode).zoom_pinch.normalize(pinch_distance(hand));
            let target = cfg.near_distance + cfg.zoom_span * t;
            let (lo, hi) = cfg.distance_limits;
            state.camera_distance =
                exp_smooth(state.camera_distance, target, cfg.zoom_alpha).clamp(lo, hi);
        }
        self.last_pos = Some(pos);
    }
}

impl Default for CameraController {
    fn default() -> Self {
        CameraController::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effects::EffectParams;
    use hand_signals::{synth, Handedness};

    fn cfg() -> EngineConfig {
        EngineConfig::default()
    }

    fn state(cfg: &EngineConfig) -> ControlState {
        ControlState::new(cfg)
    }

    fn still_cfg() -> EngineConfig {
        // Zero the auto-rotation speeds so deltas are easy to assert on.
        let mut c = EngineConfig::default();
        c.auto_rotation_speeds = [0.0; 4];
        c
    }

    #[test]
    fn palm_delta_rotates_by_gain() {
        let cfg = still_cfg();
        let mut st = state(&cfg);
        let mut cam = CameraController::new();

        let a = synth::open_hand(Handedness::Right, (0.5, 0.5));
        let b = synth::open_hand(Handedness::Right, (0.52, 0.51));
        cam.track(Some(&a), Mode::Bacteria, false, &mut st, &cfg);
        let (ry0, rx0) = (st.camera_rotation_y, st.camera_rotation_x);
        cam.track(Some(&b), Mode::Bacteria, false, &mut st, &cfg);

        assert!((st.camera_rotation_y - ry0 - 0.02 * 150.0).abs() < 1e-3);
        assert!((st.camera_rotation_x - rx0 - 0.01 * 150.0).abs() < 1e-3);
    }

    #[test]
    fn no_delta_across_a_missing_frame() {
        let cfg = still_cfg();
        let mut st = state(&cfg);
        let mut cam = CameraController::new();

        let a = synth::open_hand(Handedness::Right, (0.2, 0.5));
        let c = synth::open_hand(Handedness::Right, (0.8, 0.5));
        cam.track(Some(&a), Mode::Bacteria, false, &mut st, &cfg);
        cam.track(None, Mode::Bacteria, false, &mut st, &cfg);
        let ry = st.camera_rotation_y;
        // Reacquired far away — must not produce the 0.6 * 150 jump.
        cam.track(Some(&c), Mode::Bacteria, false, &mut st, &cfg);
        assert_eq!(st.camera_rotation_y, ry);
    }

    #[test]
    fn zoom_converges_to_target_without_overshoot() {
        let cfg = still_cfg();
        let mut st = state(&cfg);
        let mut cam = CameraController::new();

        // Fully open pinch → target distance 25.
        let hand = synth::hand_with_pinch(Handedness::Right, (0.5, 0.5), 0.25);
        let mut prev = st.camera_distance;
        for _ in 0..80 {
            cam.track(Some(&hand), Mode::Bacteria, false, &mut st, &cfg);
            assert!(st.camera_distance >= prev);
            assert!(st.camera_distance <= 25.0 + 1e-4);
            prev = st.camera_distance;
        }
        assert!((st.camera_distance - 25.0).abs() < 1e-2);
    }

    #[test]
    fn closed_pinch_zooms_in_to_near_distance() {
        let cfg = still_cfg();
        let mut st = state(&cfg);
        let mut cam = CameraController::new();
        let hand = synth::hand_with_pinch(Handedness::Right, (0.5, 0.5), 0.0);
        for _ in 0..80 {
            cam.track(Some(&hand), Mode::Bacteria, false, &mut st, &cfg);
        }
        assert!((st.camera_distance - 5.0).abs() < 1e-2);
        assert!(st.camera_distance >= 2.0);
    }

    #[test]
    fn suppression_freezes_rotation_but_keeps_tracking() {
        let cfg = still_cfg();
        let mut st = state(&cfg);
        let mut cam = CameraController::new();

        let a = synth::open_hand(Handedness::Right, (0.3, 0.5));
        let b = synth::open_hand(Handedness::Right, (0.6, 0.5));
        let c = synth::open_hand(Handedness::Right, (0.61, 0.5));
        cam.track(Some(&a), Mode::Bacteria, true, &mut st, &cfg);
        cam.track(Some(&b), Mode::Bacteria, true, &mut st, &cfg);
        assert_eq!(st.camera_rotation_y, 0.0);
        // First unsuppressed frame: only the small b→c delta applies.
        cam.track(Some(&c), Mode::Bacteria, false, &mut st, &cfg);
        assert!((st.camera_rotation_y - 0.01 * 150.0).abs() < 1e-3);
    }

    #[test]
    fn auto_rotation_speed_cycles_and_wraps() {
        let cfg = cfg();
        let mut cam = CameraController::new();
        assert_eq!(cam.auto_rotation_speed(&cfg), 0.2);
        assert_eq!(cam.cycle_auto_rotation(&cfg), 0.5);
        assert_eq!(cam.cycle_auto_rotation(&cfg), 1.0);
        assert_eq!(cam.cycle_auto_rotation(&cfg), 0.1);
        assert_eq!(cam.cycle_auto_rotation(&cfg), 0.2);
    }

    #[test]
    fn auto_rotation_advances_without_any_hand() {
        let cfg = cfg();
        let mut st = state(&cfg);
        let mut cam = CameraController::new();
        for _ in 0..10 {
            cam.track(None, Mode::Bacteria, false, &mut st, &cfg);
        }
        assert!((st.camera_rotation_y - 2.0).abs() < 1e-5);
    }

    #[test]
    fn reset_restores_startup_pose() {
        let cfg = cfg();
        let mut st = state(&cfg);
        st.camera_distance = 40.0;
        st.camera_rotation_x = 123.0;
        st.camera_rotation_y = -77.0;
        st.effect = EffectParams::initial(Mode::Bacteria, &cfg);
        let mut cam = CameraController::new();
        cam.reset(&mut st, &cfg);
        assert_eq!(st.camera_distance, 15.0);
        assert_eq!(st.camera_rotation_x, 0.0);
        assert_eq!(st.camera_rotation_y, 0.0);
    }
}
