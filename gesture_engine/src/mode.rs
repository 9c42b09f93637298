//! The four-mode state machine and its touch-gesture trigger.

use hand_signals::{touch_distance, FrameObservation};

use crate::config::EngineConfig;

// ════════════════════════════════════════════════════════════════════════════
// Mode
// ════════════════════════════════════════════════════════════════════════════

/// The four mutually exclusive visualization states, in cycle order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Bacteria,
    Dna,
    Enzyme,
    Pcr,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Bacteria, Mode::Dna, Mode::Enzyme, Mode::Pcr];

    pub fn next(self) -> Mode {
        Mode::ALL[(self.index() + 1) % Mode::ALL.len()]
    }

    pub fn index(self) -> usize {
        match self {
            Mode::Bacteria => 0,
            Mode::Dna => 1,
            Mode::Enzyme => 2,
            Mode::Pcr => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::Bacteria => "BACTERIA",
            Mode::Dna => "DNA",
            Mode::Enzyme => "ENZYME",
            Mode::Pcr => "PCR",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// ModeMachine
// ════════════════════════════════════════════════════════════════════════════

/// Cooldown-gated, edge-triggered mode cycling.
///
/// A transition needs three things at once: an expired cooldown, both hands
/// in frame, and a *fresh* contact — the right index tip crossing inside
/// the touch threshold after having been outside it.  Holding the contact
/// does not retrigger, and a touch seen during the cooldown is dropped
/// rather than queued.
#[derive(Debug)]
pub struct ModeMachine {
    mode: Mode,
    cooldown_frames: u32,
    touch_held: bool,
}

impl ModeMachine {
    pub fn new() -> Self {
        ModeMachine {
            mode: Mode::Bacteria,
            cooldown_frames: 0,
            touch_held: false,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cooldown(&self) -> u32 {
        self.cooldown_frames
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown_frames > 0
    }

    /// Advance one tick.  Returns the new mode when a transition fires.
    pub fn tick(&mut self, frame: &FrameObservation, cfg: &EngineConfig) -> Option<Mode> {
        if self.cooldown_frames > 0 {
            self.cooldown_frames -= 1;
        }

        let touching = match (&frame.left, &frame.right) {
            (Some(left), Some(right)) => touch_distance(left, right) < cfg.touch_threshold,
            _ => false,
        };
        let fresh_contact = touching && !self.touch_held;
        self.touch_held = touching;

        if fresh_contact && self.cooldown_frames == 0 {
            let from = self.mode;
            self.mode = self.mode.next();
            self.cooldown_frames = cfg.cooldown_frames;
            tracing::debug!(from = from.name(), to = self.mode.name(), "touch gesture confirmed");
            return Some(self.mode);
        }
        None
    }
}

impl Default for ModeMachine {
    fn default() -> Self {
        ModeMachine::new()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_signals::synth;

    fn cfg() -> EngineConfig {
        EngineConfig::default()
    }

    #[test]
    fn cycle_returns_to_start_after_four() {
        let mut m = Mode::Bacteria;
        for _ in 0..4 {
            m = m.next();
        }
        assert_eq!(m, Mode::Bacteria);
    }

    #[test]
    fn touch_advances_exactly_one_mode() {
        let mut machine = ModeMachine::new();
        assert_eq!(machine.tick(&synth::touching_pair(), &cfg()), Some(Mode::Dna));
        assert_eq!(machine.mode(), Mode::Dna);
        assert_eq!(machine.cooldown(), 45);
    }

    #[test]
    fn held_touch_fires_once_over_ninety_frames() {
        let mut machine = ModeMachine::new();
        let frame = synth::touching_pair();
        let mut transitions = 0;
        let mut zero_at = None;
        for i in 0..90 {
            if machine.tick(&frame, &cfg()).is_some() {
                transitions += 1;
            }
            if zero_at.is_none() && transitions == 1 && machine.cooldown() == 0 {
                zero_at = Some(i);
            }
        }
        assert_eq!(transitions, 1);
        // Transition at frame 0 — the cooldown counts back down to zero
        // exactly 45 frames later.
        assert_eq!(zero_at, Some(45));
    }

    #[test]
    fn touch_during_cooldown_is_lost_not_queued() {
        let mut machine = ModeMachine::new();
        let touch = synth::touching_pair();
        let apart = synth::apart_pair();

        assert!(machine.tick(&touch, &cfg()).is_some());
        // Release, touch again mid-cooldown, release again.
        assert!(machine.tick(&apart, &cfg()).is_none());
        for _ in 0..10 {
            assert!(machine.tick(&touch, &cfg()).is_none());
        }
        // Run well past the cooldown with the hands apart — the dropped
        // touch must not fire retroactively.
        for _ in 0..60 {
            assert!(machine.tick(&apart, &cfg()).is_none());
        }
        assert_eq!(machine.mode(), Mode::Dna);
    }

    #[test]
    fn fresh_touch_after_cooldown_fires_again() {
        let mut machine = ModeMachine::new();
        let touch = synth::touching_pair();
        let apart = synth::apart_pair();

        assert_eq!(machine.tick(&touch, &cfg()), Some(Mode::Dna));
        for _ in 0..50 {
            machine.tick(&apart, &cfg());
        }
        assert_eq!(machine.tick(&touch, &cfg()), Some(Mode::Enzyme));
    }

    #[test]
    fn four_confirmed_touches_complete_the_cycle() {
        let mut machine = ModeMachine::new();
        let touch = synth::touching_pair();
        let apart = synth::apart_pair();
        for _ in 0..4 {
            assert!(machine.tick(&touch, &cfg()).is_some());
            for _ in 0..50 {
                machine.tick(&apart, &cfg());
            }
        }
        assert_eq!(machine.mode(), Mode::Bacteria);
    }

    #[test]
    fn single_hand_never_triggers() {
        let mut machine = ModeMachine::new();
        let frame = hand_signals::FrameObservation::one(synth::open_hand(
            hand_signals::Handedness::Right,
            (0.5, 0.5),
        ));
        for _ in 0..100 {
            assert!(machine.tick(&frame, &cfg()).is_none());
        }
        assert_eq!(machine.mode(), Mode::Bacteria);
    }
}
