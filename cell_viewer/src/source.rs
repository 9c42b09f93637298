//! Frame sources — real hardware and keyboard simulation.
//!
//! The engine only ever sees a [`FrameObservation`]; it does not know
//! whether the landmarks came from a tracking device or from the synthetic
//! hands below.

use std::sync::mpsc::Receiver;

use hand_signals::{synth, FrameObservation, HandObservation, Handedness, Landmark, INDEX_TIP, WRIST};

// ════════════════════════════════════════════════════════════════════════════
// HandSource trait — unified interface for hw and sim
// ════════════════════════════════════════════════════════════════════════════

/// Anything that can produce one landmark frame per call.
///
/// `poll` may block for up to one detector frame; a failed acquisition
/// degrades to an empty frame rather than an error.
pub trait HandSource: Send {
    fn poll(&mut self) -> FrameObservation;
}

// ════════════════════════════════════════════════════════════════════════════
// SimHandSource — keyboard-driven synthetic hands (always available)
// ════════════════════════════════════════════════════════════════════════════

/// Raw input event from the simulation window, applied to the synthetic
/// hand state on the next poll.
#[derive(Clone, Copy, Debug)]
pub enum SimInput {
    MoveRight { dx: f32, dy: f32 },
    MoveLeft { dx: f32, dy: f32 },
    /// Widen (positive) or tighten (negative) the right pinch.
    PinchRight(f32),
    PinchLeft(f32),
    /// While held, the right index tip rests on the left wrist.
    TouchHeld(bool),
    ToggleRight,
    ToggleLeft,
    ToggleLeftFist,
}

#[derive(Clone, Copy, Debug)]
struct SimHand {
    present: bool,
    palm: (f32, f32),
    pinch: f32,
    fist: bool,
}

/// Synthetic dual-hand state fed by [`SimInput`] events from the window.
///
/// Decoupling through a channel keeps the window event loop free of hand
/// logic and lets the source run behind the capture worker unchanged.
pub struct SimHandSource {
    rx: Receiver<SimInput>,
    left: SimHand,
    right: SimHand,
    touch: bool,
}

impl SimHandSource {
    pub fn new(rx: Receiver<SimInput>) -> Self {
        SimHandSource {
            rx,
            left: SimHand {
                present: true,
                palm: (0.32, 0.5),
                pinch: 0.12,
                fist: false,
            },
            right: SimHand {
                present: true,
                palm: (0.68, 0.5),
                pinch: 0.12,
                fist: false,
            },
            touch: false,
        }
    }

    fn apply(&mut self, input: SimInput) {
        match input {
            SimInput::MoveRight { dx, dy } => move_palm(&mut self.right, dx, dy),
            SimInput::MoveLeft { dx, dy } => move_palm(&mut self.left, dx, dy),
            SimInput::PinchRight(d) => adjust_pinch(&mut self.right, d),
            SimInput::PinchLeft(d) => adjust_pinch(&mut self.left, d),
            SimInput::TouchHeld(held) => self.touch = held,
            SimInput::ToggleRight => self.right.present = !self.right.present,
            SimInput::ToggleLeft => self.left.present = !self.left.present,
            SimInput::ToggleLeftFist => self.left.fist = !self.left.fist,
        }
    }

    fn build(&self, handedness: Handedness, hand: &SimHand) -> HandObservation {
        if hand.fist {
            synth::fist_hand(handedness, hand.palm)
        } else {
            synth::hand_with_pinch(handedness, hand.palm, hand.pinch)
        }
    }

    fn frame(&self) -> FrameObservation {
        let mut frame = FrameObservation::empty();
        if self.left.present {
            frame.left = Some(self.build(Handedness::Left, &self.left));
        }
        if self.right.present {
            frame.right = Some(self.build(Handedness::Right, &self.right));
        }

        // Held touch: plant the right index tip on the left wrist.
        if self.touch {
            if let (Some(left), Some(right)) = (&frame.left, &mut frame.right) {
                let wrist = left.landmarks[WRIST];
                right.landmarks[INDEX_TIP] = Landmark::new(wrist.x + 0.01, wrist.y + 0.01, 0.0);
            }
        }
        frame
    }
}

impl HandSource for SimHandSource {
    fn poll(&mut self) -> FrameObservation {
        while let Ok(input) = self.rx.try_recv() {
            self.apply(input);
        }
        self.frame()
    }
}

fn move_palm(hand: &mut SimHand, dx: f32, dy: f32) {
    hand.palm.0 = (hand.palm.0 + dx).clamp(0.05, 0.95);
    hand.palm.1 = (hand.palm.1 + dy).clamp(0.05, 0.95);
}

fn adjust_pinch(hand: &mut SimHand, delta: f32) {
    hand.pinch = (hand.pinch + delta).clamp(0.0, 0.3);
}

// ════════════════════════════════════════════════════════════════════════════
// LeapHandSource — real hardware (feature = "leap")
// ════════════════════════════════════════════════════════════════════════════

/// Frame source backed by a real LeapMotion controller.
///
/// Requires the `leap` feature flag and the LeapC shared library installed.
/// Palm-space millimetres are normalized into the [0,1] image space the
/// engine expects, and the four bones of each digit are walked to fill the
/// 21-point topology (wrist, then mcp→pip→dip→tip per finger).
#[cfg(feature = "leap")]
pub struct LeapHandSource {
    connection: leaprs::Connection,
}

#[cfg(feature = "leap")]
impl LeapHandSource {
    pub fn new() -> Result<Self, crate::ViewerError> {
        use leaprs::{Connection, ConnectionConfig};

        let mut connection = Connection::create(ConnectionConfig::default())
            .map_err(|e| crate::ViewerError::Device(format!("{:?}", e)))?;
        connection
            .open()
            .map_err(|e| crate::ViewerError::Device(format!("{:?}", e)))?;
        Ok(LeapHandSource { connection })
    }
}

#[cfg(feature = "leap")]
impl HandSource for LeapHandSource {
    fn poll(&mut self) -> FrameObservation {
        use leaprs::{Event, HandType};

        let msg = match self.connection.poll(100) {
            Ok(m) => m,
            Err(_) => return FrameObservation::empty(),
        };

        let mut out = FrameObservation::empty();
        if let Event::Tracking(frame) = msg.event() {
            for hand in frame.hands() {
                let handedness = match hand.hand_type() {
                    HandType::Left => Handedness::Left,
                    HandType::Right => Handedness::Right,
                };
                let observation = map_hand(&hand, handedness);
                match handedness {
                    Handedness::Left => out.left = Some(observation),
                    Handedness::Right => out.right = Some(observation),
                }
            }
        }
        out
    }
}

#[cfg(feature = "leap")]
fn map_hand(hand: &leaprs::Hand, handedness: Handedness) -> HandObservation {
    use hand_signals::LANDMARK_COUNT;

    let mut landmarks = [Landmark::default(); LANDMARK_COUNT];
    let palm = hand.palm().position();
    landmarks[WRIST] = normalize_mm(palm.x, palm.y - 60.0, palm.z);

    for (finger, digit) in hand.digits().enumerate().take(5) {
        let bones = [
            digit.metacarpal(),
            digit.proximal(),
            digit.intermediate(),
            digit.distal(),
        ];
        for (joint, bone) in bones.iter().enumerate() {
            let p = bone.next_joint();
            landmarks[1 + finger * 4 + joint] = normalize_mm(p.x, p.y, p.z);
        }
    }

    HandObservation {
        handedness,
        landmarks,
        confidence: 1.0,
    }
}

/// Leap interaction-box millimetres → normalized image coordinates.
/// Leap y points up; image y grows downward.
#[cfg(feature = "leap")]
fn normalize_mm(x: f32, y: f32, z: f32) -> Landmark {
    Landmark::new(
        (x / 400.0 + 0.5).clamp(0.0, 1.0),
        (1.0 - y / 400.0).clamp(0.0, 1.0),
        -z / 400.0,
    )
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use hand_signals::{is_fist, pinch_distance, touch_distance};
    use std::sync::mpsc;

    fn source_with(inputs: Vec<SimInput>) -> SimHandSource {
        let (tx, rx) = mpsc::channel();
        for input in inputs {
            tx.send(input).unwrap();
        }
        SimHandSource::new(rx)
    }

    #[test]
    fn both_hands_present_by_default() {
        let mut src = source_with(vec![]);
        let frame = src.poll();
        assert!(frame.has_both());
    }

    #[test]
    fn pinch_keys_change_the_pinch_distance() {
        let mut src = source_with(vec![SimInput::PinchRight(-0.08)]);
        let frame = src.poll();
        let right = frame.right.unwrap();
        assert!((pinch_distance(&right) - 0.04).abs() < 1e-6);
    }

    #[test]
    fn pinch_clamps_at_closed() {
        let mut src = source_with(vec![SimInput::PinchLeft(-1.0)]);
        let frame = src.poll();
        assert_eq!(pinch_distance(&frame.left.unwrap()), 0.0);
    }

    #[test]
    fn touch_key_produces_a_trigger_range_frame() {
        let mut src = source_with(vec![SimInput::TouchHeld(true)]);
        let frame = src.poll();
        let (left, right) = (frame.left.unwrap(), frame.right.unwrap());
        assert!(touch_distance(&left, &right) < 0.06);
    }

    #[test]
    fn releasing_touch_restores_separation() {
        let mut src = source_with(vec![SimInput::TouchHeld(true), SimInput::TouchHeld(false)]);
        let frame = src.poll();
        let (left, right) = (frame.left.unwrap(), frame.right.unwrap());
        assert!(touch_distance(&left, &right) > 0.06);
    }

    #[test]
    fn presence_toggles_empty_the_slots() {
        let mut src = source_with(vec![SimInput::ToggleLeft, SimInput::ToggleRight]);
        let frame = src.poll();
        assert!(frame.is_empty());
    }

    #[test]
    fn fist_toggle_curls_the_left_hand() {
        let mut src = source_with(vec![SimInput::ToggleLeftFist]);
        let frame = src.poll();
        assert!(is_fist(&frame.left.unwrap()));
    }

    #[test]
    fn palm_movement_clamps_to_frame_bounds() {
        let mut src = source_with(vec![SimInput::MoveRight { dx: 5.0, dy: -5.0 }]);
        let frame = src.poll();
        let right = frame.right.unwrap();
        let (cx, cy) = hand_signals::palm_centroid(&right);
        assert!(cx < 1.1 && cy > -0.1);
    }
}
