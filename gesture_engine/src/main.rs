//! engine_demo — scripted frames through the engine, no window needed.
//!
//! Runs three short scenarios against a deterministic engine and prints the
//! resulting control state, so the whole gesture pipeline can be eyeballed
//! from a terminal.

use gesture_engine::{Command, EffectParams, Engine, EngineConfig};
use hand_signals::{synth, FrameObservation, Handedness};

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║        Gesture Engine — scripted control-state demo          ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    let mut engine = match Engine::with_seed(EngineConfig::default(), 1234) {
        Ok(e) => e,
        Err(e) => {
            eprintln!("Engine configuration rejected: {}", e);
            std::process::exit(1);
        }
    };

    zoom_scenario(&mut engine);
    mode_cycle_scenario(&mut engine);
    pcr_scenario(&mut engine);

    println!("  Done.");
    println!();
}

// ── Scenario 1: pinch-driven zoom convergence ────────────────────────────────

fn zoom_scenario(engine: &mut Engine) {
    println!("  [1] Right-hand pinch zoom — open pinch, target distance 25");
    let hand = synth::hand_with_pinch(Handedness::Right, (0.5, 0.5), 0.25);
    let frame = FrameObservation::one(hand);
    for i in 0..30 {
        let state = engine.tick(&frame, i as f64 / 60.0);
        if i % 6 == 0 {
            println!("      tick {:>2}  distance {:>6.2}", i, state.camera_distance);
        }
    }
    println!();
}

// ── Scenario 2: touch gesture cycles all four modes ──────────────────────────

fn mode_cycle_scenario(engine: &mut Engine) {
    println!("  [2] Cross-hand touch — four transitions return to the start");
    let touch = synth::touching_pair();
    let apart = synth::apart_pair();

    for round in 0..4 {
        engine.tick(&touch, round as f64);
        println!(
            "      touch {} → mode {:<8}  cooldown {}",
            round + 1,
            engine.mode().name(),
            engine.cooldown()
        );
        // Let the cooldown drain with the hands apart.
        for i in 0..50 {
            engine.tick(&apart, round as f64 + 0.1 + i as f64 / 60.0);
        }
    }
    println!();
}

// ── Scenario 3: PCR replication from a fast left hand ────────────────────────

fn pcr_scenario(engine: &mut Engine) {
    println!("  [3] PCR — fast left hand replicates fragments, idle decays them");
    // The cycle demo left the machine back in Bacteria; advance to PCR.
    let touch = synth::touching_pair();
    let apart = synth::apart_pair();
    for round in 0..3 {
        engine.tick(&touch, 100.0 + round as f64);
        for i in 0..50 {
            engine.tick(&apart, 100.0 + round as f64 + 0.1 + i as f64 / 60.0);
        }
    }

    for i in 0..40 {
        let x = (i % 20) as f32 * 0.05;
        let frame = FrameObservation::one(synth::open_hand(Handedness::Left, (x, 0.5)));
        let state = engine.tick(&frame, 200.0 + i as f64 / 60.0);
        if i % 10 == 9 {
            if let EffectParams::Pcr { velocity, .. } = &state.effect {
                let velocity = *velocity;
                let population = engine.fragments().len();
                println!(
                    "      tick {:>2}  velocity {:>5.2}  population {:>3}",
                    i,
                    velocity,
                    population
                );
            }
        }
    }

    println!("      hand withdrawn…");
    for i in 0..20 {
        engine.tick(&FrameObservation::empty(), 210.0 + i as f64 / 60.0);
    }
    println!("      population after idle decay: {}", engine.fragments().len());

    engine.apply(Command::ResetCamera);
    println!();
}
