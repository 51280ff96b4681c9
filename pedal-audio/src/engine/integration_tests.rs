//! End-to-end checks of the tick pipeline: shared state in, PWM pair out.

use crate::constants::MAX_DELAY_SAMPLES;
use crate::dsp::helpers::clamp_sample;
use crate::engine::PedalEngine;
use crate::io::pwm;
use crate::state::{EffectMode, SharedControlState};

/// Decode the 10-bit sample a tick produced.
fn decoded_tick(engine: &mut PedalEngine, shared: &SharedControlState, raw: u16) -> u16 {
    pwm::decode(engine.tick(shared, raw))
}

#[test]
fn clean_passthrough_obeys_the_volume_law() {
    let shared = SharedControlState::new();
    shared.set_mode(EffectMode::Clean);
    let mut engine = PedalEngine::new();

    for volume in [0u16, 1, 255, 512, 1000, 1023] {
        shared.set_master_volume(volume);
        for raw in (0u16..=1023).step_by(73) {
            let expected =
                clamp_sample(libm::roundf(raw as f32 * volume as f32 / 1023.0));
            assert_eq!(
                decoded_tick(&mut engine, &shared, raw),
                expected,
                "raw {raw}, volume {volume}"
            );
        }
    }
}

#[test]
fn normal_mode_matches_clean() {
    let shared = SharedControlState::new();
    shared.set_master_volume(700);
    let mut engine = PedalEngine::new();

    shared.set_mode(EffectMode::Clean);
    let clean = decoded_tick(&mut engine, &shared, 813);
    shared.set_mode(EffectMode::Normal);
    let normal = decoded_tick(&mut engine, &shared, 813);
    assert_eq!(clean, normal);
}

#[test]
fn unknown_mode_byte_falls_back_to_passthrough() {
    let shared = SharedControlState::new();
    shared.set_master_volume(1023);
    shared.set_mode_raw(0xAB);
    let mut engine = PedalEngine::new();

    assert_eq!(decoded_tick(&mut engine, &shared, 321), 321);
}

#[test]
fn out_of_range_input_is_saturated_not_rejected() {
    let shared = SharedControlState::new();
    shared.set_mode(EffectMode::Clean);
    shared.set_master_volume(1023);
    let mut engine = PedalEngine::new();

    assert_eq!(decoded_tick(&mut engine, &shared, u16::MAX), 1023);
}

#[test]
fn reset_request_flushes_the_line_before_the_next_sample() {
    let shared = SharedControlState::new();
    shared.set_mode(EffectMode::Echo);
    shared.set_master_volume(1023);
    let mut engine = PedalEngine::new();

    // Fill the delay line with real audio.
    for _ in 0..40 {
        engine.tick(&shared, 1023);
    }
    assert_ne!(engine.delay.write_pos(), 0);

    // A transition to a non-delay mode: the flush must be visible before
    // any sample of the new mode runs.
    shared.set_mode(EffectMode::Normal);
    shared.request_delay_reset();
    engine.tick(&shared, 512);

    assert_eq!(engine.delay.write_pos(), 0);
    for offset in 1..MAX_DELAY_SAMPLES {
        assert_eq!(engine.delay.read(offset), 0, "offset {offset}");
    }
}

#[test]
fn reset_request_rewinds_effect_state_too() {
    let shared = SharedControlState::new();
    shared.set_mode(EffectMode::Sinewave);
    shared.set_master_volume(1023);
    let mut engine = PedalEngine::new();

    let first = decoded_tick(&mut engine, &shared, 0);
    for _ in 0..13 {
        engine.tick(&shared, 0);
    }

    // Bypass and back: the generator restarts its cycle from phase zero.
    shared.request_delay_reset();
    assert_eq!(decoded_tick(&mut engine, &shared, 0), first);
}

#[test]
fn echo_survives_a_long_constant_drive() {
    let shared = SharedControlState::new();
    shared.set_mode(EffectMode::Echo);
    shared.set_master_volume(1023);
    let mut engine = PedalEngine::new();

    for _ in 0..20_000 {
        let out = decoded_tick(&mut engine, &shared, 800);
        assert!(out <= 1023);
    }
    for offset in 1..MAX_DELAY_SAMPLES {
        assert!(engine.delay.read(offset) <= 1023);
    }
}

#[test]
fn sinewave_ignores_input_and_scales_with_volume() {
    let shared = SharedControlState::new();
    shared.set_mode(EffectMode::Sinewave);
    shared.set_master_volume(0);
    let mut engine = PedalEngine::new();

    // Muted: mid-scale silence regardless of input.
    for raw in [0u16, 512, 1023] {
        assert_eq!(decoded_tick(&mut engine, &shared, raw), 511);
    }

    // Unmuted: the generator swings on its own.
    shared.set_master_volume(1023);
    let mut lowest = u16::MAX;
    let mut highest = 0;
    for _ in 0..50 {
        let out = decoded_tick(&mut engine, &shared, 512);
        lowest = lowest.min(out);
        highest = highest.max(out);
    }
    assert!(lowest < 100 && highest > 900, "swing {lowest}..{highest}");
}

#[test]
fn sub_modes_of_the_reverb_processor_diverge() {
    let drive = |mode: EffectMode| {
        let shared = SharedControlState::new();
        shared.set_mode(mode);
        shared.set_master_volume(1023);
        let mut engine = PedalEngine::new();
        let mut last = 0;
        for tick in 0..400u32 {
            let raw = if tick % 90 < 45 { 900 } else { 200 };
            last = decoded_tick(&mut engine, &shared, raw);
        }
        last
    };

    assert_ne!(drive(EffectMode::ReverbEcho), drive(EffectMode::Delay));
}

#[test]
fn every_mode_produces_in_domain_output() {
    let modes = [
        EffectMode::Clean,
        EffectMode::Normal,
        EffectMode::ReverbEcho,
        EffectMode::Delay,
        EffectMode::Echo,
        EffectMode::Octaver,
        EffectMode::Distortion,
        EffectMode::Sinewave,
    ];
    for mode in modes {
        let shared = SharedControlState::new();
        shared.set_mode(mode);
        shared.set_master_volume(900);
        let mut engine = PedalEngine::new();
        for tick in 0..1_000u32 {
            let raw = (tick * 37 % 1024) as u16;
            let out = decoded_tick(&mut engine, &shared, raw);
            assert!(out <= 1023, "{mode:?} produced {out}");
        }
    }
}

#[test]
fn pwm_round_trip_is_exact_for_every_sample() {
    for sample in 0u16..=1023 {
        assert_eq!(pwm::decode(pwm::encode(sample)), sample);
    }
}
