//! # pedal-audio
//!
//! A `no_std`, zero-allocation effects engine for a single-channel
//! instrument pedal. An external timer interrupt delivers one 10-bit
//! sample every 50 µs; the engine applies the selected effect and returns
//! a dual-PWM duty pair that encodes the 10-bit result across two 8-bit
//! channels. A cooperative polling loop runs the debounced switch logic
//! and publishes mode/volume changes through lock-free shared state.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Shared state | [`state`] | Mode, volume, and activity flags crossing the ISR boundary |
//! | DSP | [`dsp`] | Delay line, wavetable oscillator, sample-domain math |
//! | Effects | [`effect`] / [`effects`] | `EffectProcessor` trait and the per-mode processors |
//! | Dispatch | [`engine`] | The per-tick pipeline run in the interrupt context |
//! | Controls | [`controls`] | Debounced switch state machine (polling context) |
//! | I/O | [`io`] | Dual-PWM output encoding, switch input sampling |
//!
//! ## Quick start
//!
//! ```ignore
//! use pedal_audio::controls::{ControlSurface, SwitchSample};
//! use pedal_audio::engine::PedalEngine;
//! use pedal_audio::state::SharedControlState;
//!
//! static SHARED: SharedControlState = SharedControlState::new();
//!
//! let mut engine = PedalEngine::new();
//! let mut surface = ControlSurface::new();
//!
//! // In the sample-rate timer ISR:
//! let pwm = engine.tick(&SHARED, adc_sample);
//! // write pwm.coarse / pwm.fine to the two PWM compare registers
//!
//! // In the idle loop:
//! surface.poll(&SHARED, &switch_levels, millis());
//! ```
//!
//! ## Audio parameters
//!
//! - **Sample rate:** 20 kHz ([`constants::SAMPLE_RATE_HZ`]), 50 µs budget per tick
//! - **Sample format:** unsigned 10-bit, 0–1023
//! - **Delay line:** 350 samples ([`constants::MAX_DELAY_SAMPLES`])
//! - **Output:** two 8-bit PWM duties per sample ([`io::pwm`])
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `switches` | yes | `embedded-hal` input-pin adapter for the control switches |
//! | `defmt` | no | structured logging of control-path events |

#![no_std]

pub mod constants;
pub mod state;
pub mod dsp;
pub mod effect;
pub mod effects;
pub mod engine;
pub mod controls;
pub mod io;
