//! Fixed-frequency sine generator — the one mode that ignores its input.
//!
//! Because the dispatcher's volume pre-scale acts on the (ignored) input,
//! the generator applies the master volume itself, to the centered
//! waveform, before re-biasing into the output domain.

use crate::constants::SAMPLE_MID;
use crate::dsp::helpers::rebias;
use crate::dsp::SineOscillator;
use crate::effect::{EffectProcessor, ProcessCtx};

/// Fixed generator parameters.
#[derive(Debug, Clone, Copy)]
pub struct SinewaveParams {
    /// Output frequency in Hz.
    pub frequency_hz: f32,
}

impl Default for SinewaveParams {
    /// Concert A (440 Hz).
    fn default() -> Self {
        SinewaveParams { frequency_hz: 440.0 }
    }
}

/// Wavetable sine generator processor.
pub struct Sinewave {
    osc: SineOscillator,
    step: f32,
}

impl Sinewave {
    pub fn new() -> Self {
        Self::with_params(SinewaveParams::default())
    }

    pub fn with_params(params: SinewaveParams) -> Self {
        Sinewave {
            osc: SineOscillator::new(),
            step: SineOscillator::step_for_freq(params.frequency_hz),
        }
    }
}

impl Default for Sinewave {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectProcessor for Sinewave {
    fn process(&mut self, _input: u16, cx: &mut ProcessCtx<'_>) -> u16 {
        self.osc.advance(self.step);
        let centered = self.osc.sample() - SAMPLE_MID;
        rebias(centered * cx.volume)
    }

    /// Deactivation resets the phase so the next activation starts a clean
    /// cycle.
    fn reset(&mut self) {
        self.osc.reset();
    }
}
