//! Octave shifter: a resampling read pointer chasing the write pointer.
//!
//! The write pointer advances one cell per tick (a plain recording of the
//! input); a separate fractional read pointer advances by the pitch step —
//! half speed for an octave down, double speed for an octave up — and the
//! fractional position drives a linear interpolation between the two
//! nearest cells. Dry and shifted signals are blended with a fixed split.
//! Blending operates directly in the unsigned domain: with complementary
//! weights the bias term cancels, so no centering is needed.

use crate::constants::MAX_DELAY_SAMPLES;
use crate::dsp::helpers::clamp_sample;
use crate::effect::{EffectProcessor, ProcessCtx};

/// Map the discretized pitch control band to a read-pointer step.
///
/// Top third of the control range reads double speed (octave up), the
/// middle third at unity, the bottom third at half speed (octave down).
pub fn pitch_step_for_band(band: u16) -> f32 {
    if band > 700 {
        2.0
    } else if band > 300 {
        1.0
    } else {
        0.5
    }
}

/// Fixed octaver parameters.
#[derive(Debug, Clone, Copy)]
pub struct OctaverParams {
    /// Pitch control band in `[0, 1023]`; see [`pitch_step_for_band`].
    pub pitch_band: u16,
    /// Shifted-signal fraction of the output blend.
    pub wet_mix: f32,
}

impl Default for OctaverParams {
    /// Unity pitch (mid-scale band) with an even wet/dry split.
    fn default() -> Self {
        OctaverParams {
            pitch_band: 512,
            wet_mix: 0.5,
        }
    }
}

/// Pitch-shifting processor.
pub struct Octaver {
    step: f32,
    wet_mix: f32,
    /// Fractional read position in `[0, MAX_DELAY_SAMPLES)`.
    read_pos: f32,
}

impl Octaver {
    pub fn new() -> Self {
        Self::with_params(OctaverParams::default())
    }

    pub fn with_params(params: OctaverParams) -> Self {
        Octaver {
            step: pitch_step_for_band(params.pitch_band),
            wet_mix: params.wet_mix,
            read_pos: 0.0,
        }
    }

    /// Read-pointer advance per tick.
    pub fn pitch_step(&self) -> f32 {
        self.step
    }
}

impl Default for Octaver {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectProcessor for Octaver {
    fn process(&mut self, input: u16, cx: &mut ProcessCtx<'_>) -> u16 {
        cx.delay.write(input);

        self.read_pos += self.step;
        while self.read_pos >= MAX_DELAY_SAMPLES as f32 {
            self.read_pos -= MAX_DELAY_SAMPLES as f32;
        }
        // Step is positive by construction; guards against a bad position
        // ever escaping the buffer.
        while self.read_pos < 0.0 {
            self.read_pos += MAX_DELAY_SAMPLES as f32;
        }

        let shifted = cx.delay.read_interpolated(self.read_pos);
        let mixed = input as f32 * (1.0 - self.wet_mix) + shifted * self.wet_mix;
        clamp_sample(mixed)
    }

    fn reset(&mut self) {
        self.read_pos = 0.0;
    }
}
