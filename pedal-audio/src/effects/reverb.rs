//! Reverb/Delay: one delay-tap processor with two write/mix styles.
//!
//! Both styles share the same tap depth and feedback amount; they differ
//! in what is written back into the line and how wet and dry are blended:
//!
//! - [`ReverbStyle::Smear`] writes a complementary-weighted mix into the
//!   line (repeats blur together) and outputs 70% wet — the reverb-like
//!   sub-mode.
//! - [`ReverbStyle::Repeats`] writes input plus scaled tap and outputs the
//!   straight dry + wet sum — distinct, slowly decaying repeats.
//!
//! The sub-mode toggle switch selects the style at runtime; the control
//! state machine flushes the delay line on every accepted change.

use crate::constants::MAX_DELAY_SAMPLES;
use crate::dsp::helpers::{center, map_range, rebias};
use crate::effect::{EffectProcessor, ProcessCtx};

/// Which write/mix variant the processor runs.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReverbStyle {
    /// Smearing feedback with a 70% wet output blend.
    Smear,
    /// Distinct repeats: straight summation of dry and tap.
    Repeats,
}

/// Fixed reverb/delay parameters.
#[derive(Debug, Clone, Copy)]
pub struct ReverbParams {
    /// Delay-time control value in `[0, 1023]`, mapped onto the line depth.
    pub delay_time: u16,
    /// Fraction of the tap fed back into the line.
    pub feedback: f32,
    /// Wet fraction of the output blend (`Smear` style only).
    pub wet_mix: f32,
}

impl Default for ReverbParams {
    /// 171-sample tap (control value 500), 75% feedback, 70% wet.
    fn default() -> Self {
        ReverbParams {
            delay_time: 500,
            feedback: 0.75,
            wet_mix: 0.70,
        }
    }
}

/// Reverb/delay processor covering both sub-modes.
pub struct ReverbDelay {
    style: ReverbStyle,
    feedback: f32,
    wet_mix: f32,
    depth: usize,
}

impl ReverbDelay {
    pub fn new() -> Self {
        Self::with_params(ReverbParams::default())
    }

    pub fn with_params(params: ReverbParams) -> Self {
        let depth = map_range(
            params.delay_time as i32,
            0,
            1023,
            1,
            (MAX_DELAY_SAMPLES - 1) as i32,
        ) as usize;
        ReverbDelay {
            style: ReverbStyle::Smear,
            feedback: params.feedback,
            wet_mix: params.wet_mix,
            depth,
        }
    }

    /// Select the sub-mode for subsequent ticks.
    pub fn set_style(&mut self, style: ReverbStyle) {
        self.style = style;
    }

    pub fn style(&self) -> ReverbStyle {
        self.style
    }

    /// Tap depth in samples.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for ReverbDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectProcessor for ReverbDelay {
    fn process(&mut self, input: u16, cx: &mut ProcessCtx<'_>) -> u16 {
        let dry = center(input);
        let delayed = center(cx.delay.read(self.depth));

        let (line_write, output) = match self.style {
            ReverbStyle::Smear => (
                dry * (1.0 - self.feedback) + delayed * self.feedback,
                dry * (1.0 - self.wet_mix) + delayed * self.wet_mix,
            ),
            ReverbStyle::Repeats => (dry + delayed * self.feedback, dry + delayed),
        };

        cx.delay.write(rebias(line_write));
        rebias(output)
    }
}
