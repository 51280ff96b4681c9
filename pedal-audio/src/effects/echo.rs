//! Echo: the dry signal summed with a single feedback delay tap.

use crate::constants::MAX_DELAY_SAMPLES;
use crate::dsp::helpers::{center, map_range, rebias};
use crate::effect::{EffectProcessor, ProcessCtx};

/// Fixed echo parameters.
#[derive(Debug, Clone, Copy)]
pub struct EchoParams {
    /// Delay-time control value in `[0, 1023]`, mapped onto the line depth.
    pub delay_time: u16,
    /// Fraction of the delayed signal fed back into the line.
    pub feedback: f32,
}

impl Default for EchoParams {
    /// 205-sample tap (control value 600) with 65% feedback.
    fn default() -> Self {
        EchoParams {
            delay_time: 600,
            feedback: 0.65,
        }
    }
}

/// Echo processor. Output intentionally sums dry and delayed signals; the
/// headroom is absorbed by the final saturation.
pub struct Echo {
    feedback: f32,
    /// Tap depth in samples behind the write pointer.
    depth: usize,
}

impl Echo {
    pub fn new() -> Self {
        Self::with_params(EchoParams::default())
    }

    pub fn with_params(params: EchoParams) -> Self {
        let depth = map_range(
            params.delay_time as i32,
            0,
            1023,
            1,
            (MAX_DELAY_SAMPLES - 1) as i32,
        ) as usize;
        Echo {
            feedback: params.feedback,
            depth,
        }
    }

    /// Tap depth in samples.
    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for Echo {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectProcessor for Echo {
    fn process(&mut self, input: u16, cx: &mut ProcessCtx<'_>) -> u16 {
        let dry = center(input);
        let delayed = center(cx.delay.read(self.depth));

        // Regenerate: the input plus a decaying copy of the tap.
        cx.delay.write(rebias(dry + delayed * self.feedback));

        rebias(dry + delayed)
    }
}
