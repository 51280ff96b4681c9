//! Distortion: pre-gain into a symmetric hard clipper.

use crate::dsp::helpers::{center, rebias};
use crate::effect::{EffectProcessor, ProcessCtx};

/// Fixed distortion parameters.
#[derive(Debug, Clone, Copy)]
pub struct DistortionParams {
    /// Gain applied to the centered signal before clipping.
    pub pre_gain: f32,
    /// Symmetric clip threshold on the centered signal; smaller is dirtier.
    pub threshold: f32,
}

impl Default for DistortionParams {
    /// 3.5× drive clipped at ±150.
    fn default() -> Self {
        DistortionParams {
            pre_gain: 3.5,
            threshold: 150.0,
        }
    }
}

/// Hard-clipping distortion processor.
pub struct Distortion {
    params: DistortionParams,
}

impl Distortion {
    pub fn new() -> Self {
        Self::with_params(DistortionParams::default())
    }

    pub fn with_params(params: DistortionParams) -> Self {
        Distortion { params }
    }
}

impl Default for Distortion {
    fn default() -> Self {
        Self::new()
    }
}

impl EffectProcessor for Distortion {
    fn process(&mut self, input: u16, _cx: &mut ProcessCtx<'_>) -> u16 {
        let driven = center(input) * self.params.pre_gain;
        let clipped = driven.clamp(-self.params.threshold, self.params.threshold);
        rebias(clipped)
    }
}
