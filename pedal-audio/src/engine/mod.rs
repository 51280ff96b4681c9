//! The sample dispatcher: the fixed-period pipeline run in the interrupt
//! context.
//!
//! [`PedalEngine::tick`] is called once per 50 µs sample period and must
//! finish well inside it. The whole path is lock-free and allocation-free,
//! and every loop is fixed-iteration: a tick performs one shared-state
//! read per field, at most one delay-line flush (only on the tick that
//! consumes a transition request), one effect dispatch, and one PWM
//! encode. Missing the deadline is an audio glitch, not a recoverable
//! error, so nothing here can block or retry.

use crate::dsp::helpers::apply_volume;
use crate::dsp::DelayLine;
use crate::effect::{EffectProcessor, ProcessCtx};
use crate::effects::{Distortion, Echo, Octaver, ReverbDelay, ReverbStyle, Sinewave};
use crate::io::pwm::{self, PwmPair};
use crate::state::{EffectMode, SharedControlState};

#[cfg(test)]
mod integration_tests;

/// Owns the delay line and every effect processor; dispatches one sample
/// per tick to whichever processor the shared state selects.
pub struct PedalEngine {
    delay: DelayLine,
    echo: Echo,
    reverb: ReverbDelay,
    octaver: Octaver,
    distortion: Distortion,
    sinewave: Sinewave,
}

impl PedalEngine {
    /// Build the engine with every effect at its fixed default parameters.
    pub fn new() -> Self {
        PedalEngine {
            delay: DelayLine::new(),
            echo: Echo::new(),
            reverb: ReverbDelay::new(),
            octaver: Octaver::new(),
            distortion: Distortion::new(),
            sinewave: Sinewave::new(),
        }
    }

    /// Process one raw input sample (`[0, 1023]`) into a PWM duty pair.
    ///
    /// Call from the sample-rate interrupt, and only from there: the
    /// engine is the exclusive owner of the delay line and effect state.
    pub fn tick(&mut self, shared: &SharedControlState, raw_input: u16) -> PwmPair {
        // A requested transition flushes stale audio before the first
        // sample of the new mode is processed.
        if shared.take_delay_reset() {
            self.delay.clear();
            self.echo.reset();
            self.reverb.reset();
            self.octaver.reset();
            self.distortion.reset();
            self.sinewave.reset();
        }

        let volume = shared.master_volume() as f32 / crate::constants::SAMPLE_MAX as f32;
        let input = apply_volume(raw_input.min(crate::constants::SAMPLE_MAX), volume);

        let mut cx = ProcessCtx {
            delay: &mut self.delay,
            volume,
        };

        let output = match shared.mode() {
            // Unknown raw mode bytes decode to Clean, so the fallback path
            // is a volume-scaled pass-through, never a fault.
            EffectMode::Clean | EffectMode::Normal => input,
            EffectMode::ReverbEcho => {
                self.reverb.set_style(ReverbStyle::Smear);
                self.reverb.process(input, &mut cx)
            }
            EffectMode::Delay => {
                self.reverb.set_style(ReverbStyle::Repeats);
                self.reverb.process(input, &mut cx)
            }
            EffectMode::Echo => self.echo.process(input, &mut cx),
            EffectMode::Octaver => self.octaver.process(input, &mut cx),
            EffectMode::Distortion => self.distortion.process(input, &mut cx),
            EffectMode::Sinewave => self.sinewave.process(input, &mut cx),
        };

        pwm::encode(output)
    }
}

impl Default for PedalEngine {
    fn default() -> Self {
        Self::new()
    }
}
