//! Core trait shared by all effect processors.

use crate::dsp::DelayLine;

/// Per-tick resources handed to the active effect processor.
///
/// Exactly one processor receives the context on a given tick; it has
/// exclusive use of the shared delay line for the duration of the call.
pub struct ProcessCtx<'a> {
    /// The single shared delay line, cleared on every mode transition.
    pub delay: &'a mut DelayLine,
    /// Master volume as a fraction in `[0.0, 1.0]`. The dispatcher has
    /// already applied it to the input sample; only generators that ignore
    /// their input need it again.
    pub volume: f32,
}

/// One selectable signal algorithm.
///
/// `process` maps one input sample to one output sample, both in
/// `[0, 1023]`, mutating only the processor's own state and the resources
/// in the context. Implementations must do a fixed amount of work per
/// call: no allocation, no blocking, no unbounded loops.
pub trait EffectProcessor {
    /// Process one volume-scaled input sample.
    fn process(&mut self, input: u16, cx: &mut ProcessCtx<'_>) -> u16;

    /// Drop transient state (read pointers, oscillator phase) when the
    /// mode is switched away or the delay line is flushed.
    fn reset(&mut self) {}
}
