//! Low-level DSP primitives used by the effect processors.
//!
//! Everything here is allocation-free and bounded per call, making it safe
//! to run inside the sample interrupt. The effect processors layer the
//! per-mode algorithms on top.

pub mod delay_line;
pub mod helpers;
pub mod oscillator;

pub use delay_line::DelayLine;
pub use oscillator::SineOscillator;
