//! Effect processors, one per selectable mode.
//!
//! Each implements [`EffectProcessor`](crate::effect::EffectProcessor)
//! with fixed parameters exposed through a per-effect parameter struct,
//! so a control-driven variant is a constructor change rather than a
//! redesign.

mod distortion;
mod echo;
mod octaver;
mod reverb;
mod sinewave;

pub use distortion::{Distortion, DistortionParams};
pub use echo::{Echo, EchoParams};
pub use octaver::{pitch_step_for_band, Octaver, OctaverParams};
pub use reverb::{ReverbDelay, ReverbParams, ReverbStyle};
pub use sinewave::{Sinewave, SinewaveParams};
