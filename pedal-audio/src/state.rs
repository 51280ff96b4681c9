//! Shared control state crossing the interrupt / polling boundary.
//!
//! The control state machine (polling context) is the only writer; the
//! sample dispatcher (interrupt context) reads every field once per tick.
//! Every field is an individually word-sized atomic, so no reader can
//! observe a torn value and neither context ever blocks. There is no
//! cross-field consistency requirement: each scalar is meaningful on its
//! own, and a tick that interleaves between two field updates simply uses
//! one old and one new value for a single sample period.
//!
//! Composite transitions (a mode change that must also flush the delay
//! line) are published as a *request*: the polling context sets
//! [`request_delay_reset`](SharedControlState::request_delay_reset) and the
//! dispatcher consumes it at the top of its next tick, before the first
//! sample of the new mode is processed. The interrupt context therefore
//! never shares `&mut` access with the polling context.

use core::sync::atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};

use crate::constants::DEFAULT_VOLUME;

/// The effect selected for the audio path. Exactly one is active per tick.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectMode {
    /// Volume-scaled pass-through, entered through the bypass footswitch.
    Clean = 0,
    /// Pass-through selected as an effect in its own right.
    Normal = 1,
    /// Reverb-like smearing sub-mode of the reverb/delay processor.
    ReverbEcho = 2,
    /// Distinct-repeats sub-mode of the reverb/delay processor.
    Delay = 3,
    /// Single feedback delay tap summed with the dry signal.
    Echo = 4,
    /// Pitch-shifting resampler (octave up / unity / octave down).
    Octaver = 5,
    /// Pre-gain plus symmetric hard clipping.
    Distortion = 6,
    /// Fixed-frequency sine generator; ignores the input signal.
    Sinewave = 7,
}

impl EffectMode {
    /// Decode a raw mode byte. Unknown values fall back to [`Clean`]
    /// (pass-through), never an error.
    ///
    /// [`Clean`]: EffectMode::Clean
    pub fn from_u8(raw: u8) -> Self {
        match raw {
            1 => EffectMode::Normal,
            2 => EffectMode::ReverbEcho,
            3 => EffectMode::Delay,
            4 => EffectMode::Echo,
            5 => EffectMode::Octaver,
            6 => EffectMode::Distortion,
            7 => EffectMode::Sinewave,
            _ => EffectMode::Clean,
        }
    }
}

/// Control state shared between the polling loop and the sample ISR.
///
/// Lock-free by construction: see the module docs for the writer/reader
/// contract. Create one instance at startup and hand a reference to both
/// contexts.
pub struct SharedControlState {
    /// Mode dispatched on the next tick.
    mode: AtomicU8,
    /// Most recent non-`Clean` selection, restored when bypass is released.
    last_selected: AtomicU8,
    /// Whether an effect (vs. bypass) is engaged. Drives the status LED.
    effect_active: AtomicBool,
    /// Master volume, 0–1023.
    master_volume: AtomicU16,
    /// Pending request for the dispatcher to flush the delay line and
    /// per-effect transient state before processing the next sample.
    delay_reset: AtomicBool,
}

impl SharedControlState {
    /// Initial state: first effect selected and active, volume mid-scale,
    /// no reset pending.
    pub const fn new() -> Self {
        SharedControlState {
            mode: AtomicU8::new(EffectMode::Normal as u8),
            last_selected: AtomicU8::new(EffectMode::Normal as u8),
            effect_active: AtomicBool::new(true),
            master_volume: AtomicU16::new(DEFAULT_VOLUME),
            delay_reset: AtomicBool::new(false),
        }
    }

    /// Mode to dispatch this tick.
    pub fn mode(&self) -> EffectMode {
        EffectMode::from_u8(self.mode.load(Ordering::Acquire))
    }

    pub fn set_mode(&self, mode: EffectMode) {
        self.mode.store(mode as u8, Ordering::Release);
    }

    /// Most recent non-`Clean` mode selection.
    pub fn last_selected(&self) -> EffectMode {
        EffectMode::from_u8(self.last_selected.load(Ordering::Acquire))
    }

    pub fn set_last_selected(&self, mode: EffectMode) {
        self.last_selected.store(mode as u8, Ordering::Release);
    }

    pub fn effect_active(&self) -> bool {
        self.effect_active.load(Ordering::Acquire)
    }

    pub fn set_effect_active(&self, active: bool) {
        self.effect_active.store(active, Ordering::Release);
    }

    /// Master volume in `[0, 1023]`.
    pub fn master_volume(&self) -> u16 {
        self.master_volume.load(Ordering::Acquire)
    }

    /// Store a new master volume, saturated into `[0, 1023]`.
    pub fn set_master_volume(&self, volume: u16) {
        let clamped = volume.min(crate::constants::SAMPLE_MAX);
        self.master_volume.store(clamped, Ordering::Release);
    }

    /// Ask the dispatcher to flush the delay line before its next sample.
    pub fn request_delay_reset(&self) {
        self.delay_reset.store(true, Ordering::Release);
    }

    /// Consume a pending reset request. Returns `true` at most once per
    /// request (dispatcher side).
    pub fn take_delay_reset(&self) -> bool {
        self.delay_reset.swap(false, Ordering::AcqRel)
    }

    /// Store a raw mode byte, bypassing the enum. Exercises the
    /// unknown-mode fallback in tests.
    #[cfg(test)]
    pub fn set_mode_raw(&self, raw: u8) {
        self.mode.store(raw, Ordering::Release);
    }
}

impl Default for SharedControlState {
    fn default() -> Self {
        Self::new()
    }
}
