//! Debounced control/mode state machine.
//!
//! Runs only in the cooperative polling context, never in the sample
//! interrupt. Each call to [`ControlSurface::poll`] consumes one snapshot
//! of the raw switch levels plus a millisecond timestamp, and publishes
//! any accepted changes through the [`SharedControlState`].
//!
//! All physical inputs are active-low with pull-ups: a pressed button or
//! engaged switch reads `false`. A transition on any logical button is
//! accepted only if more than [`DEBOUNCE_WINDOW_MS`] has elapsed since the
//! last accepted transition on that same button; rejected transitions are
//! silently dropped, never queued.

use crate::constants::{DEBOUNCE_WINDOW_MS, SAMPLE_MAX, VOLUME_STEP};
use crate::state::{EffectMode, SharedControlState};

/// One snapshot of the raw digital input levels (`true` = line high).
///
/// With the active-low wiring, `true` means released/disengaged for every
/// momentary button, and selects the reverb-echo sub-mode on the toggle.
#[derive(Debug, Clone, Copy)]
pub struct SwitchSample {
    /// Bypass footswitch.
    pub bypass: bool,
    /// Momentary per-effect selection buttons.
    pub select_normal: bool,
    pub select_reverb: bool,
    pub select_echo: bool,
    pub select_octaver: bool,
    pub select_distortion: bool,
    pub select_sinewave: bool,
    /// Two-position reverb sub-mode toggle (high = reverb-echo).
    pub sub_mode_toggle: bool,
    /// Momentary volume buttons.
    pub volume_up: bool,
    pub volume_down: bool,
}

impl SwitchSample {
    /// Every line pulled high: nothing pressed, toggle at reverb-echo.
    pub const fn released() -> Self {
        SwitchSample {
            bypass: true,
            select_normal: true,
            select_reverb: true,
            select_echo: true,
            select_octaver: true,
            select_distortion: true,
            select_sinewave: true,
            sub_mode_toggle: true,
            volume_up: true,
            volume_down: true,
        }
    }
}

impl Default for SwitchSample {
    fn default() -> Self {
        Self::released()
    }
}

/// Logical buttons tracked by the debouncer.
#[derive(Debug, Clone, Copy)]
#[repr(usize)]
enum Button {
    Bypass = 0,
    SelectNormal,
    SelectReverb,
    SelectEcho,
    SelectOctaver,
    SelectDistortion,
    SelectSinewave,
    SubModeToggle,
    VolumeUp,
    VolumeDown,
}

const BUTTON_COUNT: usize = 10;

/// Per-button transition gate.
///
/// Accepts a transition only when more than the debounce window has
/// elapsed since the previous accepted transition on the same button. The
/// first transition on a button is always accepted. Timestamps use
/// wrapping arithmetic, so a `u32` millisecond counter that rolls over
/// (~49 days) keeps working.
struct Debouncer {
    last_accepted_ms: [Option<u32>; BUTTON_COUNT],
}

impl Debouncer {
    const fn new() -> Self {
        Debouncer {
            last_accepted_ms: [None; BUTTON_COUNT],
        }
    }

    fn try_accept(&mut self, button: Button, now_ms: u32) -> bool {
        let slot = &mut self.last_accepted_ms[button as usize];
        if let Some(last) = *slot {
            if now_ms.wrapping_sub(last) <= DEBOUNCE_WINDOW_MS {
                return false;
            }
        }
        *slot = Some(now_ms);
        true
    }
}

/// The pedal's switch logic: effect selection, bypass, sub-mode toggle,
/// and volume buttons.
pub struct ControlSurface {
    debounce: Debouncer,
    /// Levels from the previous poll, for edge detection.
    prev: SwitchSample,
    /// Whether the footswitch currently holds the pedal in bypass.
    bypassed: bool,
}

impl ControlSurface {
    pub const fn new() -> Self {
        ControlSurface {
            debounce: Debouncer::new(),
            prev: SwitchSample::released(),
            bypassed: false,
        }
    }

    /// Consume one switch snapshot taken at `now_ms` and publish any
    /// accepted state changes.
    pub fn poll(&mut self, shared: &SharedControlState, switches: &SwitchSample, now_ms: u32) {
        let select_held = self.poll_selects(shared, switches, now_ms);

        // Selection buttons override the footswitch while held.
        if !select_held {
            self.poll_bypass(shared, switches, now_ms);
        }

        self.poll_sub_mode(shared, switches, now_ms);
        self.poll_volume(shared, switches, now_ms);

        self.prev = *switches;
    }

    /// Handle the momentary effect-selection buttons. Returns whether any
    /// is currently held.
    fn poll_selects(
        &mut self,
        shared: &SharedControlState,
        switches: &SwitchSample,
        now_ms: u32,
    ) -> bool {
        let selects = [
            (
                self.prev.select_normal,
                switches.select_normal,
                Button::SelectNormal,
                EffectMode::Normal,
            ),
            (
                self.prev.select_reverb,
                switches.select_reverb,
                Button::SelectReverb,
                EffectMode::ReverbEcho,
            ),
            (
                self.prev.select_echo,
                switches.select_echo,
                Button::SelectEcho,
                EffectMode::Echo,
            ),
            (
                self.prev.select_octaver,
                switches.select_octaver,
                Button::SelectOctaver,
                EffectMode::Octaver,
            ),
            (
                self.prev.select_distortion,
                switches.select_distortion,
                Button::SelectDistortion,
                EffectMode::Distortion,
            ),
            (
                self.prev.select_sinewave,
                switches.select_sinewave,
                Button::SelectSinewave,
                EffectMode::Sinewave,
            ),
        ];

        let mut any_held = false;
        for (was, level, button, mode) in selects {
            if level {
                continue; // released
            }
            any_held = true;
            let press_edge = was && !level;
            if !press_edge || !self.debounce.try_accept(button, now_ms) {
                continue;
            }

            shared.set_last_selected(mode);
            shared.set_mode(mode);
            shared.set_effect_active(true);
            shared.request_delay_reset();
            self.bypassed = false;

            #[cfg(feature = "defmt")]
            defmt::info!("effect selected: {}", mode);
        }
        any_held
    }

    /// Level-driven global bypass: held forces `Clean`, release restores
    /// the last selected effect.
    fn poll_bypass(&mut self, shared: &SharedControlState, switches: &SwitchSample, now_ms: u32) {
        let held = !switches.bypass;
        if held == self.bypassed {
            return;
        }
        if !self.debounce.try_accept(Button::Bypass, now_ms) {
            return;
        }

        self.bypassed = held;
        if held {
            shared.set_mode(EffectMode::Clean);
            shared.set_effect_active(false);
        } else {
            shared.set_mode(shared.last_selected());
            shared.set_effect_active(true);
        }
        // Flush on both entry and exit so no stale audio crosses bypass.
        shared.request_delay_reset();

        #[cfg(feature = "defmt")]
        defmt::info!("bypass: {}", held);
    }

    /// The sub-mode toggle is only meaningful while a reverb sub-mode is
    /// running.
    fn poll_sub_mode(&mut self, shared: &SharedControlState, switches: &SwitchSample, now_ms: u32) {
        let mode = shared.mode();
        if mode != EffectMode::ReverbEcho && mode != EffectMode::Delay {
            return;
        }

        let target = if switches.sub_mode_toggle {
            EffectMode::ReverbEcho
        } else {
            EffectMode::Delay
        };
        if target == mode {
            return;
        }
        if !self.debounce.try_accept(Button::SubModeToggle, now_ms) {
            return;
        }

        shared.set_mode(target);
        shared.set_last_selected(target);
        shared.request_delay_reset();

        #[cfg(feature = "defmt")]
        defmt::info!("reverb sub-mode: {}", target);
    }

    /// Volume buttons, debounced independently; each accepted press edge
    /// moves the master volume one fixed step.
    fn poll_volume(&mut self, shared: &SharedControlState, switches: &SwitchSample, now_ms: u32) {
        let up_edge = self.prev.volume_up && !switches.volume_up;
        if up_edge && self.debounce.try_accept(Button::VolumeUp, now_ms) {
            let volume = shared
                .master_volume()
                .saturating_add(VOLUME_STEP)
                .min(SAMPLE_MAX);
            shared.set_master_volume(volume);

            #[cfg(feature = "defmt")]
            defmt::debug!("volume up: {}", volume);
        }

        let down_edge = self.prev.volume_down && !switches.volume_down;
        if down_edge && self.debounce.try_accept(Button::VolumeDown, now_ms) {
            let volume = shared.master_volume().saturating_sub(VOLUME_STEP);
            shared.set_master_volume(volume);

            #[cfg(feature = "defmt")]
            defmt::debug!("volume down: {}", volume);
        }
    }
}

impl Default for ControlSurface {
    fn default() -> Self {
        Self::new()
    }
}
