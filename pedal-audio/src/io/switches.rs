//! Switch input sampling over `embedded-hal` digital pins.
//!
//! All control inputs are wired active-low with internal pull-ups, so an
//! idle line reads high and a pressed button reads low. The scanner just
//! snapshots the raw levels; debouncing and edge detection belong to the
//! control state machine.

use embedded_hal::digital::InputPin;

use crate::controls::SwitchSample;

/// The pedal's digital control inputs, one pin per logical switch.
pub struct SwitchPins<P: InputPin> {
    pub bypass: P,
    pub select_normal: P,
    pub select_reverb: P,
    pub select_echo: P,
    pub select_octaver: P,
    pub select_distortion: P,
    pub select_sinewave: P,
    pub sub_mode_toggle: P,
    pub volume_up: P,
    pub volume_down: P,
}

impl<P: InputPin> SwitchPins<P> {
    /// Read every input level into one snapshot for
    /// [`ControlSurface::poll`](crate::controls::ControlSurface::poll).
    ///
    /// Errors propagate from the HAL implementation; on a plain GPIO port
    /// they are infallible.
    pub fn sample(&mut self) -> Result<SwitchSample, P::Error> {
        Ok(SwitchSample {
            bypass: self.bypass.is_high()?,
            select_normal: self.select_normal.is_high()?,
            select_reverb: self.select_reverb.is_high()?,
            select_echo: self.select_echo.is_high()?,
            select_octaver: self.select_octaver.is_high()?,
            select_distortion: self.select_distortion.is_high()?,
            select_sinewave: self.select_sinewave.is_high()?,
            sub_mode_toggle: self.sub_mode_toggle.is_high()?,
            volume_up: self.volume_up.is_high()?,
            volume_down: self.volume_down.is_high()?,
        })
    }
}
