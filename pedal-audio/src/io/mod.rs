//! External-interface encodings.
//!
//! The core touches hardware only through these value types: the PWM duty
//! pair it emits each tick, and the switch-level snapshot the control
//! state machine consumes. The peripheral drivers that move them on and
//! off the pins live outside the crate.

pub mod pwm;

#[cfg(feature = "switches")]
pub mod switches;

pub use pwm::PwmPair;

#[cfg(feature = "switches")]
pub use switches::SwitchPins;
