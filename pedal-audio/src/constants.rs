/// Audio sample rate in Hz. The sampling timer fires every 50 µs.
pub const SAMPLE_RATE_HZ: f32 = 20_000.0;

/// Fixed period of the sampling interrupt in microseconds.
pub const SAMPLE_PERIOD_MICROS: u32 = 50;

/// Delay-line capacity in samples.
pub const MAX_DELAY_SAMPLES: usize = 350;

/// Largest sample value in the unsigned 10-bit domain.
pub const SAMPLE_MAX: u16 = 1023;

/// Midpoint of the sample domain, subtracted to center samples for signed math.
pub const SAMPLE_MID: f32 = 511.5;

/// Number of entries in the sine wavetable.
pub const SINE_TABLE_SIZE: usize = 256;

/// Minimum time between accepted transitions on one logical button.
pub const DEBOUNCE_WINDOW_MS: u32 = 100;

/// Master-volume change per accepted volume-button press.
pub const VOLUME_STEP: u16 = 8;

/// Master volume at startup (mid-scale).
pub const DEFAULT_VOLUME: u16 = 512;
