//! Wavetable sine oscillator (direct digital synthesis).
//!
//! A 256-entry table holds one cycle of a sine, pre-scaled into the
//! unsigned 10-bit sample domain. The phase accumulator is a fractional
//! index into the table; lookups linearly interpolate between the two
//! bracketing entries.

use core::f32::consts::PI;

use crate::constants::{SAMPLE_RATE_HZ, SINE_TABLE_SIZE};

/// Phase-accumulator sine generator.
pub struct SineOscillator {
    /// One sine cycle, `table[i] = round((1 + sin(2π·i/256)) · 1023 / 2)`.
    table: [u16; SINE_TABLE_SIZE],
    /// Fractional table index in `[0, SINE_TABLE_SIZE)`.
    phase: f32,
}

impl SineOscillator {
    /// Build the wavetable and start at phase zero.
    pub fn new() -> Self {
        let mut table = [0u16; SINE_TABLE_SIZE];
        for (i, entry) in table.iter_mut().enumerate() {
            let angle = 2.0 * PI * i as f32 / SINE_TABLE_SIZE as f32;
            *entry = libm::roundf((1.0 + libm::sinf(angle)) * 1023.0 / 2.0) as u16;
        }
        SineOscillator { table, phase: 0.0 }
    }

    /// Per-tick phase increment that produces `hz` at the engine sample
    /// rate.
    pub fn step_for_freq(hz: f32) -> f32 {
        hz * SINE_TABLE_SIZE as f32 / SAMPLE_RATE_HZ
    }

    /// Advance the phase by `step`, wrapping into `[0, SINE_TABLE_SIZE)`.
    /// Steps are positive by construction; the negative wrap is kept so a
    /// bad step can never push the phase out of the table.
    pub fn advance(&mut self, step: f32) {
        self.phase += step;
        while self.phase >= SINE_TABLE_SIZE as f32 {
            self.phase -= SINE_TABLE_SIZE as f32;
        }
        while self.phase < 0.0 {
            self.phase += SINE_TABLE_SIZE as f32;
        }
    }

    /// Interpolated table value at the current phase, in `[0, 1023]`.
    pub fn sample(&self) -> f32 {
        let idx = self.phase as usize;
        let frac = self.phase - idx as f32;
        let first = self.table[idx] as f32;
        let second = self.table[(idx + 1) % SINE_TABLE_SIZE] as f32;
        first + frac * (second - first)
    }

    /// Return the phase to zero (generator deactivated).
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Current phase in `[0, SINE_TABLE_SIZE)`.
    pub fn phase(&self) -> f32 {
        self.phase
    }
}

impl Default for SineOscillator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_hits_the_cardinal_points() {
        let osc = SineOscillator::new();
        // sin(0) = 0 → midpoint; sin(π/2) = 1 → top; sin(3π/2) = -1 → bottom.
        assert_eq!(osc.table[0], 512);
        assert_eq!(osc.table[64], 1023);
        assert_eq!(osc.table[192], 0);
    }

    #[test]
    fn table_stays_in_sample_domain() {
        let osc = SineOscillator::new();
        for &entry in osc.table.iter() {
            assert!(entry <= 1023);
        }
    }

    #[test]
    fn step_for_standard_pitch() {
        // 440 Hz at 20 kHz: 440 · 256 / 20000 = 5.632 table cells per tick.
        let step = SineOscillator::step_for_freq(440.0);
        assert!((step - 5.632).abs() < 1e-4);
    }

    #[test]
    fn advance_wraps_into_table_range() {
        let mut osc = SineOscillator::new();
        osc.advance(255.5);
        assert!((osc.phase() - 255.5).abs() < 1e-3);
        osc.advance(1.0);
        assert!(osc.phase() < SINE_TABLE_SIZE as f32);
        assert!((osc.phase() - 0.5).abs() < 1e-3);
    }

    #[test]
    fn advance_recovers_from_negative_phase() {
        let mut osc = SineOscillator::new();
        osc.advance(-3.0);
        assert!(osc.phase() >= 0.0);
        assert!((osc.phase() - 253.0).abs() < 1e-3);
    }

    #[test]
    fn phase_is_periodic_within_one_cell() {
        // After ceil(256 / step) advances the phase is back within one
        // table cell of the start.
        for step in [0.5f32, 1.0, 2.0, 5.632] {
            let mut osc = SineOscillator::new();
            let ticks = libm::ceilf(SINE_TABLE_SIZE as f32 / step) as u32;
            for _ in 0..ticks {
                osc.advance(step);
            }
            let wrapped = osc.phase().min(SINE_TABLE_SIZE as f32 - osc.phase());
            assert!(wrapped < step, "step {step}: ended at {}", osc.phase());
        }
    }

    #[test]
    fn sample_interpolates_between_entries() {
        let mut osc = SineOscillator::new();
        let expected = (osc.table[0] as f32 + osc.table[1] as f32) / 2.0;
        osc.advance(0.5);
        assert!((osc.sample() - expected).abs() < 1e-3);
    }

    #[test]
    fn sample_interpolation_wraps_to_table_start() {
        let mut osc = SineOscillator::new();
        osc.advance(255.5);
        let expected = (osc.table[255] as f32 + osc.table[0] as f32) / 2.0;
        assert!((osc.sample() - expected).abs() < 1e-3);
    }

    #[test]
    fn reset_returns_phase_to_zero() {
        let mut osc = SineOscillator::new();
        osc.advance(17.25);
        osc.reset();
        assert_eq!(osc.phase(), 0.0);
        assert_eq!(osc.sample(), osc.table[0] as f32);
    }
}
