//! Runtime biquad section — applies designed coefficients to samples.

use crate::dsp::coeffs::Coeffs;

/// A single biquad filter section (Direct Form II Transposed).
///
/// Built from normalized [`Coeffs`], which carry pre-negated feedback terms,
/// so the recurrence adds the `a1`/`a2` products instead of subtracting them.
#[derive(Debug, Clone)]
pub struct Biquad {
    coeffs: Coeffs,
    z1: f64,
    z2: f64,
}

impl Biquad {
    pub fn new(coeffs: Coeffs) -> Self {
        Biquad {
            coeffs,
            z1: 0.0,
            z2: 0.0,
        }
    }

    /// Process a single sample.
    pub fn process(&mut self, input: f64) -> f64 {
        let c = &self.coeffs;
        let output = c.b0 * input + self.z1;
        self.z1 = c.b1 * input + c.a1 * output + self.z2;
        self.z2 = c.b2 * input + c.a2 * output;
        output
    }

    /// Replace the coefficients, keeping the delay state.
    pub fn set_coeffs(&mut self, coeffs: Coeffs) {
        self.coeffs = coeffs;
    }

    /// Clear the delay state.
    pub fn reset(&mut self) {
        self.z1 = 0.0;
        self.z2 = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::design::{BiquadSpec, FilterType};
    use std::f64::consts::PI;

    fn designed(filter_type: FilterType, frequency: f64) -> Biquad {
        let spec = BiquadSpec {
            filter_type,
            frequency,
            sample_rate: 48000.0,
            ..BiquadSpec::default()
        };
        Biquad::new(spec.coefficients().unwrap())
    }

    #[test]
    fn lowpass_passes_dc() {
        let mut f = designed(FilterType::Lpf, 5000.0);
        let mut output = 0.0;
        for _ in 0..1000 {
            output = f.process(1.0);
        }
        assert!(
            (output - 1.0).abs() < 0.001,
            "Lowpass should pass DC, got {output}"
        );
    }

    #[test]
    fn highpass_blocks_dc() {
        let mut f = designed(FilterType::Hpf, 1000.0);
        let mut output = 0.0;
        for _ in 0..1000 {
            output = f.process(1.0);
        }
        assert!(output.abs() < 0.001, "Highpass should block DC, got {output}");
    }

    #[test]
    fn lowpass_attenuates_high_freq() {
        let mut f = designed(FilterType::Lpf, 200.0);
        let freq = 10000.0;
        let mut max_out = 0.0_f64;
        for i in 0..4800 {
            let t = i as f64 / 48000.0;
            let input = (2.0 * PI * freq * t).sin();
            let out = f.process(input);
            if i > 1000 {
                // skip transient
                max_out = max_out.max(out.abs());
            }
        }
        assert!(
            max_out < 0.01,
            "Lowpass@200Hz should strongly attenuate 10kHz, got amplitude {max_out}"
        );
    }

    #[test]
    fn notch_removes_center_frequency() {
        let mut f = designed(FilterType::Notch, 1000.0);
        let mut max_out = 0.0_f64;
        for i in 0..48000 {
            let t = i as f64 / 48000.0;
            let input = (2.0 * PI * 1000.0 * t).sin();
            let out = f.process(input);
            if i > 24000 {
                max_out = max_out.max(out.abs());
            }
        }
        assert!(
            max_out < 0.02,
            "Notch@1kHz should suppress a 1kHz tone, got amplitude {max_out}"
        );
    }

    #[test]
    fn output_stays_finite() {
        let mut f = designed(FilterType::Bpf, 1000.0);
        for i in 0..10000 {
            let input = if i % 100 == 0 { 1.0 } else { 0.0 };
            let out = f.process(input);
            assert!(out.is_finite(), "Filter output not finite at sample {i}");
        }
    }

    #[test]
    fn reset_clears_state() {
        let mut f = designed(FilterType::Lpf, 500.0);
        for _ in 0..100 {
            f.process(1.0);
        }
        f.reset();
        let out = f.process(0.0);
        assert_eq!(out, 0.0, "Reset filter fed silence should emit silence");
    }
}
