//! Biquad coefficient design — Audio EQ Cookbook (Robert Bristow-Johnson).

use std::f64::consts::PI;

use wasm_bindgen::prelude::*;

use crate::dsp::coeffs::Coeffs;
use crate::error::TempoDspError;

/// Filter type.
///
/// Declaration order is a wire contract: the host environment sees these as
/// integer constants 0..=8.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
    /// Low pass.
    Lpf,
    /// High pass.
    Hpf,
    /// Band pass, peak gain = Q.
    Bpfq,
    /// Band pass, peak gain 0 dB.
    Bpf,
    /// Notch.
    Notch,
    /// All pass.
    Apf,
    /// Peaking.
    Peaking,
    /// Low shelf.
    LowShelf,
    /// High shelf.
    HighShelf,
}

/// How the width option value is interpreted.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOpt {
    /// The EE kind of Q, except for peaking EQ where A*Q is the classic EE Q.
    /// That adjustment makes a boost of N dB followed by a cut of N dB for
    /// identical Q and f0/Fs a precisely flat unity-gain "wire".
    Q,
    /// Bandwidth in octaves: between -3 dB frequencies for band pass and
    /// notch, or between midpoint (dBgain/2) gain frequencies for peaking.
    Bw,
    /// Shelf slope (shelving EQ only). S = 1 is the steepest slope that keeps
    /// gain monotonic with frequency; the slope in dB/octave stays
    /// proportional to S for a fixed f0/Fs and dBgain.
    S,
}

/// Filter quirks. Reserved dispatch point; only the no-op variant exists.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterQuirk {
    NoQuirk,
}

/// Parameters for a biquad design.
#[derive(Debug, Clone, Copy)]
pub struct BiquadSpec {
    pub filter_type: FilterType,
    /// Center frequency in Hz.
    pub frequency: f64,
    /// Gain in dB at the center frequency (peaking and shelving filters).
    pub gain_db: f64,
    /// Sample rate in Hz.
    pub sample_rate: f64,
    pub opt: FilterOpt,
    /// Value of the width option: Q, bandwidth in octaves, or shelf slope.
    pub opt_value: f64,
    /// Divide the other five coefficients by a0 after design.
    pub normalize: bool,
    pub quirk: FilterQuirk,
}

impl Default for BiquadSpec {
    fn default() -> Self {
        BiquadSpec {
            filter_type: FilterType::Lpf,
            frequency: 1000.0,
            gain_db: 0.0,
            sample_rate: 48000.0,
            opt: FilterOpt::Q,
            opt_value: 0.707, // Butterworth
            normalize: true,
            quirk: FilterQuirk::NoQuirk,
        }
    }
}

impl BiquadSpec {
    /// Design the coefficients for this spec.
    ///
    /// The returned coefficients use the feedback-sign convention
    ///
    /// ```text
    /// y[n] = (b0/a0)*x[n] + (b1/a0)*x[n-1] + (b2/a0)*x[n-2]
    ///         + (a1/a0)*y[n-1] + (a2/a0)*y[n-2]
    /// ```
    ///
    /// so `a1` and `a2` come back negated relative to the cookbook. When
    /// `normalize` is set, `b0,b1,b2,a1,a2` are pre-divided by `a0`; the
    /// `a0` field itself keeps its raw value.
    pub fn coefficients(&self) -> Result<Coeffs, TempoDspError> {
        self.validate()?;

        let w0 = 2.0 * PI * self.frequency / self.sample_rate;
        let sin_w0 = w0.sin();
        let cos_w0 = w0.cos();

        let a = match self.filter_type {
            FilterType::Lpf
            | FilterType::Hpf
            | FilterType::Bpfq
            | FilterType::Bpf
            | FilterType::Notch
            | FilterType::Apf => (10.0_f64).powf(self.gain_db / 20.0),
            FilterType::Peaking | FilterType::LowShelf | FilterType::HighShelf => {
                (10.0_f64).powf(self.gain_db / 40.0)
            }
        };

        let alpha = match self.opt {
            FilterOpt::Q => sin_w0 / (2.0 * self.opt_value),
            FilterOpt::S => {
                sin_w0 / 2.0 * ((a + 1.0 / a) * (1.0 / self.opt_value - 1.0) + 2.0).sqrt()
            }
            FilterOpt::Bw => {
                sin_w0 * ((2.0_f64.ln() / 2.0) * self.opt_value * (w0 / sin_w0)).sinh()
            }
        };

        let (b0, b1, b2, a0, a1, a2) = match self.filter_type {
            FilterType::Lpf => {
                let b1 = 1.0 - cos_w0;
                let b0 = b1 / 2.0;
                (b0, b1, b0, 1.0 + alpha, -2.0 * cos_w0, 1.0 - alpha)
            }
            FilterType::Hpf => {
                let b0 = (1.0 + cos_w0) / 2.0;
                let b1 = -(1.0 + cos_w0);
                (b0, b1, b0, 1.0 + alpha, -2.0 * cos_w0, 1.0 - alpha)
            }
            FilterType::Bpfq => {
                let b0 = sin_w0 / 2.0;
                (b0, 0.0, -b0, 1.0 + alpha, -2.0 * cos_w0, 1.0 - alpha)
            }
            FilterType::Bpf => {
                (alpha, 0.0, -alpha, 1.0 + alpha, -2.0 * cos_w0, 1.0 - alpha)
            }
            FilterType::Notch => {
                (1.0, -2.0 * cos_w0, 1.0, 1.0 + alpha, -2.0 * cos_w0, 1.0 - alpha)
            }
            FilterType::Apf => {
                (
                    1.0 - alpha,
                    -2.0 * cos_w0,
                    1.0 + alpha,
                    1.0 + alpha,
                    -2.0 * cos_w0,
                    1.0 - alpha,
                )
            }
            FilterType::Peaking => {
                (
                    1.0 + alpha * a,
                    -2.0 * cos_w0,
                    1.0 - alpha * a,
                    1.0 + alpha / a,
                    -2.0 * cos_w0,
                    1.0 - alpha / a,
                )
            }
            FilterType::LowShelf => {
                let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
                (
                    a * ((a + 1.0) - (a - 1.0) * cos_w0 + two_sqrt_a_alpha),
                    2.0 * a * ((a - 1.0) - (a + 1.0) * cos_w0),
                    a * ((a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha),
                    (a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha,
                    -2.0 * ((a - 1.0) + (a + 1.0) * cos_w0),
                    (a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha,
                )
            }
            FilterType::HighShelf => {
                let two_sqrt_a_alpha = 2.0 * a.sqrt() * alpha;
                (
                    a * ((a + 1.0) + (a - 1.0) * cos_w0 + two_sqrt_a_alpha),
                    -2.0 * a * ((a - 1.0) + (a + 1.0) * cos_w0),
                    a * ((a + 1.0) + (a - 1.0) * cos_w0 - two_sqrt_a_alpha),
                    (a + 1.0) - (a - 1.0) * cos_w0,
                    2.0 * ((a - 1.0) - (a + 1.0) * cos_w0),
                    (a + 1.0) - (a - 1.0) * cos_w0 - two_sqrt_a_alpha,
                )
            }
        };

        // Flip the feedback signs so the caller adds rather than subtracts
        // the y[n-1] and y[n-2] terms.
        let mut bq = Coeffs {
            a0,
            a1: -a1,
            a2: -a2,
            b0,
            b1,
            b2,
        };

        match self.quirk {
            FilterQuirk::NoQuirk => {}
        }

        if self.normalize {
            bq.b2 /= bq.a0;
            bq.b1 /= bq.a0;
            bq.b0 /= bq.a0;
            bq.a2 /= bq.a0;
            bq.a1 /= bq.a0;
        }

        // The S option can push the slope radicand negative for steep
        // slopes with large shelf gain, turning alpha into NaN.
        if !bq.to_array().into_iter().all(f64::is_finite) {
            return Err(TempoDspError::NonFiniteCoefficients);
        }

        Ok(bq)
    }

    fn validate(&self) -> Result<(), TempoDspError> {
        if !self.sample_rate.is_finite() || self.sample_rate <= 0.0 {
            return Err(TempoDspError::InvalidParameter {
                name: "sample_rate",
                value: self.sample_rate,
            });
        }
        if !self.frequency.is_finite()
            || self.frequency <= 0.0
            || self.frequency >= self.sample_rate / 2.0
        {
            return Err(TempoDspError::InvalidParameter {
                name: "frequency",
                value: self.frequency,
            });
        }
        if !self.opt_value.is_finite() || self.opt_value <= 0.0 {
            return Err(TempoDspError::InvalidParameter {
                name: "opt_value",
                value: self.opt_value,
            });
        }
        if !self.gain_db.is_finite() {
            return Err(TempoDspError::InvalidParameter {
                name: "gain_db",
                value: self.gain_db,
            });
        }
        Ok(())
    }
}
