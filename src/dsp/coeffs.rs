//! Coefficient formats — floating point, 24-bit fixed point, and bytes.

use serde::{Deserialize, Serialize};

/// One biquad coefficient is 24 bits of two's-complement Q2.22.
const FIXED_ONE: f64 = (1u32 << 22) as f64;
const FIXED_MASK: u32 = 0x00ff_ffff;

/// Six biquad coefficients as doubles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coeffs {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub b0: f64,
    pub b1: f64,
    pub b2: f64,
}

/// Six biquad coefficients as 24-bit Q2.22 values, one per `u32`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedCoeffs {
    pub a0: u32,
    pub a1: u32,
    pub a2: u32,
    pub b0: u32,
    pub b1: u32,
    pub b2: u32,
}

impl Coeffs {
    /// Coefficients in `a0, a1, a2, b0, b1, b2` order, the order the host
    /// binding returns them in.
    pub fn to_array(&self) -> [f64; 6] {
        [self.a0, self.a1, self.a2, self.b0, self.b1, self.b2]
    }

    /// Convert to 24-bit Q2.22 fixed point.
    pub fn to_fixed(&self) -> FixedCoeffs {
        FixedCoeffs {
            a0: coeff_to_q22(self.a0),
            a1: coeff_to_q22(self.a1),
            a2: coeff_to_q22(self.a2),
            b0: coeff_to_q22(self.b0),
            b1: coeff_to_q22(self.b1),
            b2: coeff_to_q22(self.b2),
        }
    }
}

impl FixedCoeffs {
    pub fn to_array(&self) -> [u32; 6] {
        [self.a0, self.a1, self.a2, self.b0, self.b1, self.b2]
    }

    /// Split each coefficient into low, mid, high bytes, in
    /// `a0, a1, a2, b0, b1, b2` order. This is the register layout the
    /// target filter hardware consumes.
    pub fn to_bytes(&self) -> [u8; 18] {
        let mut out = [0u8; 18];
        for (i, c) in self.to_array().into_iter().enumerate() {
            out[i * 3] = c as u8;
            out[i * 3 + 1] = (c >> 8) as u8;
            out[i * 3 + 2] = (c >> 16) as u8;
        }
        out
    }
}

/// Quantize one coefficient: floor toward negative infinity at Q2.22, then
/// keep the low 24 bits. Values outside ±2.0 wrap rather than saturate.
fn coeff_to_q22(c: f64) -> u32 {
    ((c * FIXED_ONE).floor() as i64 as u32) & FIXED_MASK
}
