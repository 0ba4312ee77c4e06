pub mod dsp;
pub mod error;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::dsp::coeffs::Coeffs;
use crate::dsp::design::{BiquadSpec, FilterOpt, FilterQuirk, FilterType};
use crate::error::TempoDspError;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the tempo_dsp version string.
#[wasm_bindgen]
pub fn tempo_dsp_version() -> String {
    VERSION.to_string()
}

/// Output format for designed coefficients.
///
/// Host environments select the shape the binding returns: six doubles, six
/// 24-bit fixed-point words, or the 18-byte hardware register image.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoeffFormat {
    Doubles,
    Ints,
    Bytes,
}

/// Designed coefficients in the host-selected shape.
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum CoeffList {
    Doubles([f64; 6]),
    Ints([u32; 6]),
    Bytes(Vec<u8>),
}

/// Design coefficients and package them in the requested format.
pub fn design_coefficients(
    spec: &BiquadSpec,
    format: CoeffFormat,
) -> Result<CoeffList, TempoDspError> {
    let bq: Coeffs = spec.coefficients()?;
    Ok(match format {
        CoeffFormat::Doubles => CoeffList::Doubles(bq.to_array()),
        CoeffFormat::Ints => CoeffList::Ints(bq.to_fixed().to_array()),
        CoeffFormat::Bytes => CoeffList::Bytes(bq.to_fixed().to_bytes().to_vec()),
    })
}

/// WASM-exposed: design biquad coefficients from filter parameters.
///
/// Returns a list of 6 doubles, 6 unsigned ints, or 18 bytes depending on
/// `format`, in `a0, a1, a2, b0, b1, b2` order (bytes are low/mid/high per
/// coefficient).
#[allow(clippy::too_many_arguments)]
#[wasm_bindgen]
pub fn biquad_filter(
    freq: f64,
    gain: f64,
    fs: f64,
    opt: FilterOpt,
    optval: f64,
    filter_type: FilterType,
    normalize: bool,
    quirk: FilterQuirk,
    format: CoeffFormat,
) -> Result<JsValue, JsValue> {
    let spec = BiquadSpec {
        filter_type,
        frequency: freq,
        gain_db: gain,
        sample_rate: fs,
        opt,
        opt_value: optval,
        normalize,
        quirk,
    };
    let list =
        design_coefficients(&spec, format).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(&list).map_err(|e| JsValue::from_str(&format!("{e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_spec() -> BiquadSpec {
        BiquadSpec {
            filter_type: FilterType::Peaking,
            frequency: 1000.0,
            gain_db: 0.0,
            sample_rate: 48000.0,
            opt: FilterOpt::Bw,
            opt_value: 1.8,
            normalize: true,
            quirk: FilterQuirk::NoQuirk,
        }
    }

    #[test]
    fn doubles_payload_shape() {
        let list = design_coefficients(&reference_spec(), CoeffFormat::Doubles).unwrap();
        let json = serde_json::to_value(&list).unwrap();
        let arr = json.as_array().expect("doubles payload should be a list");
        assert_eq!(arr.len(), 6);
        // a0 leads, and at 0 dB peaking the normalized b0 is 1.0
        assert!(arr[3].as_f64().unwrap() == 1.0, "b0 should be 1.0");
    }

    #[test]
    fn ints_payload_shape() {
        let list = design_coefficients(&reference_spec(), CoeffFormat::Ints).unwrap();
        let json = serde_json::to_value(&list).unwrap();
        let arr = json.as_array().expect("ints payload should be a list");
        assert_eq!(arr.len(), 6);
        // b0 = 1.0 exactly in Q2.22
        assert_eq!(arr[3].as_u64().unwrap(), 0x400000);
    }

    #[test]
    fn bytes_payload_shape() {
        let list = design_coefficients(&reference_spec(), CoeffFormat::Bytes).unwrap();
        let json = serde_json::to_value(&list).unwrap();
        let arr = json.as_array().expect("bytes payload should be a list");
        assert_eq!(arr.len(), 18);
        for v in arr {
            let v = v.as_u64().unwrap();
            assert!(v <= 0xff, "byte payload entry out of range: {v}");
        }
    }

    #[test]
    fn invalid_spec_reports_parameter() {
        let mut spec = reference_spec();
        spec.sample_rate = -1.0;
        let err = design_coefficients(&spec, CoeffFormat::Doubles).unwrap_err();
        assert!(
            format!("{err}").contains("sample_rate"),
            "error should name the offending parameter, got: {err}"
        );
    }
}
