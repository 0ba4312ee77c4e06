//! Tempo DSP core — biquad coefficient design and conversion.
//!
//! All math runs in Rust for deterministic, cross-platform output. The same
//! code powers both the host-environment extension module (via WASM) and
//! native callers linking the rlib.

pub mod coeffs;
pub mod design;
pub mod filter;
