//! # trigfft - mixed-radix FFT and trigonometric transforms
//!
//! A small numeric kernel built around a mixed-radix Cooley-Tukey /
//! Sande-Gentleman fast Fourier transform for arbitrary lengths, together
//! with the transforms derived from it.
//!
//! ## Features
//!
//! - **Any length**: lengths are factored into small radices (2, 3, 5, 7, 11,
//!   13, 17, 19) with a linear scan fallback for larger prime factors
//! - **Split storage**: real and imaginary parts always travel as two
//!   separate buffers, never interleaved
//! - **Real-input FFT** that packs two real samples per complex slot and
//!   returns only the non-redundant `N/2 + 1` half spectrum
//! - **DCT/DST** types I and II with exact inverses
//! - **2-D FFT** using the row-column algorithm
//! - **no_std + alloc** compatible, trigonometry via `libm`
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` impls and environment overrides
//! - `verbose-logging`: emit `log` records for each transform and stage
//!
//! ## Quick start
//!
//! ```
//! use trigfft::fft::{fft, ifft};
//!
//! let re = [1.0f64, 2.0, 3.0, 4.0, 5.0, 6.0];
//! let im = [0.0f64; 6];
//! let spectrum = fft(&re, &im).unwrap();
//! let back = ifft(&spectrum.re, &spectrum.im).unwrap();
//! for (a, b) in back.re.iter().zip(re.iter()) {
//!     assert!((a - b).abs() < 1e-12);
//! }
//! ```
//!
//! ## Examples
//!
//! Run the demos with:
//! ```bash
//! cargo run --example basic_usage
//! cargo run --example dct_usage
//! cargo run --example verbose_logging --features verbose-logging
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(any(feature = "std", test))]
extern crate std;

/// Emit a `log` record when the `verbose-logging` feature is enabled.
///
/// Expands to nothing otherwise, so call sites stay free of `cfg` noise.
#[cfg(feature = "verbose-logging")]
macro_rules! fft_log {
    ($lvl:ident, $($arg:tt)+) => {
        log::$lvl!(target: "trigfft", $($arg)+)
    };
}

#[cfg(not(feature = "verbose-logging"))]
macro_rules! fft_log {
    ($lvl:ident, $($arg:tt)+) => {{}};
}

/// Floating-point abstraction and the split-complex buffer type.
pub mod num;

/// Rotation factors `cos/sin(2πn/d)` with quadrant reduction.
pub mod twiddle;

/// Radix selection for the staged and in-place FFT paths.
pub mod factor;

/// Single butterfly pass of the staged (ping-pong) transform.
pub mod fft_kernels;

/// In-place Sande-Gentleman transform for lengths with radices up to 19.
pub mod mixed_radix;

/// Fast Fourier Transform (FFT)
///
/// Complex forward and inverse transforms of arbitrary length.
pub mod fft;

/// Real-input FFT helpers built on top of the complex FFT.
pub mod rfft;

/// Discrete Cosine Transform (DCT)
///
/// DCT-I and DCT-II with their inverses.
pub mod dct;

/// Discrete Sine Transform (DST)
///
/// DST-I and DST-II with their inverses.
pub mod dst;

/// Two-dimensional FFT operations
///
/// Row-column 2-D transforms over row-major split buffers.
pub mod ndfft;

pub use fft::{FftConfig, FftError, FftImpl, FftStrategy, ScalarFftImpl};
pub use num::{ComplexVec, Float};
pub use rfft::RealFftImpl;
