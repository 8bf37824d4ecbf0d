//! Discrete Sine Transform (DST) module
//! DST-I and DST-II with exact inverses, each one real FFT plus O(N) work
//! no_std + alloc compatible
//!
//! Definitions (unnormalized forward transforms):
//!
//! - DST-II, length `n`: `V[k] = Σ_j U[j]·sin(π(k + 1)(j + ½)/n)`
//! - DST-I, length `n + 1`: `V[k] = Σ_{j=1}^{n-1} U[j]·sin(πjk/n)`; the
//!   endpoints `U[0]` and `U[n]` are ignored and `V[0] = V[n] = 0`.

use alloc::vec;
use alloc::vec::Vec;

use crate::dct::check_even;
use crate::fft::{FftError, FftImpl};
use crate::num::{length_as, Float};
use crate::rfft::RealFftImpl;
use crate::twiddle::cossin;

/// DST-II (used in signal processing)
pub fn dst2<T: Float, F: FftImpl<T> + ?Sized>(fft: &F, input: &[T]) -> Result<Vec<T>, FftError> {
    let n = input.len();
    check_even(n)?;
    fft_log!(debug, "dst2 n={}", n);
    let n2 = n / 2;
    // same fold as the DCT-II with the reversed tail negated
    let mut folded = vec![T::zero(); n];
    for i in 0..n2 {
        folded[i] = input[2 * i];
        folded[n - 1 - i] = -input[2 * i + 1];
    }
    let spec = fft.rfft(&folded)?;
    let mut out = vec![T::zero(); n];
    out[n - 1] = spec.re[0];
    for k in 1..=n2 {
        let (c, s) = cossin::<T>(k as i64, 4 * n as i64);
        let (x, y) = (spec.re[k], spec.im[k]);
        out[k - 1] = x * s - y * c;
        out[n - 1 - k] = x * c + y * s;
    }
    Ok(out)
}

/// Inverse of [`dst2`].
pub fn dst2_inverse<T: Float, F: FftImpl<T> + ?Sized>(
    fft: &F,
    input: &[T],
) -> Result<Vec<T>, FftError> {
    let n = input.len();
    check_even(n)?;
    fft_log!(debug, "dst2_inverse n={}", n);
    let n2 = n / 2;
    let mut re = vec![T::zero(); n2 + 1];
    let mut im = vec![T::zero(); n2 + 1];
    re[0] = input[n - 1];
    for k in 1..=n2 {
        let (c, s) = cossin::<T>(k as i64, 4 * n as i64);
        let (v, w) = (input[k - 1], input[n - 1 - k]);
        re[k] = v * s + w * c;
        im[k] = w * s - v * c;
    }
    let folded = fft.irfft(&re, &im)?;
    let mut out = vec![T::zero(); n];
    for i in 0..n2 {
        out[2 * i] = folded[i];
        out[2 * i + 1] = -folded[n - 1 - i];
    }
    Ok(out)
}

/// DST-I (odd symmetry about both endpoints) of `n + 1` samples.
///
/// Equal to [`dst1_inverse`] scaled by `n/2`.
pub fn dst1<T: Float, F: FftImpl<T> + ?Sized>(fft: &F, input: &[T]) -> Result<Vec<T>, FftError> {
    let mut out = dst1_inverse(fft, input)?;
    let scale = length_as::<T>((input.len() - 1) / 2);
    for v in out.iter_mut() {
        *v = *v * scale;
    }
    Ok(out)
}

/// Inverse of [`dst1`]: the DST-I scaled by `2/n`.
///
/// Even-indexed inputs go into the imaginary half spectrum, differences of
/// neighbouring odd-indexed inputs into the real part. After the inverse
/// real FFT, differences of mirrored samples give the even-index
/// contribution and their sums, divided by `4·sin(πm/n)`, the odd-index one.
pub fn dst1_inverse<T: Float, F: FftImpl<T> + ?Sized>(
    fft: &F,
    input: &[T],
) -> Result<Vec<T>, FftError> {
    if input.len() < 2 {
        return Err(FftError::EmptyInput);
    }
    let n = input.len() - 1;
    check_even(n)?;
    fft_log!(debug, "dst1_inverse n={}", n);
    let n2 = n / 2;
    let two = T::from_f64(2.0);

    let mut re = vec![T::zero(); n2 + 1];
    let mut im = vec![T::zero(); n2 + 1];
    re[0] = -two * input[1];
    re[n2] = two * input[n - 1];
    for k in 1..n2 {
        re[k] = input[2 * k - 1] - input[2 * k + 1];
        im[k] = -input[2 * k];
    }

    let a = fft.irfft(&re, &im)?;
    let mut out = vec![T::zero(); n + 1];
    let half = T::from_f64(0.5);
    let quarter = T::from_f64(0.25);
    for m in 1..=n2 {
        let (_, s) = cossin::<T>(m as i64, 2 * n as i64);
        let even = half * (a[m] - a[n - m]);
        let odd = -quarter * (a[m] + a[n - m]) / s;
        out[m] = even + odd;
        out[n - m] = odd - even;
    }
    Ok(out)
}
