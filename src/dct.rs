//! Discrete Cosine Transform (DCT) module
//! DCT-I and DCT-II with exact inverses, each one real FFT plus O(N) work
//! no_std + alloc compatible
//!
//! Definitions (unnormalized forward transforms):
//!
//! - DCT-II, length `n`: `V[k] = Σ_j U[j]·cos(πk(j + ½)/n)`
//! - DCT-I, length `n + 1`:
//!   `V[k] = U[0]/2 + (-1)^k·U[n]/2 + Σ_{j=1}^{n-1} U[j]·cos(πjk/n)`
//!
//! `n` must be even in both cases.

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::{FftError, FftImpl};
use crate::num::{length_as, Float};
use crate::rfft::RealFftImpl;
use crate::twiddle::cossin;

/// Validate an even transform length.
pub(crate) fn check_even(n: usize) -> Result<(), FftError> {
    if n == 0 {
        return Err(FftError::EmptyInput);
    }
    if n % 2 != 0 {
        return Err(FftError::OddLength(n));
    }
    Ok(())
}

/// DCT-II (the "standard" DCT, used in JPEG, etc.)
pub fn dct2<T: Float, F: FftImpl<T> + ?Sized>(fft: &F, input: &[T]) -> Result<Vec<T>, FftError> {
    let n = input.len();
    check_even(n)?;
    fft_log!(debug, "dct2 n={}", n);
    let n2 = n / 2;
    // even samples forward, odd samples reversed into the tail
    let mut folded = vec![T::zero(); n];
    for i in 0..n2 {
        folded[i] = input[2 * i];
        folded[n - 1 - i] = input[2 * i + 1];
    }
    let spec = fft.rfft(&folded)?;
    let mut out = vec![T::zero(); n];
    out[0] = spec.re[0];
    for k in 1..=n2 {
        let (c, s) = cossin::<T>(k as i64, 4 * n as i64);
        let (x, y) = (spec.re[k], spec.im[k]);
        out[k] = x * c + y * s;
        out[n - k] = x * s - y * c;
    }
    Ok(out)
}

/// Inverse of [`dct2`].
pub fn dct2_inverse<T: Float, F: FftImpl<T> + ?Sized>(
    fft: &F,
    input: &[T],
) -> Result<Vec<T>, FftError> {
    let n = input.len();
    check_even(n)?;
    fft_log!(debug, "dct2_inverse n={}", n);
    let n2 = n / 2;
    let mut re = vec![T::zero(); n2 + 1];
    let mut im = vec![T::zero(); n2 + 1];
    re[0] = input[0];
    for k in 1..=n2 {
        let (c, s) = cossin::<T>(k as i64, 4 * n as i64);
        let (v, w) = (input[k], input[n - k]);
        re[k] = v * c + w * s;
        im[k] = v * s - w * c;
    }
    let folded = fft.irfft(&re, &im)?;
    let mut out = vec![T::zero(); n];
    for i in 0..n2 {
        out[2 * i] = folded[i];
        out[2 * i + 1] = folded[n - 1 - i];
    }
    Ok(out)
}

/// DCT-I (even symmetry, endpoints at half weight) of `n + 1` samples.
///
/// Equal to [`dct1_inverse`] scaled by `n/2`.
pub fn dct1<T: Float, F: FftImpl<T> + ?Sized>(fft: &F, input: &[T]) -> Result<Vec<T>, FftError> {
    let mut out = dct1_inverse(fft, input)?;
    let scale = length_as::<T>((input.len() - 1) / 2);
    for v in out.iter_mut() {
        *v = *v * scale;
    }
    Ok(out)
}

/// Inverse of [`dct1`]: the DCT-I scaled by `2/n`.
///
/// Even-indexed inputs become the real half spectrum, differences of
/// neighbouring odd-indexed inputs the imaginary part. After the inverse real
/// FFT, sums of mirrored samples give the even-index contribution and their
/// differences, divided by `4·sin(πm/n)`, the odd-index contribution.
pub fn dct1_inverse<T: Float, F: FftImpl<T> + ?Sized>(
    fft: &F,
    input: &[T],
) -> Result<Vec<T>, FftError> {
    if input.len() < 2 {
        return Err(FftError::EmptyInput);
    }
    let n = input.len() - 1;
    check_even(n)?;
    fft_log!(debug, "dct1_inverse n={}", n);
    let n2 = n / 2;
    let half = T::from_f64(0.5);

    let mut re = vec![T::zero(); n2 + 1];
    let mut im = vec![T::zero(); n2 + 1];
    re[0] = input[0];
    re[n2] = input[n];
    for k in 1..n2 {
        re[k] = input[2 * k];
        im[k] = input[2 * k - 1] - input[2 * k + 1];
    }
    // endpoints of the output come straight from alternating sums
    let ends = half * (input[0] + input[n]);
    let mut sum = ends;
    let mut alt = ends;
    for (j, &v) in input.iter().enumerate().take(n).skip(1) {
        sum = sum + v;
        alt = if j % 2 == 0 { alt + v } else { alt - v };
    }

    let a = fft.irfft(&re, &im)?;
    let mut out = vec![T::zero(); n + 1];
    let n2_t = length_as::<T>(n2);
    out[0] = sum / n2_t;
    out[n] = alt / n2_t;
    let quarter = T::from_f64(0.25);
    for m in 1..=n2 {
        let (_, s) = cossin::<T>(m as i64, 2 * n as i64);
        let even = half * (a[m] + a[n - m]);
        let odd = quarter * (a[m] - a[n - m]) / s;
        out[m] = even - odd;
        out[n - m] = even + odd;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use crate::fft::ScalarFftImpl;
    use proptest::prelude::*;

    fn slow_dct2(input: &[f64]) -> Vec<f64> {
        let n = input.len();
        (0..n)
            .map(|k| {
                input
                    .iter()
                    .enumerate()
                    .map(|(j, &x)| {
                        x * (core::f64::consts::PI * k as f64 * (j as f64 + 0.5) / n as f64).cos()
                    })
                    .sum()
            })
            .collect()
    }

    #[test]
    fn test_dct2_matches_definition() {
        let fft = ScalarFftImpl::<f64>::default();
        let input = [1.0, -2.0, 0.5, 4.0, 3.0, -1.5];
        let out = dct2(&fft, &input).unwrap();
        for (a, b) in out.iter().zip(slow_dct2(&input).iter()) {
            assert!((a - b).abs() < 1e-12, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_dct1_length_three() {
        // n = 2: V = [u0/2 + u1 + u2/2, u0/2 - u2/2, u0/2 - u1 + u2/2]
        let fft = ScalarFftImpl::<f64>::default();
        let out = dct1(&fft, &[2.0, 3.0, 4.0]).unwrap();
        let expected = [6.0, -1.0, 0.0];
        for (a, b) in out.iter().zip(expected.iter()) {
            assert!((a - b).abs() < 1e-12, "{} vs {}", a, b);
        }
    }

    #[test]
    fn test_length_errors() {
        let fft = ScalarFftImpl::<f64>::default();
        assert_eq!(dct2(&fft, &[]), Err(FftError::EmptyInput));
        assert_eq!(dct2(&fft, &[1.0, 2.0, 3.0]), Err(FftError::OddLength(3)));
        assert_eq!(
            dct2_inverse(&fft, &[1.0, 2.0, 3.0, 4.0, 5.0]),
            Err(FftError::OddLength(5))
        );
        assert_eq!(dct1(&fft, &[1.0]), Err(FftError::EmptyInput));
        assert_eq!(dct1_inverse(&fft, &[1.0, 2.0]), Err(FftError::OddLength(1)));
    }

    proptest! {
        #[test]
        fn prop_dct2_roundtrip(half in 1usize..24, ref signal in proptest::collection::vec(-100.0f64..100.0, 48)) {
            let fft = ScalarFftImpl::<f64>::default();
            let input = &signal[..2 * half];
            let back = dct2_inverse(&fft, &dct2(&fft, input).unwrap()).unwrap();
            for (a, b) in back.iter().zip(input.iter()) {
                prop_assert!((a - b).abs() < 1e-9);
            }
        }

        #[test]
        fn prop_dct1_roundtrip(half in 1usize..24, ref signal in proptest::collection::vec(-100.0f64..100.0, 49)) {
            let fft = ScalarFftImpl::<f64>::default();
            let input = &signal[..2 * half + 1];
            let back = dct1_inverse(&fft, &dct1(&fft, input).unwrap()).unwrap();
            for (a, b) in back.iter().zip(input.iter()) {
                prop_assert!((a - b).abs() < 1e-8);
            }
        }
    }
}
