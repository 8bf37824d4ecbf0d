//! Real FFT (RFFT) built on the complex FFT.
//!
//! A real sequence of even length `N` is packed into a complex sequence of
//! length `N/2` (even samples as real parts, odd samples as imaginary parts),
//! transformed once, and split back into the spectra of the two interleaved
//! halves. Only the non-redundant bins `0..=N/2` are produced; the rest are
//! the complex conjugate mirror.

use alloc::vec;
use alloc::vec::Vec;

use crate::fft::{FftError, FftImpl, ScalarFftImpl};
use crate::num::{length_as, ComplexVec, Float};
use crate::twiddle::cossin;

/// Number of real samples that make up a complex pair.
pub const STRIDE: usize = 2;

/// Real-input transforms for any complex FFT implementation.
pub trait RealFftImpl<T: Float>: FftImpl<T> {
    /// Spectrum bins `0..=N/2` of the even-length real sequence `input`.
    fn rfft(&self, input: &[T]) -> Result<ComplexVec<T>, FftError> {
        let n = input.len();
        if n == 0 {
            return Err(FftError::EmptyInput);
        }
        if n % STRIDE != 0 {
            return Err(FftError::OddLength(n));
        }
        let m = n / STRIDE;
        let (even, odd): (Vec<T>, Vec<T>) = input
            .chunks_exact(STRIDE)
            .map(|pair| (pair[0], pair[1]))
            .unzip();
        let z = self.fft(&even, &odd)?;
        fft_log!(debug, "rfft n={}", n);

        let half = T::from_f64(0.5);
        let mut out = ComplexVec::zeros(m + 1);
        out.re[0] = z.re[0] + z.im[0];
        out.re[m] = z.re[0] - z.im[0];
        for k in 1..=m / 2 {
            let kn = m - k;
            let (c, s) = cossin::<T>(-(k as i64), n as i64);
            let am = z.re[k] - z.re[kn];
            let ap = z.re[k] + z.re[kn];
            let bm = z.im[k] - z.im[kn];
            let bp = z.im[k] + z.im[kn];
            let samcbp = s * am + c * bp;
            let sbpcam = s * bp - c * am;
            out.re[k] = half * (ap + samcbp);
            out.im[k] = half * (bm + sbpcam);
            out.re[kn] = half * (ap - samcbp);
            out.im[kn] = half * (sbpcam - bm);
        }
        Ok(out)
    }

    /// Real sequence of length `2 * (re.len() - 1)` whose half spectrum is
    /// `re + i·im`. Exact inverse of [`RealFftImpl::rfft`].
    ///
    /// The imaginary parts of the first and last bins are ignored.
    fn irfft(&self, re: &[T], im: &[T]) -> Result<Vec<T>, FftError> {
        if re.len() != im.len() {
            return Err(FftError::MismatchedLengths);
        }
        if re.len() < 2 {
            return Err(FftError::EmptyInput);
        }
        let m = re.len() - 1;
        let n = STRIDE * m;
        fft_log!(debug, "irfft n={}", n);

        // rebuild the conjugated half-length spectrum, already scaled, so a
        // forward transform performs the inversion
        let hn = T::from_f64(0.5) / length_as::<T>(m);
        let mut x = vec![T::zero(); m];
        let mut y = vec![T::zero(); m];
        x[0] = hn * (re[0] + re[m]);
        y[0] = -hn * (re[0] - re[m]);
        for k in 1..=m / 2 {
            let kn = m - k;
            let (c, s) = cossin::<T>(-(k as i64), n as i64);
            let am = re[k] - re[kn];
            let ap = re[k] + re[kn];
            let bm = im[k] - im[kn];
            let bp = im[k] + im[kn];
            let samcbp = s * am - c * bp;
            let sbpcam = s * bp + c * am;
            x[k] = hn * (ap + samcbp);
            y[k] = -hn * (bm + sbpcam);
            x[kn] = hn * (ap - samcbp);
            y[kn] = -hn * (sbpcam - bm);
        }
        let z = self.fft(&x, &y)?;
        let mut out = Vec::with_capacity(n);
        for (&a, &b) in z.re.iter().zip(z.im.iter()) {
            out.push(a);
            out.push(-b);
        }
        Ok(out)
    }
}

impl<T: Float, F: FftImpl<T> + ?Sized> RealFftImpl<T> for F {}

/// Real FFT with the default configuration.
pub fn real_fft<T: Float>(input: &[T]) -> Result<ComplexVec<T>, FftError> {
    ScalarFftImpl::<T>::default().rfft(input)
}

/// Inverse real FFT with the default configuration.
pub fn real_ifft<T: Float>(re: &[T], im: &[T]) -> Result<Vec<T>, FftError> {
    ScalarFftImpl::<T>::default().irfft(re, im)
}
