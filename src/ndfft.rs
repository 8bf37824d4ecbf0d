//! Two-dimensional FFT for trigfft
//!
//! - Row-column algorithm over row-major split buffers
//! - Works with any [`FftImpl`], so both transform paths are available
//! - no_std + alloc compatible

use alloc::vec;

use crate::fft::{check_pair, FftError, FftImpl};
use crate::num::{length_as, ComplexVec, Float};

fn check_shape<T>(re: &[T], im: &[T], rows: usize, cols: usize) -> Result<(), FftError> {
    if rows == 0 || cols == 0 {
        return Err(FftError::EmptyInput);
    }
    check_pair(re, im)?;
    match rows.checked_mul(cols) {
        Some(len) if len == re.len() => Ok(()),
        _ => Err(FftError::MismatchedLengths),
    }
}

/// 2D FFT (row-column algorithm) of a `rows x cols` row-major grid.
pub fn fft2<T: Float, F: FftImpl<T> + ?Sized>(
    fft: &F,
    re: &[T],
    im: &[T],
    rows: usize,
    cols: usize,
) -> Result<ComplexVec<T>, FftError> {
    check_shape(re, im, rows, cols)?;
    fft_log!(debug, "fft2 rows={} cols={}", rows, cols);
    let mut out = ComplexVec::zeros(rows * cols);
    // FFT on rows
    for r in 0..rows {
        let span = r * cols..(r + 1) * cols;
        let row = fft.fft(&re[span.clone()], &im[span.clone()])?;
        out.re[span.clone()].copy_from_slice(&row.re);
        out.im[span].copy_from_slice(&row.im);
    }
    // FFT on columns
    let mut col_re = vec![T::zero(); rows];
    let mut col_im = vec![T::zero(); rows];
    for c in 0..cols {
        for r in 0..rows {
            col_re[r] = out.re[r * cols + c];
            col_im[r] = out.im[r * cols + c];
        }
        let col = fft.fft(&col_re, &col_im)?;
        for r in 0..rows {
            out.re[r * cols + c] = col.re[r];
            out.im[r * cols + c] = col.im[r];
        }
    }
    Ok(out)
}

/// Inverse of [`fft2`]; `ifft2(fft2(x)) == x`.
pub fn ifft2<T: Float, F: FftImpl<T> + ?Sized>(
    fft: &F,
    re: &[T],
    im: &[T],
    rows: usize,
    cols: usize,
) -> Result<ComplexVec<T>, FftError> {
    check_shape(re, im, rows, cols)?;
    let conj: alloc::vec::Vec<T> = im.iter().map(|&v| -v).collect();
    let mut out = fft2(fft, re, &conj, rows, cols)?;
    let n = length_as::<T>(rows * cols);
    out.scale(T::one() / n, -T::one() / n);
    Ok(out)
}
