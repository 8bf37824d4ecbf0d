//! In-place Sande-Gentleman transform.
//!
//! Decimation in frequency over the split buffers, one pass per radix from
//! [`small_radix_factors`](crate::factor::small_radix_factors). Radix 2 and 4
//! have dedicated kernels; any other radix up to 19 goes through a general
//! kernel driven by a table of its roots of unity. The passes leave the
//! spectrum in digit-reversed order, which [`digit_reverse`] undoes.

use alloc::vec;
use alloc::vec::Vec;

use crate::num::{ComplexVec, Float};
use crate::twiddle::cossin;

/// Transform `re`/`im` in place, leaving the result digit-reversed.
///
/// The product of `radices` must equal the buffer length.
pub fn passes<T: Float>(re: &mut [T], im: &mut [T], radices: &[usize]) {
    let n = re.len();
    debug_assert_eq!(n, im.len());
    debug_assert_eq!(n, radices.iter().product::<usize>());
    let mut span = n;
    for &p in radices {
        let m = span / p;
        fft_log!(trace, "in-place pass: radix {} span {} stride {}", p, span, m);
        match p {
            2 => radix2_pass(re, im, span, m),
            4 => radix4_pass(re, im, span, m),
            _ => radix_p_pass(re, im, span, m, p),
        }
        span = m;
    }
}

/// Apply the inter-pass twiddle `exp(-2πi·j·s/span)` to one sample.
#[inline]
fn rotate<T: Float>(re: &mut [T], im: &mut [T], idx: usize, j: usize, s: usize, span: usize) {
    let (c, si) = cossin::<T>(-((j * s) as i64), span as i64);
    let (x, y) = (re[idx], im[idx]);
    re[idx] = x * c - y * si;
    im[idx] = x * si + y * c;
}

fn radix2_pass<T: Float>(re: &mut [T], im: &mut [T], span: usize, m: usize) {
    let n = re.len();
    for base in (0..n).step_by(span) {
        for j in 0..m {
            let i0 = base + j;
            let i1 = i0 + m;
            let (ar, ai) = (re[i0], im[i0]);
            let (br, bi) = (re[i1], im[i1]);
            re[i0] = ar + br;
            im[i0] = ai + bi;
            re[i1] = ar - br;
            im[i1] = ai - bi;
            if j != 0 {
                rotate(re, im, i1, j, 1, span);
            }
        }
    }
}

fn radix4_pass<T: Float>(re: &mut [T], im: &mut [T], span: usize, m: usize) {
    let n = re.len();
    for base in (0..n).step_by(span) {
        for j in 0..m {
            let idx = [base + j, base + j + m, base + j + 2 * m, base + j + 3 * m];
            let (ar, ai) = (re[idx[0]] + re[idx[2]], im[idx[0]] + im[idx[2]]);
            let (br, bi) = (re[idx[0]] - re[idx[2]], im[idx[0]] - im[idx[2]]);
            let (cr, ci) = (re[idx[1]] + re[idx[3]], im[idx[1]] + im[idx[3]]);
            let (dr, di) = (re[idx[1]] - re[idx[3]], im[idx[1]] - im[idx[3]]);
            re[idx[0]] = ar + cr;
            im[idx[0]] = ai + ci;
            // b - i*d
            re[idx[1]] = br + di;
            im[idx[1]] = bi - dr;
            re[idx[2]] = ar - cr;
            im[idx[2]] = ai - ci;
            // b + i*d
            re[idx[3]] = br - di;
            im[idx[3]] = bi + dr;
            if j != 0 {
                for (s, &i) in idx.iter().enumerate().skip(1) {
                    rotate(re, im, i, j, s, span);
                }
            }
        }
    }
}

fn radix_p_pass<T: Float>(re: &mut [T], im: &mut [T], span: usize, m: usize, p: usize) {
    let n = re.len();
    let roots: Vec<(T, T)> = (0..p).map(|k| cossin::<T>(-(k as i64), p as i64)).collect();
    let mut xr = vec![T::zero(); p];
    let mut xi = vec![T::zero(); p];
    for base in (0..n).step_by(span) {
        for j in 0..m {
            for r in 0..p {
                xr[r] = re[base + j + r * m];
                xi[r] = im[base + j + r * m];
            }
            for s in 0..p {
                let (mut yr, mut yi) = (T::zero(), T::zero());
                for r in 0..p {
                    let (c, si) = roots[(r * s) % p];
                    yr = yr + xr[r] * c - xi[r] * si;
                    yi = yi + xr[r] * si + xi[r] * c;
                }
                let idx = base + j + s * m;
                re[idx] = yr;
                im[idx] = yi;
                if j != 0 && s != 0 {
                    rotate(re, im, idx, j, s, span);
                }
            }
        }
    }
}

/// Undo the digit reversal left by [`passes`], returning natural order.
///
/// Frequency `k` with mixed-radix digits `k = d0 + d1·p0 + d2·p0·p1 + ...`
/// sits at position `d0·n/p0 + d1·n/(p0·p1) + ...`.
pub fn digit_reverse<T: Float>(re: &[T], im: &[T], radices: &[usize]) -> ComplexVec<T> {
    let n = re.len();
    let mut out = ComplexVec::zeros(n);
    for k in 0..n {
        let mut rest = k;
        let mut weight = n;
        let mut pos = 0;
        for &p in radices {
            weight /= p;
            pos += (rest % p) * weight;
            rest /= p;
        }
        out.re[k] = re[pos];
        out.im[k] = im[pos];
    }
    out
}
