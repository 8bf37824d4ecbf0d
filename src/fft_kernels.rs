//! Butterfly pass of the staged transform.
//!
//! A pass reads one split buffer pair and writes the other. The inputs of one
//! radix-`now` butterfly sit `gamma = after * before` samples apart in the
//! source; the outputs of one group land `delta = now * after` samples apart
//! in the destination.

use crate::factor::Stage;
use crate::num::Float;
use crate::twiddle::cossin;

/// Run the radix-`stage.now` butterflies of one pass.
///
/// All four slices must have the same length `after * now * before`. The
/// source is left untouched.
pub fn butterfly_stage<T: Float>(
    stage: Stage,
    src_re: &[T],
    src_im: &[T],
    dst_re: &mut [T],
    dst_im: &mut [T],
) {
    let Stage { after, now, before } = stage;
    let n = src_re.len();
    debug_assert_eq!(n, after * now * before);
    debug_assert!(src_im.len() == n && dst_re.len() == n && dst_im.len() == n);
    let gamma = stage.gamma();
    let delta = stage.delta();
    // the last of the `now` inputs; earlier ones are `gamma` apart below it
    let top = n - gamma;

    for j in 0..now {
        for ia in 0..after {
            // twiddles are generated directly rather than by recurrence
            let (w_re, w_im) = cossin::<T>(-((j * after + ia) as i64), delta as i64);
            for ib in 0..before {
                let mut src = top + ia + ib * after;
                let out = j * after + ia + ib * delta;
                let mut acc_re = src_re[src];
                let mut acc_im = src_im[src];
                if now == 2 {
                    dst_re[out] = acc_re * w_re - acc_im * w_im + src_re[src - gamma];
                    dst_im[out] = acc_re * w_im + acc_im * w_re + src_im[src - gamma];
                } else {
                    // Horner evaluation of the length-`now` sum
                    for _ in 1..now {
                        src -= gamma;
                        let t = acc_re;
                        acc_re = acc_re * w_re - acc_im * w_im + src_re[src];
                        acc_im = t * w_im + acc_im * w_re + src_im[src];
                    }
                    dst_re[out] = acc_re;
                    dst_im[out] = acc_im;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn single_stage_is_a_full_dft() {
        // a prime length runs as one radix-5 pass
        let re = [1.0f64, 2.0, -1.0, 0.5, 3.0];
        let im = [0.0f64, -1.0, 2.0, 0.25, 1.0];
        let mut out_re = vec![0.0; 5];
        let mut out_im = vec![0.0; 5];
        let stage = Stage {
            after: 1,
            now: 5,
            before: 1,
        };
        butterfly_stage(stage, &re, &im, &mut out_re, &mut out_im);
        for k in 0..5 {
            let (mut sr, mut si) = (0.0, 0.0);
            for t in 0..5 {
                let a = -2.0 * core::f64::consts::PI * (k * t) as f64 / 5.0;
                sr += re[t] * a.cos() - im[t] * a.sin();
                si += re[t] * a.sin() + im[t] * a.cos();
            }
            assert!((out_re[k] - sr).abs() < 1e-12, "re[{}]", k);
            assert!((out_im[k] - si).abs() < 1e-12, "im[{}]", k);
        }
    }

    #[test]
    fn radix_two_pass_pairs_halves() {
        let re = [1.0f64, 2.0, 3.0, 4.0];
        let im = [0.0f64; 4];
        let mut out_re = vec![0.0; 4];
        let mut out_im = vec![0.0; 4];
        let stage = Stage {
            after: 1,
            now: 2,
            before: 2,
        };
        butterfly_stage(stage, &re, &im, &mut out_re, &mut out_im);
        // sums and differences of x[i] and x[i + 2], interleaved
        assert_eq!(out_re, vec![4.0, -2.0, 6.0, -2.0]);
        assert!(out_im.iter().all(|v| v.abs() < 1e-15));
    }
}
