//! Twiddle factors.
//!
//! Every rotation used by the transforms is an exact rational fraction of a
//! full turn, `2π·n/d`. [`cossin`] exploits that: the fraction is reduced to
//! the nearest quarter turn in integer arithmetic and the trigonometric
//! functions are only evaluated on the remaining angle in `[-π/4, π/4]`, so
//! the rounding error does not grow with `n/d`.

use crate::num::Float;

/// Return `(cos(2πn/d), sin(2πn/d))`.
///
/// `d` must be positive. Negative `n` selects the clockwise rotation used by
/// the forward transform.
///
/// ```
/// use trigfft::twiddle::cossin;
///
/// let (c, s): (f64, f64) = cossin(1, 4);
/// assert_eq!((c, s), (0.0, 1.0));
/// ```
#[inline]
pub fn cossin<T: Float>(n: i64, d: i64) -> (T, T) {
    debug_assert!(d > 0, "twiddle denominator must be positive");
    // nearest quarter turn: floor(4n/d + 1/2) == floor((8n + d) / 2d)
    let quarter = (8 * n + d).div_euclid(2 * d);
    let residual = 4 * n - quarter * d;
    let ratio = T::frac_pi_2() * T::from_f64(residual as f64) / T::from_f64(d as f64);
    let (c, s) = (ratio.cos(), ratio.sin());
    match quarter.rem_euclid(4) {
        0 => (c, s),
        1 => (-s, c),
        2 => (-c, -s),
        _ => (s, -c),
    }
}
