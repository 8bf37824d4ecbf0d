//! Shared inputs for the trigfft benchmarks.

/// Deterministic test signal of length `n`.
pub fn signal(n: usize, phase: f64) -> Vec<f64> {
    (0..n)
        .map(|i| (i as f64 * 0.173 + phase).sin() + 0.25 * (i as f64 * 0.031).cos())
        .collect()
}

/// Lengths covering powers of two, smooth mixed radices and a large prime
/// factor that forces the staged path.
pub const SIZES: &[usize] = &[64, 360, 1024, 2310, 4096, 43 * 47];
