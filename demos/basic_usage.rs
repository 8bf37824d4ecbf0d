//! Basic usage example for trigfft
//!
//! Complex FFT of an arbitrary length, the real FFT half spectrum and a 2-D
//! transform, all over split real/imaginary buffers.

use trigfft::factor::next_factorable_len;
use trigfft::fft::{FftConfig, FftImpl, ScalarFftImpl};
use trigfft::ndfft::{fft2, ifft2};
use trigfft::rfft::RealFftImpl;

fn main() -> Result<(), trigfft::FftError> {
    println!("=== trigfft Basic Usage Example ===\n");

    // 1. Complex FFT
    println!("1. Fast Fourier Transform (FFT)");
    let fft = ScalarFftImpl::<f64>::default();
    let re = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let im = [0.0; 6];
    let spec = fft.fft(&re, &im)?;
    println!("   Input: {:?}", re);
    println!(
        "   FFT: {:?}",
        spec.re
            .iter()
            .zip(spec.im.iter())
            .map(|(r, i)| format!("{:.2}{:+.2}i", r, i))
            .collect::<Vec<_>>()
    );
    let back = fft.ifft(&spec.re, &spec.im)?;
    println!("   IFFT: {:?}\n", back.re.iter().map(|v| format!("{:.2}", v)).collect::<Vec<_>>());

    // 2. Strategy per length
    println!("2. Transform paths");
    let legacy = ScalarFftImpl::<f64>::with_config(FftConfig::legacy());
    for n in [64usize, 360, 43 * 47] {
        println!(
            "   n={:5}: default {:?}, legacy {:?}, pad to {}",
            n,
            fft.strategy_for(n),
            legacy.strategy_for(n),
            next_factorable_len(n)
        );
    }
    println!();

    // 3. Real FFT
    println!("3. Real FFT");
    let signal: Vec<f64> = (0..16)
        .map(|i| (2.0 * std::f64::consts::PI * 3.0 * i as f64 / 16.0).cos())
        .collect();
    let half = fft.rfft(&signal)?;
    let peak = half
        .re
        .iter()
        .zip(half.im.iter())
        .map(|(r, i)| (r * r + i * i).sqrt())
        .enumerate()
        .fold((0, 0.0), |best, (k, m)| if m > best.1 { (k, m) } else { best });
    println!("   {} bins, peak at bin {} (magnitude {:.2})\n", half.len(), peak.0, peak.1);

    // 4. 2-D FFT
    println!("4. 2-D FFT");
    let (rows, cols) = (3, 4);
    let grid: Vec<f64> = (0..rows * cols).map(|i| i as f64).collect();
    let zeros = vec![0.0; rows * cols];
    let spec2 = fft2(&fft, &grid, &zeros, rows, cols)?;
    println!("   DC bin: {:.2}", spec2.re[0]);
    let back2 = ifft2(&fft, &spec2.re, &spec2.im, rows, cols)?;
    println!("   round trip: {:?}", back2.re.iter().map(|v| v.round()).collect::<Vec<_>>());
    Ok(())
}
