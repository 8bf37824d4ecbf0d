//! DCT/DST usage example for trigfft

use trigfft::dct::{dct1, dct1_inverse, dct2, dct2_inverse};
use trigfft::dst::{dst2, dst2_inverse};
use trigfft::fft::ScalarFftImpl;

fn main() -> Result<(), trigfft::FftError> {
    let fft = ScalarFftImpl::<f32>::default();
    let input = [1.0f32, 2.0, 3.0, 4.0, 3.0, 2.0, 1.0, 0.0];

    let coeffs = dct2(&fft, &input)?;
    println!("DCT-II: {:?}", coeffs);
    println!("DCT-II inverse: {:?}", dct2_inverse(&fft, &coeffs)?);

    let sines = dst2(&fft, &input)?;
    println!("DST-II: {:?}", sines);
    println!("DST-II inverse: {:?}", dst2_inverse(&fft, &sines)?);

    // DCT-I takes n + 1 samples with n even
    let sym = [0.0f32, 1.0, 0.0, -1.0, 0.0];
    let c1 = dct1(&fft, &sym)?;
    println!("DCT-I: {:?}", c1);
    println!("DCT-I inverse: {:?}", dct1_inverse(&fft, &c1)?);
    Ok(())
}
