// Test intent: verifies usage errors and degenerate lengths.
use trigfft::dct::{dct1, dct2};
use trigfft::dst::{dst1_inverse, dst2_inverse};
use trigfft::fft::{FftConfig, FftError, FftImpl, ScalarFftImpl};
use trigfft::ndfft::{fft2, ifft2};
use trigfft::rfft::{real_fft, real_ifft};

#[test]
fn zero_length_errors_everywhere() {
    let fft = ScalarFftImpl::<f64>::default();
    assert_eq!(fft.fft(&[], &[]), Err(FftError::EmptyInput));
    assert_eq!(fft.ifft(&[], &[]), Err(FftError::EmptyInput));
    assert_eq!(real_fft::<f64>(&[]), Err(FftError::EmptyInput));
    assert_eq!(real_ifft::<f64>(&[], &[]), Err(FftError::EmptyInput));
    assert_eq!(dct2(&fft, &[]), Err(FftError::EmptyInput));
    assert_eq!(dct1(&fft, &[]), Err(FftError::EmptyInput));
    assert_eq!(dst2_inverse(&fft, &[]), Err(FftError::EmptyInput));
    assert_eq!(dst1_inverse(&fft, &[]), Err(FftError::EmptyInput));
    assert_eq!(fft2(&fft, &[], &[], 0, 0), Err(FftError::EmptyInput));
}

#[test]
fn odd_lengths_rejected_by_real_transforms() {
    let fft = ScalarFftImpl::<f64>::default();
    assert_eq!(real_fft(&[1.0f64; 5]), Err(FftError::OddLength(5)));
    assert_eq!(dct2(&fft, &[1.0; 7]), Err(FftError::OddLength(7)));
    assert_eq!(dct1(&fft, &[1.0; 4]), Err(FftError::OddLength(3)));
    assert_eq!(dst1_inverse(&fft, &[1.0; 6]), Err(FftError::OddLength(5)));
}

#[test]
fn mismatched_pairs_rejected() {
    let fft = ScalarFftImpl::<f64>::with_config(FftConfig::legacy());
    assert_eq!(
        fft.fft(&[1.0, 2.0, 3.0], &[0.0, 0.0]),
        Err(FftError::MismatchedLengths)
    );
    assert_eq!(
        real_ifft(&[1.0f64, 2.0, 3.0], &[0.0, 0.0]),
        Err(FftError::MismatchedLengths)
    );
    assert_eq!(
        ifft2(&fft, &[0.0; 4], &[0.0; 4], 1, 3),
        Err(FftError::MismatchedLengths)
    );
}

#[test]
fn length_one_is_identity() {
    for config in [FftConfig::default(), FftConfig::legacy()] {
        let fft = ScalarFftImpl::<f32>::with_config(config);
        let out = fft.fft(&[2.5], &[-0.5]).unwrap();
        assert_eq!((out.re[0], out.im[0]), (2.5, -0.5));
    }
}

#[cfg(feature = "std")]
#[test]
fn errors_display() {
    assert_eq!(
        FftError::EmptyInput.to_string(),
        "transform length must be non-zero"
    );
    let boxed: Box<dyn std::error::Error> = Box::new(FftError::MismatchedLengths);
    assert!(boxed.to_string().contains("different lengths"));
}
