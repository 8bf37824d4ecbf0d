// Test intent: verifies the complex FFT against the direct definition.
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::PI;
use trigfft::fft::{fft, ifft, FftConfig, FftImpl, ScalarFftImpl};
use trigfft::rfft::real_fft;

fn direct_dft(re: &[f64], im: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = re.len();
    let mut out_re = vec![0.0; n];
    let mut out_im = vec![0.0; n];
    for k in 0..n {
        for t in 0..n {
            let a = -2.0 * PI * ((k * t) % n) as f64 / n as f64;
            out_re[k] += re[t] * a.cos() - im[t] * a.sin();
            out_im[k] += re[t] * a.sin() + im[t] * a.cos();
        }
    }
    (out_re, out_im)
}

fn random_pair(rng: &mut StdRng, n: usize) -> (Vec<f64>, Vec<f64>) {
    let re = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    let im = (0..n).map(|_| rng.gen_range(-1.0..1.0)).collect();
    (re, im)
}

#[test]
fn matches_direct_dft_on_both_paths() {
    let mut rng = StdRng::seed_from_u64(7);
    for config in [FftConfig::default(), FftConfig::legacy()] {
        let plan = ScalarFftImpl::<f64>::with_config(config);
        for n in [12usize, 30, 60, 43 * 47] {
            let (re, im) = random_pair(&mut rng, n);
            let out = plan.fft(&re, &im).unwrap();
            let (exp_re, exp_im) = direct_dft(&re, &im);
            let tol = 1e-9 * n as f64;
            for k in 0..n {
                assert!((out.re[k] - exp_re[k]).abs() < tol, "n={} re[{}]", n, k);
                assert!((out.im[k] - exp_im[k]).abs() < tol, "n={} im[{}]", n, k);
            }
        }
    }
}

#[test]
fn twelve_point_scenario() {
    let n = 12;
    let w = |i: usize, f: usize| 2.0 * PI * (f * i) as f64 / n as f64;
    let re: Vec<f64> = (0..n)
        .map(|i| 0.7 + 0.2 * w(i, 4).cos() + 0.3 * w(i, 3).sin())
        .collect();
    let im: Vec<f64> = (0..n)
        .map(|i| 0.9 + 0.5 * w(i, 2).sin() + 0.4 * w(i, 1).cos())
        .collect();
    let expected_re = [8.4, 0.0, 3.0, 0.0, 1.2, 0.0, 0.0, 0.0, 1.2, 0.0, -3.0, 0.0];
    let expected_im = [10.8, 2.4, 0.0, -1.8, 0.0, 0.0, 0.0, 0.0, 0.0, 1.8, 0.0, 2.4];
    for config in [FftConfig::default(), FftConfig::legacy()] {
        let out = ScalarFftImpl::<f64>::with_config(config).fft(&re, &im).unwrap();
        for k in 0..n {
            assert!((out.re[k] - expected_re[k]).abs() < 1e-12, "re[{}] = {}", k, out.re[k]);
            assert!((out.im[k] - expected_im[k]).abs() < 1e-12, "im[{}] = {}", k, out.im[k]);
        }
    }
}

#[test]
fn real_input_spectrum_is_conjugate_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    for n in [2usize, 12, 30, 60, 128] {
        let (re, _) = random_pair(&mut rng, n);
        let full = fft(&re, &vec![0.0; n]).unwrap();
        let half = real_fft(&re).unwrap();
        for k in 0..=n / 2 {
            assert!((full.re[k] - half.re[k]).abs() < 1e-10);
            assert!((full.im[k] - half.im[k]).abs() < 1e-10);
        }
        for k in n / 2 + 1..n {
            assert!((full.re[k] - full.re[n - k]).abs() < 1e-10);
            assert!((full.im[k] + full.im[n - k]).abs() < 1e-10);
        }
    }
}

#[test]
fn large_prime_roundtrip() {
    let mut rng = StdRng::seed_from_u64(3);
    let (re, im) = random_pair(&mut rng, 1009);
    let spec = fft(&re, &im).unwrap();
    let back = ifft(&spec.re, &spec.im).unwrap();
    for i in 0..re.len() {
        assert!((back.re[i] - re[i]).abs() < 1e-9);
        assert!((back.im[i] - im[i]).abs() < 1e-9);
    }
}

proptest! {
    #[test]
    fn linearity(
        n in 1usize..64,
        a in -4.0f64..4.0,
        b in -4.0f64..4.0,
        ref x in proptest::collection::vec(-10.0f64..10.0, 256)
    ) {
        let (u1, v1) = (&x[..n], &x[64..64 + n]);
        let (u2, v2) = (&x[128..128 + n], &x[192..192 + n]);
        let mix = |p: &[f64], q: &[f64]| -> Vec<f64> {
            p.iter().zip(q.iter()).map(|(&p, &q)| a * p + b * q).collect()
        };
        let lhs = fft(&mix(u1, u2), &mix(v1, v2)).unwrap();
        let f1 = fft(u1, v1).unwrap();
        let f2 = fft(u2, v2).unwrap();
        for k in 0..n {
            prop_assert!((lhs.re[k] - (a * f1.re[k] + b * f2.re[k])).abs() < 1e-8);
            prop_assert!((lhs.im[k] - (a * f1.im[k] + b * f2.im[k])).abs() < 1e-8);
        }
    }

    #[test]
    fn fast_and_legacy_paths_agree(n in 1usize..200, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (re, im) = random_pair(&mut rng, n);
        let fast = ScalarFftImpl::<f64>::default().fft(&re, &im).unwrap();
        let legacy = ScalarFftImpl::<f64>::with_config(FftConfig::legacy()).fft(&re, &im).unwrap();
        for k in 0..n {
            prop_assert!((fast.re[k] - legacy.re[k]).abs() < 1e-9);
            prop_assert!((fast.im[k] - legacy.im[k]).abs() < 1e-9);
        }
    }
}
