//! Demonstrates enabling verbose logging for trigfft.
use trigfft::dct::dct2;
use trigfft::fft::{FftConfig, FftImpl, ScalarFftImpl};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let signal = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let fft = ScalarFftImpl::<f64>::with_config(FftConfig::from_env());

    fft.fft(&signal, &vec![0.0; signal.len()]).unwrap();
    dct2(&fft, &signal).unwrap();
}
