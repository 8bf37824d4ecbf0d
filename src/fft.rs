//! Fast Fourier Transform (FFT) of split complex sequences.
//!
//! Two paths compute the same transform. The in-place Sande-Gentleman path
//! ([`crate::mixed_radix`]) handles every length whose prime factors are at
//! most 19. The staged path runs one [`butterfly_stage`] per radix from
//! [`RadixFactors`], ping-ponging between two buffer pairs, and accepts any
//! length. [`FftConfig::use_legacy_path`] forces the staged path.
//!
//! The forward transform is `X[k] = Σ x[n]·exp(-2πikn/N)`; the inverse
//! divides by `N`, so `ifft(fft(x)) == x`.

use alloc::vec;

use crate::factor::{small_radix_factors, RadixFactors};
use crate::fft_kernels::butterfly_stage;
use crate::mixed_radix;
use crate::num::{length_as, ComplexVec, Float};

/// Environment variable consulted by [`FftConfig::from_env`].
pub const LEGACY_PATH_ENV: &str = "TRIGFFT_LEGACY_PATH";

/// Usage errors reported by every transform entry point.
///
/// Checks run before any buffer is allocated; a failed call leaves no
/// partial output behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftError {
    /// Zero-length input or a zero-sized 2-D extent.
    EmptyInput,
    /// Paired buffers (real/imaginary, or a grid and its shape) disagree in size.
    MismatchedLengths,
    /// The transform needs an even length; carries the length received.
    OddLength(usize),
}

impl core::fmt::Display for FftError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FftError::EmptyInput => write!(f, "transform length must be non-zero"),
            FftError::MismatchedLengths => {
                write!(f, "paired buffers have different lengths or shapes")
            }
            FftError::OddLength(n) => write!(f, "length {} is not a multiple of 2", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FftError {}

/// Per-transform configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FftConfig {
    /// Always use the staged ping-pong transform, even when the in-place
    /// path could handle the length.
    pub use_legacy_path: bool,
}

impl FftConfig {
    /// Configuration that forces the staged transform.
    pub const fn legacy() -> Self {
        Self {
            use_legacy_path: true,
        }
    }

    /// Read [`LEGACY_PATH_ENV`]; `1`, `true` or `yes` select the legacy path.
    #[cfg(feature = "std")]
    pub fn from_env() -> Self {
        let use_legacy_path = std::env::var(LEGACY_PATH_ENV)
            .map(|v| {
                let v = v.trim();
                v == "1" || v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("yes")
            })
            .unwrap_or(false);
        Self { use_legacy_path }
    }
}

/// Algorithm chosen for a given length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FftStrategy {
    /// Length 1: output equals input.
    Identity,
    /// In-place passes with radices up to 19, then digit reversal.
    SandeGentleman,
    /// One ping-pong butterfly pass per factor; any length.
    Staged,
}

/// Complex transform over split buffers.
pub trait FftImpl<T: Float> {
    /// Forward transform of `re + i·im`.
    fn fft(&self, re: &[T], im: &[T]) -> Result<ComplexVec<T>, FftError>;

    /// Inverse transform: the forward transform of the conjugate, with the
    /// real part divided by `N` and the imaginary part by `-N`.
    fn ifft(&self, re: &[T], im: &[T]) -> Result<ComplexVec<T>, FftError> {
        check_pair(re, im)?;
        let conj: alloc::vec::Vec<T> = im.iter().map(|&v| -v).collect();
        let mut out = self.fft(re, &conj)?;
        let n = length_as::<T>(re.len());
        out.scale(T::one() / n, -T::one() / n);
        Ok(out)
    }
}

/// Validate a real/imaginary pair before any allocation.
#[inline]
pub(crate) fn check_pair<T>(re: &[T], im: &[T]) -> Result<(), FftError> {
    if re.len() != im.len() {
        return Err(FftError::MismatchedLengths);
    }
    if re.is_empty() {
        return Err(FftError::EmptyInput);
    }
    Ok(())
}

/// Which of the two buffer pairs holds the live data between stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LivePair {
    Primary,
    Secondary,
}

/// Scalar mixed-radix FFT.
#[derive(Debug, Clone, Copy)]
pub struct ScalarFftImpl<T: Float> {
    config: FftConfig,
    _marker: core::marker::PhantomData<T>,
}

impl<T: Float> Default for ScalarFftImpl<T> {
    fn default() -> Self {
        Self::with_config(FftConfig::default())
    }
}

impl<T: Float> ScalarFftImpl<T> {
    pub fn with_config(config: FftConfig) -> Self {
        Self {
            config,
            _marker: core::marker::PhantomData,
        }
    }

    pub fn config(&self) -> FftConfig {
        self.config
    }

    /// Strategy [`FftImpl::fft`] will use for length `n`.
    pub fn strategy_for(&self, n: usize) -> FftStrategy {
        if n == 1 {
            FftStrategy::Identity
        } else if !self.config.use_legacy_path && small_radix_factors(n).is_some() {
            FftStrategy::SandeGentleman
        } else {
            FftStrategy::Staged
        }
    }

    /// Staged transform: one butterfly pass per factor, alternating between
    /// the input copy and a scratch pair.
    pub fn staged_fft(&self, re: &[T], im: &[T]) -> Result<ComplexVec<T>, FftError> {
        check_pair(re, im)?;
        let n = re.len();
        let mut a_re = re.to_vec();
        let mut a_im = im.to_vec();
        let mut x_re = vec![T::zero(); n];
        let mut x_im = vec![T::zero(); n];
        let mut live = LivePair::Primary;
        for stage in RadixFactors::new(n) {
            fft_log!(
                trace,
                "stage after={} now={} before={}",
                stage.after,
                stage.now,
                stage.before
            );
            live = match live {
                LivePair::Primary => {
                    butterfly_stage(stage, &a_re, &a_im, &mut x_re, &mut x_im);
                    LivePair::Secondary
                }
                LivePair::Secondary => {
                    butterfly_stage(stage, &x_re, &x_im, &mut a_re, &mut a_im);
                    LivePair::Primary
                }
            };
        }
        Ok(match live {
            LivePair::Primary => ComplexVec { re: a_re, im: a_im },
            LivePair::Secondary => ComplexVec { re: x_re, im: x_im },
        })
    }

    /// In-place Sande-Gentleman transform followed by digit reversal.
    ///
    /// Falls back to [`Self::staged_fft`] when `n` has a prime factor
    /// above 19.
    pub fn sande_gentleman_fft(&self, re: &[T], im: &[T]) -> Result<ComplexVec<T>, FftError> {
        check_pair(re, im)?;
        let radices = match small_radix_factors(re.len()) {
            Some(r) => r,
            None => return self.staged_fft(re, im),
        };
        let mut work_re = re.to_vec();
        let mut work_im = im.to_vec();
        mixed_radix::passes(&mut work_re, &mut work_im, &radices);
        Ok(mixed_radix::digit_reverse(&work_re, &work_im, &radices))
    }
}

impl<T: Float> FftImpl<T> for ScalarFftImpl<T> {
    fn fft(&self, re: &[T], im: &[T]) -> Result<ComplexVec<T>, FftError> {
        check_pair(re, im)?;
        let n = re.len();
        let strategy = self.strategy_for(n);
        fft_log!(debug, "fft n={} strategy={:?}", n, strategy);
        match strategy {
            FftStrategy::Identity => Ok(ComplexVec {
                re: re.to_vec(),
                im: im.to_vec(),
            }),
            FftStrategy::SandeGentleman => self.sande_gentleman_fft(re, im),
            FftStrategy::Staged => self.staged_fft(re, im),
        }
    }
}

/// Forward FFT with the default configuration.
pub fn fft<T: Float>(re: &[T], im: &[T]) -> Result<ComplexVec<T>, FftError> {
    ScalarFftImpl::<T>::default().fft(re, im)
}

/// Inverse FFT with the default configuration.
pub fn ifft<T: Float>(re: &[T], im: &[T]) -> Result<ComplexVec<T>, FftError> {
    ScalarFftImpl::<T>::default().ifft(re, im)
}
