use alloc::vec::Vec;

use crate::fft::FftError;

// Minimal float trait for the generic transforms (no_std, trig through libm)
pub trait Float:
    Copy
    + Clone
    + PartialEq
    + PartialOrd
    + core::fmt::Debug
    + core::ops::Add<Output = Self>
    + core::ops::Sub<Output = Self>
    + core::ops::Mul<Output = Self>
    + core::ops::Div<Output = Self>
    + core::ops::Neg<Output = Self>
    + 'static
{
    fn zero() -> Self;
    fn one() -> Self;
    fn from_f64(x: f64) -> Self;
    /// Attempt to convert a `usize` into the floating-point type.
    /// Returns `None` if the value cannot be represented exactly.
    fn from_usize(x: usize) -> Option<Self>;
    fn cos(self) -> Self;
    fn sin(self) -> Self;
    fn abs(self) -> Self;
    fn frac_pi_2() -> Self;
}

impl Float for f32 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x as f32
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: u64 = 1 << 24;
        if (x as u64) < MAX_EXACT {
            Some(x as f32)
        } else {
            None
        }
    }
    fn cos(self) -> Self {
        libm::cosf(self)
    }
    fn sin(self) -> Self {
        libm::sinf(self)
    }
    fn abs(self) -> Self {
        libm::fabsf(self)
    }
    fn frac_pi_2() -> Self {
        core::f32::consts::FRAC_PI_2
    }
}

impl Float for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
    fn from_f64(x: f64) -> Self {
        x
    }
    fn from_usize(x: usize) -> Option<Self> {
        const MAX_EXACT: u64 = 1 << 53;
        if (x as u64) < MAX_EXACT {
            Some(x as f64)
        } else {
            None
        }
    }
    fn cos(self) -> Self {
        libm::cos(self)
    }
    fn sin(self) -> Self {
        libm::sin(self)
    }
    fn abs(self) -> Self {
        libm::fabs(self)
    }
    fn frac_pi_2() -> Self {
        core::f64::consts::FRAC_PI_2
    }
}

/// Convert a transform length to `T`, falling back to a rounded conversion
/// for lengths beyond the exactly representable range.
#[inline]
pub(crate) fn length_as<T: Float>(n: usize) -> T {
    T::from_usize(n).unwrap_or_else(|| T::from_f64(n as f64))
}

/// Owned split-complex sequence: real and imaginary parts in two buffers of
/// equal length.
#[derive(Clone, Debug, PartialEq)]
pub struct ComplexVec<T: Float> {
    pub re: Vec<T>,
    pub im: Vec<T>,
}

impl<T: Float> ComplexVec<T> {
    /// Pair two buffers, rejecting unequal lengths.
    pub fn new(re: Vec<T>, im: Vec<T>) -> Result<Self, FftError> {
        if re.len() != im.len() {
            return Err(FftError::MismatchedLengths);
        }
        Ok(Self { re, im })
    }

    /// `n` samples of `0 + 0i`.
    pub fn zeros(n: usize) -> Self {
        Self {
            re: alloc::vec![T::zero(); n],
            im: alloc::vec![T::zero(); n],
        }
    }

    pub fn len(&self) -> usize {
        self.re.len()
    }
    pub fn is_empty(&self) -> bool {
        self.re.is_empty()
    }

    pub fn as_slices(&self) -> (&[T], &[T]) {
        (&self.re, &self.im)
    }

    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        (&mut self.re, &mut self.im)
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.re, self.im)
    }

    /// Negate the imaginary part in place.
    pub fn conj(&mut self) {
        for v in self.im.iter_mut() {
            *v = -*v;
        }
    }

    /// Multiply the real part by `re_factor` and the imaginary part by
    /// `im_factor`.
    pub fn scale(&mut self, re_factor: T, im_factor: T) {
        for v in self.re.iter_mut() {
            *v = *v * re_factor;
        }
        for v in self.im.iter_mut() {
            *v = *v * im_factor;
        }
    }
}
