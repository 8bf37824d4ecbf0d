//! Radix selection.
//!
//! Two planners live here. [`RadixFactors`] peels factors off the length one
//! at a time for the staged transform; it never fails and accepts any
//! length. [`small_radix_factors`] produces the complete radix list for the
//! in-place transform, which only supports radices up to [`MAX_RADIX`].

use alloc::vec::Vec;

/// Radices tried first, in order, by [`RadixFactors`].
pub const PRIMES: [usize; 8] = [2, 3, 5, 7, 11, 13, 17, 19];

/// Largest radix accepted by the in-place transform.
pub const MAX_RADIX: usize = 19;

/// One pass of the staged transform.
///
/// `after * now * before` equals the transform length for every stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    /// Product of the radices already processed.
    pub after: usize,
    /// Radix of this pass.
    pub now: usize,
    /// Product of the radices still to come.
    pub before: usize,
}

impl Stage {
    /// Distance between the `now` inputs of one butterfly.
    #[inline]
    pub fn gamma(&self) -> usize {
        self.after * self.before
    }

    /// Distance between consecutive outputs of one butterfly group.
    #[inline]
    pub fn delta(&self) -> usize {
        self.now * self.after
    }
}

/// Lazily factors a length into [`Stage`]s.
///
/// The table in [`PRIMES`] is walked in order and never rewound; once it is
/// exhausted the scan continues over odd candidates 21, 23, 25, ... until one
/// divides the remaining length. `after` grows and `before` shrinks
/// monotonically; iteration ends when `before == 1`.
///
/// ```
/// use trigfft::factor::RadixFactors;
///
/// let radices: Vec<usize> = RadixFactors::new(60).map(|s| s.now).collect();
/// assert_eq!(radices, vec![2, 2, 3, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct RadixFactors {
    after: usize,
    before: usize,
    next: usize,
    now: usize,
}

impl RadixFactors {
    pub fn new(n: usize) -> Self {
        Self {
            after: 1,
            before: n,
            next: 0,
            now: PRIMES[0],
        }
    }
}

impl Iterator for RadixFactors {
    type Item = Stage;

    fn next(&mut self) -> Option<Stage> {
        if self.before <= 1 {
            return None;
        }
        loop {
            if self.next < PRIMES.len() {
                self.now = PRIMES[self.next];
            }
            if self.before % self.now == 0 {
                break;
            }
            self.next += 1;
            self.now += 2;
        }
        self.before /= self.now;
        let stage = Stage {
            after: self.after,
            now: self.now,
            before: self.before,
        };
        self.after *= self.now;
        Some(stage)
    }
}

/// Factor `n` into radices no larger than [`MAX_RADIX`].
///
/// Pairs of 2 are merged into radix 4; a lone 2 comes after them, followed by
/// the odd primes in ascending order. Returns `None` when `n` is zero or has
/// a prime factor above [`MAX_RADIX`]. `n == 1` yields an empty list.
pub fn small_radix_factors(n: usize) -> Option<Vec<usize>> {
    if n == 0 {
        return None;
    }
    let mut rest = n;
    let mut twos = 0usize;
    while rest % 2 == 0 {
        rest /= 2;
        twos += 1;
    }
    let mut radices = Vec::new();
    radices.extend(core::iter::repeat(4).take(twos / 2));
    if twos % 2 == 1 {
        radices.push(2);
    }
    for &p in &PRIMES[1..] {
        while rest % p == 0 {
            rest /= p;
            radices.push(p);
        }
    }
    if rest == 1 {
        Some(radices)
    } else {
        None
    }
}

/// Whether the in-place transform can handle length `n`.
pub fn can_factor(n: usize) -> bool {
    small_radix_factors(n).is_some()
}

/// Smallest length `>= n` accepted by the in-place transform.
///
/// Zero-padding a sequence to this length keeps it on the fast path.
pub fn next_factorable_len(n: usize) -> usize {
    let mut m = n.max(1);
    while !can_factor(m) {
        m += 1;
    }
    m
}
