//! Sources of uniformly random indices.
use rand::{rngs::OsRng, Rng};

/// Source of uniformly distributed indices.
///
/// Every random decision made while generating a password goes
/// through this trait so that the source can be swapped for a
/// deterministic one in tests.
pub trait IndexSource {
    /// Uniformly random index in `0..bound`.
    ///
    /// Callers never pass a zero `bound`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<T: IndexSource + ?Sized> IndexSource for &mut T {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Adapts any [rand::Rng] to an [IndexSource].
#[derive(Debug, Clone, Default)]
pub struct RngSource<R>(R);

impl<R: Rng> RngSource<R> {
    /// Wrap a random number generator.
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    /// Unwrap the random number generator.
    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: Rng> IndexSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.0.gen_range(0..bound)
    }
}

/// Index source backed by the operating system CSPRNG.
pub type Csprng = RngSource<OsRng>;

/// Default cryptographically secure index source.
pub fn csprng() -> Csprng {
    RngSource(OsRng)
}
