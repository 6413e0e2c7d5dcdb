//! Injectable normal-variate streams.

use super::prng::PricerRng;

/// Sequential source of standard normal variates.
pub trait NormalGenerator {
    /// Draws one variate.
    fn next_normal(&mut self) -> f64;

    /// Fills `buffer` with variates, in draw order.
    fn fill_normal(&mut self, buffer: &mut [f64]) {
        for value in buffer.iter_mut() {
            *value = self.next_normal();
        }
    }
}

/// Factory of independent generator streams.
///
/// The Monte Carlo engine asks for one stream per chunk of paths. Stream
/// `index` must yield the same sequence whichever thread requests it.
///
/// # Examples
///
/// A deterministic source for tests:
///
/// ```rust
/// use pricer_pricing::rng::{NormalGenerator, NormalSource};
///
/// struct Zero;
///
/// impl NormalGenerator for Zero {
///     fn next_normal(&mut self) -> f64 {
///         0.0
///     }
/// }
///
/// struct ZeroSource;
///
/// impl NormalSource for ZeroSource {
///     type Generator = Zero;
///     fn stream(&self, _index: u64) -> Zero {
///         Zero
///     }
/// }
///
/// let mut buffer = [1.0; 4];
/// ZeroSource.stream(3).fill_normal(&mut buffer);
/// assert_eq!(buffer, [0.0; 4]);
/// ```
pub trait NormalSource: Sync {
    /// Generator type of one stream.
    type Generator: NormalGenerator;

    /// Returns stream number `index`.
    fn stream(&self, index: u64) -> Self::Generator;
}

/// SplitMix64 finaliser, used to decorrelate `(seed, index)` pairs.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::rng::splitmix64;
///
/// assert_ne!(splitmix64(1), splitmix64(2));
/// assert_eq!(splitmix64(42), splitmix64(42));
/// ```
#[inline]
pub fn splitmix64(x: u64) -> u64 {
    let mut z = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// [`PricerRng`] streams keyed by `(seed, index)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededSource {
    seed: u64,
}

impl SeededSource {
    /// Creates a source rooted at `seed`.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Creates a source with a fresh random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Root seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl NormalSource for SeededSource {
    type Generator = PricerRng;

    fn stream(&self, index: u64) -> PricerRng {
        PricerRng::from_seed(splitmix64(self.seed ^ splitmix64(index)))
    }
}
