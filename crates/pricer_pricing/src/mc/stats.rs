//! Streaming sample statistics with associative merge.
//!
//! Tracks the count, means, second central moments and co-moment of a pair
//! of samples `(x, y)`. Chunk accumulators merge with the pairwise update of
//! Chan, Golub and LeVeque, so any partition of the sample gives the same
//! moments up to floating-point rounding.

/// Running moments of a paired sample.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SampleStats {
    count: u64,
    mean_x: f64,
    mean_y: f64,
    m2_x: f64,
    m2_y: f64,
    c_xy: f64,
}

impl SampleStats {
    /// Adds one observation (Welford update).
    #[inline]
    pub fn push(&mut self, x: f64, y: f64) {
        self.count += 1;
        let n = self.count as f64;
        let dx = x - self.mean_x;
        let dy = y - self.mean_y;
        self.mean_x += dx / n;
        self.mean_y += dy / n;
        self.m2_x += dx * (x - self.mean_x);
        self.m2_y += dy * (y - self.mean_y);
        self.c_xy += dx * (y - self.mean_y);
    }

    /// Combines two accumulators.
    pub fn merge(self, other: SampleStats) -> SampleStats {
        if self.count == 0 {
            return other;
        }
        if other.count == 0 {
            return self;
        }
        let count = self.count + other.count;
        let (na, nb, n) = (self.count as f64, other.count as f64, count as f64);
        let dx = other.mean_x - self.mean_x;
        let dy = other.mean_y - self.mean_y;
        let weight = na * nb / n;
        SampleStats {
            count,
            mean_x: self.mean_x + dx * nb / n,
            mean_y: self.mean_y + dy * nb / n,
            m2_x: self.m2_x + other.m2_x + dx * dx * weight,
            m2_y: self.m2_y + other.m2_y + dy * dy * weight,
            c_xy: self.c_xy + other.c_xy + dx * dy * weight,
        }
    }

    /// Number of observations.
    #[inline]
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Sample mean of `x`.
    #[inline]
    pub fn mean_x(&self) -> f64 {
        self.mean_x
    }

    /// Sample mean of `y`.
    #[inline]
    pub fn mean_y(&self) -> f64 {
        self.mean_y
    }

    /// Unbiased variance of `x` (0 with fewer than two observations).
    pub fn variance_x(&self) -> f64 {
        self.unbiased(self.m2_x)
    }

    /// Unbiased variance of `y`.
    pub fn variance_y(&self) -> f64 {
        self.unbiased(self.m2_y)
    }

    /// Unbiased covariance of `x` and `y`.
    pub fn covariance(&self) -> f64 {
        self.unbiased(self.c_xy)
    }

    fn unbiased(&self, moment: f64) -> f64 {
        if self.count < 2 {
            0.0
        } else {
            moment / (self.count - 1) as f64
        }
    }
}
