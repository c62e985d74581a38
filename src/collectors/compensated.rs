//! Two-level compensated floating-point summation.
//!
//! [`CompensatedSum`] implements the Kahan-Babuska-Klein (second-order
//! Neumaier) scheme: the running total carries a first-order error term `cs`
//! and a second-order term `ccs`, so adding values of very different
//! magnitudes loses far less precision than naive `+=`.
//!
//! A naive running total is kept alongside. It is only consulted at the end:
//! when the compensated result is NaN because infinities cancelled inside the
//! correction terms while the naive total is a signed infinity, that infinity
//! is returned instead.
//!
//! ```
//! use ironstream::collectors::CompensatedSum;
//!
//! let s: CompensatedSum = [1.0, 1e100, 1.0, -1e100].into_iter().collect();
//! assert_eq!(s.sum(), 2.0);
//! assert_eq!(s.simple_sum(), 0.0);
//! ```

/// Running state `[sum, cs, ccs, simple_sum]` of a compensated summation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CompensatedSum {
    sum: f64,
    cs: f64,
    ccs: f64,
    simple_sum: f64,
}

impl CompensatedSum {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sum: 0.0,
            cs: 0.0,
            ccs: 0.0,
            simple_sum: 0.0,
        }
    }

    /// Fold `v` into the running total.
    pub fn add(&mut self, v: f64) {
        let t = self.sum + v;
        let c = if self.sum.abs() >= v.abs() {
            (self.sum - t) + v
        } else {
            (v - t) + self.sum
        };
        self.sum = t;

        let t2 = self.cs + c;
        let cc = if self.cs.abs() >= c.abs() {
            (self.cs - t2) + c
        } else {
            (c - t2) + self.cs
        };
        self.cs = t2;
        self.ccs += cc;

        self.simple_sum += v;
    }

    /// The compensated total.
    ///
    /// `sum + cs + ccs`, unless that is NaN while the naive total is infinite,
    /// in which case the naive (correctly signed) infinity is returned.
    #[must_use]
    pub fn sum(&self) -> f64 {
        let tmp = self.sum + self.cs + self.ccs;
        if tmp.is_nan() && self.simple_sum.is_infinite() {
            self.simple_sum
        } else {
            tmp
        }
    }

    /// The naive, uncompensated running total.
    #[must_use]
    pub const fn simple_sum(&self) -> f64 {
        self.simple_sum
    }
}

impl Extend<f64> for CompensatedSum {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

impl FromIterator<f64> for CompensatedSum {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut s = Self::new();
        s.extend(iter);
        s
    }
}
