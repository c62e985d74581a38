//! Numeric collectors: `Summing`, `Averaging`, `Statistics`.
//!
//! All three accumulate through [`CompensatedSum`], so their results do not
//! drift the way a naive running total does. Each element is first projected
//! to `f64` by a [`ValueMapper`]: [`Identity`] for plain numbers, or any
//! `Fn(&T) -> f64` for records.

use super::compensated::CompensatedSum;
use crate::collector::Collector;
use num_traits::AsPrimitive;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Projects an element to the `f64` value being aggregated.
pub trait ValueMapper<T> {
    fn value(&self, element: &T) -> f64;
}

/// Uses the element itself (any primitive number) as the value.
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl<T: AsPrimitive<f64>> ValueMapper<T> for Identity {
    #[inline]
    fn value(&self, element: &T) -> f64 {
        element.as_()
    }
}

impl<T, F> ValueMapper<T> for F
where
    F: Fn(&T) -> f64,
{
    #[inline]
    fn value(&self, element: &T) -> f64 {
        self(element)
    }
}

/* ===================== Summing ===================== */

/// Compensated sum of the mapped values. Empty input sums to `0.0`.
///
/// - Container: [`CompensatedSum`]
/// - Output: `f64`
#[derive(Clone, Copy, Debug, Default)]
pub struct Summing<M = Identity> {
    mapper: M,
}

impl<M> Summing<M> {
    #[must_use]
    pub const fn new(mapper: M) -> Self {
        Self { mapper }
    }
}

impl<T, M: ValueMapper<T>> Collector<T, CompensatedSum, f64> for Summing<M> {
    fn supplier(&self) -> CompensatedSum {
        CompensatedSum::new()
    }

    fn accumulator(&self, container: &mut CompensatedSum, element: T) {
        container.add(self.mapper.value(&element));
    }

    fn finisher(&self, container: CompensatedSum) -> f64 {
        container.sum()
    }
}

/* ===================== Averaging ===================== */

/// Arithmetic mean of the mapped values, or `0.0` when nothing was collected.
///
/// - Container: `(CompensatedSum, count)`
/// - Output: `f64`
#[derive(Clone, Copy, Debug, Default)]
pub struct Averaging<M = Identity> {
    mapper: M,
}

impl<M> Averaging<M> {
    #[must_use]
    pub const fn new(mapper: M) -> Self {
        Self { mapper }
    }
}

impl<T, M: ValueMapper<T>> Collector<T, (CompensatedSum, u64), f64> for Averaging<M> {
    fn supplier(&self) -> (CompensatedSum, u64) {
        (CompensatedSum::new(), 0)
    }

    fn accumulator(&self, container: &mut (CompensatedSum, u64), element: T) {
        container.0.add(self.mapper.value(&element));
        container.1 += 1;
    }

    #[allow(clippy::cast_precision_loss)]
    fn finisher(&self, container: (CompensatedSum, u64)) -> f64 {
        if container.1 == 0 {
            0.0
        } else {
            container.0.sum() / container.1 as f64
        }
    }
}

/* ===================== Statistics ===================== */

/// Summary record produced by [`Statistics`].
///
/// On empty input `count` is 0, `sum` and `avg` are 0 and `min`/`max` are `None`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Stats {
    pub sum: f64,
    pub count: u64,
    pub avg: f64,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[cfg(feature = "serde")]
impl Stats {
    /// Render as a JSON object (`{"sum":..,"count":..,"avg":..,"min":..,"max":..}`).
    ///
    /// # Errors
    /// Fails only if serialization itself fails.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Running state of a [`Statistics`] collection.
#[derive(Clone, Copy, Debug)]
pub struct StatsState {
    sum: CompensatedSum,
    count: u64,
    min: f64,
    max: f64,
}

impl Default for StatsState {
    fn default() -> Self {
        Self {
            sum: CompensatedSum::new(),
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }
}

/// Sum, count, average, minimum and maximum of the mapped values in one pass.
///
/// - Container: [`StatsState`]
/// - Output: [`Stats`]
#[derive(Clone, Copy, Debug, Default)]
pub struct Statistics<M = Identity> {
    mapper: M,
}

impl<M> Statistics<M> {
    #[must_use]
    pub const fn new(mapper: M) -> Self {
        Self { mapper }
    }
}

impl<T, M: ValueMapper<T>> Collector<T, StatsState, Stats> for Statistics<M> {
    fn supplier(&self) -> StatsState {
        StatsState::default()
    }

    fn accumulator(&self, container: &mut StatsState, element: T) {
        let v = self.mapper.value(&element);
        container.sum.add(v);
        container.count += 1;
        if v < container.min {
            container.min = v;
        }
        if v > container.max {
            container.max = v;
        }
    }

    #[allow(clippy::cast_precision_loss)]
    fn finisher(&self, container: StatsState) -> Stats {
        let sum = container.sum.sum();
        if container.count == 0 {
            return Stats {
                sum,
                count: 0,
                avg: 0.0,
                min: None,
                max: None,
            };
        }
        Stats {
            sum,
            count: container.count,
            avg: sum / container.count as f64,
            min: Some(container.min),
            max: Some(container.max),
        }
    }
}
