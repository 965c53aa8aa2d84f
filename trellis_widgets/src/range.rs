// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded integer value shared by slider-like controls.

/// Ordered bounds, a clamped current value, and a step size.
///
/// Every write goes through [`RangeValue::set_value`], which clamps to
/// `[min, max]`. The bounds themselves are not validated: with `max < min`
/// the clamp resolves to `max`, and [`RangeValue::percent`] treats any
/// `max <= min` range as empty.
///
/// ```rust
/// use trellis_widgets::RangeValue;
///
/// let mut range = RangeValue::new(0, 100);
/// range.set_value(140);
/// assert_eq!(range.value(), 100);
///
/// range.set_max(50);
/// assert_eq!(range.value(), 50);
/// assert_eq!(range.percent(), 1.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RangeValue {
    min: u32,
    max: u32,
    value: i32,
    steps_count: u32,
}

impl RangeValue {
    /// Creates a range with the value at `min` and no fixed step count.
    #[must_use]
    pub fn new(min: u32, max: u32) -> Self {
        let mut range = Self {
            min,
            max,
            value: 0,
            steps_count: 0,
        };
        range.value = range.clamp(i64::from(min));
        range
    }

    /// Lower bound.
    #[must_use]
    #[inline]
    pub fn min(&self) -> u32 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    #[inline]
    pub fn max(&self) -> u32 {
        self.max
    }

    /// Current value.
    #[must_use]
    #[inline]
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Number of discrete steps the range is divided into, or `0` for unit steps.
    #[must_use]
    #[inline]
    pub fn steps_count(&self) -> u32 {
        self.steps_count
    }

    /// Sets the number of discrete steps; `0` means unit steps.
    pub fn set_steps_count(&mut self, steps_count: u32) {
        self.steps_count = steps_count;
    }

    /// Sets the lower bound and re-clamps the value.
    pub fn set_min(&mut self, min: u32) {
        self.min = min;
        self.value = self.clamp(i64::from(self.value));
    }

    /// Sets the upper bound and re-clamps the value.
    pub fn set_max(&mut self, max: u32) {
        self.max = max;
        self.value = self.clamp(i64::from(self.value));
    }

    /// Clamps `value` into `[min, max]` and stores it.
    ///
    /// Returns `true` if the stored value changed.
    pub fn set_value(&mut self, value: i64) -> bool {
        let clamped = self.clamp(value);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }

    /// Moves the value by `steps` step sizes (negative moves toward `min`).
    ///
    /// Returns `true` if the stored value changed.
    pub fn step_by(&mut self, steps: i64) -> bool {
        let target = i64::from(self.value) + steps * i64::from(self.step_size());
        self.set_value(target)
    }

    /// The increment used for discrete stepping.
    ///
    /// `(max - min) / steps_count`, at least 1, when a step count is set;
    /// otherwise 1.
    #[must_use]
    pub fn step_size(&self) -> u32 {
        if self.steps_count == 0 {
            return 1;
        }
        (self.max.saturating_sub(self.min) / self.steps_count).max(1)
    }

    /// Position of the value within the range, `0.0` at `min` and `1.0` at `max`.
    ///
    /// An empty or inverted range (`max <= min`) yields `0.0`.
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        (f64::from(self.value) - f64::from(self.min)) / (f64::from(self.max) - f64::from(self.min))
    }

    fn clamp(&self, value: i64) -> i32 {
        let clamped = value.max(i64::from(self.min)).min(i64::from(self.max));
        // `min`/`max` are `u32`; saturate the rare bound above `i32::MAX`.
        i32::try_from(clamped).unwrap_or(i32::MAX)
    }
}
