//! Clamped integer counter.
//!
//! The counter backs both the disk-count picker and the machine's cursor.
//! Moving past either bound is a no-op and out-of-range sets are clamped,
//! so a counter can never hold a value outside `[min, max]`.

use crate::error::HanoiError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Debug;
use std::ops::{Add, Sub};

/// Integer types a [`BoundedCounter`] can count with.
pub trait CounterValue:
    Copy + Ord + Debug + Add<Output = Self> + Sub<Output = Self> + From<u8>
{
    fn one() -> Self {
        Self::from(1)
    }
}

impl<T> CounterValue for T where
    T: Copy + Ord + Debug + Add<Output = T> + Sub<Output = T> + From<u8>
{
}

/// Whether the counter can move in each direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterChecks {
    pub can_increment: bool,
    pub can_decrement: bool,
}

/// Integer counter with inclusive bounds `[min, max]`.
///
/// # Example
///
/// ```rust
/// use fast_hanoi::core::BoundedCounter;
///
/// let mut disks = BoundedCounter::new(1u32, 10, 9).unwrap();
/// assert!(disks.increment());
/// assert!(!disks.increment()); // already at max
/// assert_eq!(disks.value(), 10);
///
/// disks.set_to(42);
/// assert_eq!(disks.value(), 10);
/// assert!(!disks.can_increment());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoundedCounter<T> {
    min: T,
    max: T,
    value: T,
}

#[derive(Deserialize)]
struct CounterRepr<T> {
    min: T,
    max: T,
    value: T,
}

impl<'de, T> Deserialize<'de> for BoundedCounter<T>
where
    T: CounterValue + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = CounterRepr::<T>::deserialize(deserializer)?;
        BoundedCounter::new(repr.min, repr.max, repr.value).map_err(serde::de::Error::custom)
    }
}

impl<T: CounterValue> BoundedCounter<T> {
    /// Create a counter; `value` is clamped into `[min, max]`.
    pub fn new(min: T, max: T, value: T) -> Result<Self, HanoiError> {
        if min > max {
            return Err(HanoiError::invalid(format!(
                "counter bounds are inverted: min {min:?} > max {max:?}"
            )));
        }
        Ok(Self {
            min,
            max,
            value: value.clamp(min, max),
        })
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn can_increment(&self) -> bool {
        self.value < self.max
    }

    pub fn can_decrement(&self) -> bool {
        self.min < self.value
    }

    pub fn checks(&self) -> CounterChecks {
        CounterChecks {
            can_increment: self.can_increment(),
            can_decrement: self.can_decrement(),
        }
    }

    /// Add one unless already at `max`. Returns whether the value changed.
    pub fn increment(&mut self) -> bool {
        if !self.can_increment() {
            return false;
        }
        self.value = self.value + T::one();
        true
    }

    /// Subtract one unless already at `min`. Returns whether the value changed.
    pub fn decrement(&mut self) -> bool {
        if !self.can_decrement() {
            return false;
        }
        self.value = self.value - T::one();
        true
    }

    /// Set the value, clamped into `[min, max]`. Returns the stored value.
    pub fn set_to(&mut self, value: T) -> T {
        self.value = value.clamp(self.min, self.max);
        self.value
    }

    /// Move back to `min`.
    pub fn reset_to_min(&mut self) {
        self.value = self.min;
    }
}
