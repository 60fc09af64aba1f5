//! Configuration for disk selection and the peg convention.
//!
//! The only knobs are the disk-count bounds offered to the picker and which
//! pegs play source, target and auxiliary. Defaults match the classic
//! layout: `1..=10` disks, starting at 4, solving from the left peg to the
//! right peg through the middle one.
//!
//! Validation accumulates every violation instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use fast_hanoi::config::HanoiConfig;
//!
//! let config = HanoiConfig::from_json(r#"{ "max_disks": 6 }"#).unwrap();
//! assert_eq!(config.min_disks, 1);
//! assert_eq!(config.max_disks, 6);
//!
//! let counter = config.disk_counter().unwrap();
//! assert_eq!(counter.value(), 4);
//! ```

mod violations;

pub use violations::ConfigViolation;

use crate::core::{BoundedCounter, Peg, MAX_SUPPORTED_DISKS};
use crate::error::HanoiError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Which peg each role is played by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PegConvention {
    pub source: Peg,
    pub target: Peg,
    pub auxiliary: Peg,
}

impl Default for PegConvention {
    fn default() -> Self {
        Self {
            source: Peg::Left,
            target: Peg::Right,
            auxiliary: Peg::Middle,
        }
    }
}

impl PegConvention {
    pub fn is_distinct(&self) -> bool {
        self.source != self.target
            && self.source != self.auxiliary
            && self.target != self.auxiliary
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HanoiConfig {
    pub min_disks: usize,
    pub max_disks: usize,
    pub initial_disks: usize,
    pub pegs: PegConvention,
}

impl Default for HanoiConfig {
    fn default() -> Self {
        Self {
            min_disks: 1,
            max_disks: 10,
            initial_disks: 4,
            pegs: PegConvention::default(),
        }
    }
}

impl HanoiConfig {
    /// Parse a JSON configuration and validate it.
    ///
    /// Missing fields fall back to their defaults.
    pub fn from_json(json: &str) -> Result<Self, HanoiError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| HanoiError::ConfigParse(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Validate every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<ConfigViolation>>> = Vec::new();

        checks.push(if self.min_disks == 0 {
            Validation::fail(ConfigViolation::ZeroMinimum)
        } else {
            Validation::success(())
        });

        checks.push(if self.min_disks > self.max_disks {
            Validation::fail(ConfigViolation::InvertedBounds {
                min: self.min_disks,
                max: self.max_disks,
            })
        } else {
            Validation::success(())
        });

        checks.push(if self.max_disks > MAX_SUPPORTED_DISKS {
            Validation::fail(ConfigViolation::MaximumTooLarge {
                max: self.max_disks,
                limit: MAX_SUPPORTED_DISKS,
            })
        } else {
            Validation::success(())
        });

        let in_range = (self.min_disks..=self.max_disks).contains(&self.initial_disks);
        checks.push(if in_range {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::InitialOutOfRange {
                initial: self.initial_disks,
                min: self.min_disks,
                max: self.max_disks,
            })
        });

        checks.push(if self.pegs.is_distinct() {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::PegsNotDistinct {
                source_peg: self.pegs.source,
                target: self.pegs.target,
                auxiliary: self.pegs.auxiliary,
            })
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// [`validate`](Self::validate) folded into a `Result`.
    pub fn check(&self) -> Result<(), HanoiError> {
        match self.validate() {
            Validation::Success(_) => Ok(()),
            Validation::Failure(errors) => {
                Err(HanoiError::InvalidConfig(errors.iter().cloned().collect()))
            }
        }
    }

    /// Counter for the disk picker, starting at `initial_disks`.
    pub fn disk_counter(&self) -> Result<BoundedCounter<usize>, HanoiError> {
        self.check()?;
        BoundedCounter::new(self.min_disks, self.max_disks, self.initial_disks)
    }
}
