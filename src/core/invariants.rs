//! Pile invariant checks using Validation.
//!
//! Every check runs and every violation is reported, so a broken state
//! produced by a regression shows all of its problems at once.

use super::peg::{Disk, Peg};
use super::piles::PilesState;
use crate::error::HanoiError;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A single broken pile invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum InvariantViolation {
    #[error("Expected {expected} disks, found {found}")]
    WrongDiskCount { expected: usize, found: usize },

    #[error("Disk {disk} is missing")]
    MissingDisk { disk: Disk },

    #[error("Disk {disk} appears {count} times")]
    DuplicateDisk { disk: Disk, count: usize },

    #[error("Disk {disk} is outside 1..={max}")]
    DiskOutOfRange { disk: Disk, max: Disk },

    #[error("Disk {above} rests on smaller disk {below} on peg {peg}")]
    Misordered { peg: Peg, below: Disk, above: Disk },
}

/// Check that `state` is a legal configuration of exactly `n` disks.
pub fn validate_piles(
    state: &PilesState,
    n: usize,
) -> Validation<(), NonEmptyVec<InvariantViolation>> {
    let max = n as Disk;
    let mut checks: Vec<Validation<(), NonEmptyVec<InvariantViolation>>> = Vec::new();

    let found = state.disk_count();
    if found != n {
        checks.push(Validation::fail(InvariantViolation::WrongDiskCount {
            expected: n,
            found,
        }));
    }

    let mut seen = vec![0usize; n + 1];
    for peg in Peg::ALL {
        for &disk in state.peg(peg) {
            if disk == 0 || disk > max {
                checks.push(Validation::fail(InvariantViolation::DiskOutOfRange {
                    disk,
                    max,
                }));
            } else {
                seen[disk as usize] += 1;
            }
        }

        for pair in state.peg(peg).windows(2) {
            if pair[1] >= pair[0] {
                checks.push(Validation::fail(InvariantViolation::Misordered {
                    peg,
                    below: pair[0],
                    above: pair[1],
                }));
            }
        }
    }

    for disk in 1..=max {
        let count = seen[disk as usize];
        if count == 0 {
            checks.push(Validation::fail(InvariantViolation::MissingDisk { disk }));
        } else if count > 1 {
            checks.push(Validation::fail(InvariantViolation::DuplicateDisk {
                disk,
                count,
            }));
        }
    }

    if checks.is_empty() {
        checks.push(Validation::success(()));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// [`validate_piles`] folded into a `Result`.
pub fn check_piles(state: &PilesState, n: usize) -> Result<(), HanoiError> {
    match validate_piles(state, n) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(errors) => Err(HanoiError::InvariantViolated(
            errors.iter().cloned().collect(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::initial_piles;

    #[test]
    fn initial_piles_are_valid() {
        for n in 1..=10 {
            let piles = initial_piles(n).unwrap();
            assert!(validate_piles(&piles, n).is_success());
        }
    }

    #[test]
    fn misordered_peg_is_reported() {
        let piles = PilesState::from_pegs(vec![1, 2], vec![], vec![]);
        let result = validate_piles(&piles, 2);

        match result {
            Validation::Failure(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::Misordered { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn all_violations_are_accumulated() {
        // disk 3 missing, disk 1 twice, 9 out of range, [1, 2] misordered
        let piles = PilesState::from_pegs(vec![1, 2], vec![1], vec![9]);
        let result = validate_piles(&piles, 3);

        match result {
            Validation::Failure(errors) => {
                let has_missing = errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::MissingDisk { disk: 3 }));
                let has_duplicate = errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::DuplicateDisk { disk: 1, .. }));
                let has_range = errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::DiskOutOfRange { disk: 9, .. }));
                let has_order = errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::Misordered { .. }));
                let has_count = errors
                    .iter()
                    .any(|e| matches!(e, InvariantViolation::WrongDiskCount { .. }));

                assert!(has_missing);
                assert!(has_duplicate);
                assert!(has_range);
                assert!(has_order);
                assert!(has_count);
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn check_piles_converts_to_error() {
        let piles = PilesState::from_pegs(vec![2], vec![], vec![]);
        let result = check_piles(&piles, 2);

        match result {
            Err(HanoiError::InvariantViolated(violations)) => {
                assert!(violations.contains(&InvariantViolation::MissingDisk { disk: 1 }));
            }
            other => panic!("Expected InvariantViolated, got {other:?}"),
        }
    }
}
