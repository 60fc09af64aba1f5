//! Peg configurations and the pure transition between them.

use super::peg::{Disk, Move, Peg};
use super::sequence::MAX_SUPPORTED_DISKS;
use crate::error::HanoiError;
use serde::{Deserialize, Serialize};

/// Contents of the three pegs at one point of the solution.
///
/// Each peg lists its disks bottom to top; the last element is the disk
/// that can be moved. Values are immutable in spirit: `apply_move` returns
/// a new state and leaves its input untouched.
///
/// # Example
///
/// ```rust
/// use fast_hanoi::core::{initial_piles, Peg};
///
/// let piles = initial_piles(3).unwrap();
/// assert_eq!(piles.peg(Peg::Left), &[3, 2, 1]);
/// assert_eq!(piles.top(Peg::Left), Some(1));
/// assert!(piles.peg(Peg::Right).is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PilesState {
    pegs: [Vec<Disk>; 3],
}

impl PilesState {
    /// Build a state from raw peg contents without checking invariants.
    ///
    /// Use [`check_piles`](super::check_piles) to validate it.
    pub fn from_pegs(left: Vec<Disk>, middle: Vec<Disk>, right: Vec<Disk>) -> Self {
        Self {
            pegs: [left, middle, right],
        }
    }

    /// Disks on `peg`, bottom to top.
    pub fn peg(&self, peg: Peg) -> &[Disk] {
        &self.pegs[peg.index()]
    }

    /// The movable disk on `peg`, if any.
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.pegs[peg.index()].last().copied()
    }

    pub fn pegs(&self) -> &[Vec<Disk>; 3] {
        &self.pegs
    }

    pub fn disk_count(&self) -> usize {
        self.pegs.iter().map(Vec::len).sum()
    }
}

/// All `n` disks stacked on the left peg, largest at the bottom.
///
/// `n` must be in `1..=MAX_SUPPORTED_DISKS`, the same range `generate` accepts.
pub fn initial_piles(n: usize) -> Result<PilesState, HanoiError> {
    if n == 0 {
        return Err(HanoiError::invalid("disk count must be at least 1"));
    }
    if n > MAX_SUPPORTED_DISKS {
        return Err(HanoiError::invalid(format!(
            "disk count {n} exceeds the supported maximum of {MAX_SUPPORTED_DISKS}"
        )));
    }
    let left = (1..=n as Disk).rev().collect();
    Ok(PilesState::from_pegs(left, Vec::new(), Vec::new()))
}

/// Apply `mv` to `state`, returning the resulting configuration.
///
/// Fails with [`HanoiError::IllegalMove`] when the source peg is empty or
/// when the moved disk would land on a smaller one.
///
/// # Example
///
/// ```rust
/// use fast_hanoi::core::{apply_move, initial_piles, reverse_move, Move, Peg};
///
/// let start = initial_piles(2).unwrap();
/// let mv = Move::new(Peg::Left, Peg::Middle).unwrap();
///
/// let next = apply_move(&start, mv).unwrap();
/// assert_eq!(next.peg(Peg::Middle), &[1]);
///
/// let back = apply_move(&next, reverse_move(mv)).unwrap();
/// assert_eq!(back, start);
/// ```
pub fn apply_move(state: &PilesState, mv: Move) -> Result<PilesState, HanoiError> {
    let disk = state.top(mv.from()).ok_or_else(|| HanoiError::IllegalMove {
        mv,
        reason: format!("peg {} is empty", mv.from()),
    })?;

    if let Some(target_top) = state.top(mv.to()) {
        if disk >= target_top {
            return Err(HanoiError::IllegalMove {
                mv,
                reason: format!("disk {disk} cannot rest on disk {target_top}"),
            });
        }
    }

    let mut next = state.clone();
    next.pegs[mv.from().index()].pop();
    next.pegs[mv.to().index()].push(disk);
    Ok(next)
}

/// The move that undoes `mv`.
pub fn reverse_move(mv: Move) -> Move {
    mv.reversed()
}
