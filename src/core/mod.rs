//! Pure core of the Hanoi solver.
//!
//! This module contains the side-effect free building blocks:
//! - Pegs, disks and moves
//! - The optimal move sequence generator
//! - Pile states and the pure move transition
//! - Invariant validation for pile states
//! - The clamped counter used for disk selection and cursors
//!
//! Nothing in this module logs or holds state beyond its own values.

mod counter;
mod invariants;
mod peg;
mod piles;
mod sequence;

pub use counter::{BoundedCounter, CounterChecks, CounterValue};
pub use invariants::{check_piles, validate_piles, InvariantViolation};
pub use peg::{Disk, Move, Peg};
pub use piles::{apply_move, initial_piles, reverse_move, PilesState};
pub use sequence::{generate, solution_length, MAX_SUPPORTED_DISKS};
