//! Seekable state machine over a precomputed solution.

use super::timeline::Timeline;
use crate::config::PegConvention;
use crate::core::{BoundedCounter, Move, PilesState};
use crate::error::HanoiError;
use serde::{Deserialize, Serialize};

/// The view exposed to a renderer: position, piles and total.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    /// Number of moves applied so far.
    pub i: usize,
    pub piles: &'a PilesState,
    pub total: usize,
}

/// Which actions are currently meaningful.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selectors {
    pub can_step: bool,
    pub can_step_back: bool,
}

/// Cursor over the optimal solution for `n` disks.
///
/// Every state of the solution is computed up front, so stepping, stepping
/// back and seeking are all O(1) lookups and can never disagree with one
/// another. Stepping past either end is a no-op and seeks are clamped,
/// which lets a periodic caller drive [`step`](Self::step) without special
/// casing the end of the solution.
///
/// # Example
///
/// ```rust
/// use fast_hanoi::core::Peg;
/// use fast_hanoi::machine::create_hanoi;
///
/// let mut hanoi = create_hanoi(3).unwrap();
/// assert_eq!(hanoi.total(), 7);
///
/// hanoi.step();
/// hanoi.step();
/// assert_eq!(hanoi.current_state().i, 2);
/// assert_eq!(hanoi.current_state().piles.peg(Peg::Middle), &[2]);
///
/// hanoi.set_to(100);
/// assert_eq!(hanoi.cursor(), 7);
/// assert!(!hanoi.can_step());
/// assert!(!hanoi.step());
/// ```
#[derive(Clone, Debug)]
pub struct HanoiStateMachine {
    timeline: Timeline,
    cursor: BoundedCounter<usize>,
}

/// Build a machine for `n` disks using the default peg convention.
pub fn create_hanoi(n: usize) -> Result<HanoiStateMachine, HanoiError> {
    HanoiStateMachine::new(n)
}

impl HanoiStateMachine {
    /// Create a machine for `n` disks, solving from the left peg to the
    /// right peg through the middle one.
    pub fn new(n: usize) -> Result<Self, HanoiError> {
        Self::with_pegs(n, PegConvention::default())
    }

    /// Create a machine for `n` disks with an explicit peg convention.
    pub fn with_pegs(n: usize, pegs: PegConvention) -> Result<Self, HanoiError> {
        let timeline = Timeline::build(n, pegs)?;
        let cursor = BoundedCounter::new(0, timeline.total(), 0)?;
        Ok(Self { timeline, cursor })
    }

    pub fn disks(&self) -> usize {
        self.timeline.disks()
    }

    pub fn total(&self) -> usize {
        self.timeline.total()
    }

    /// Number of moves applied so far.
    pub fn cursor(&self) -> usize {
        self.cursor.value()
    }

    /// Number of moves left until the puzzle is solved.
    pub fn remaining(&self) -> usize {
        self.total() - self.cursor()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    pub fn movements(&self) -> &[Move] {
        self.timeline.movements()
    }

    /// Pile state after `k` moves, if `k <= total`.
    pub fn piles_at(&self, k: usize) -> Option<&PilesState> {
        self.timeline.state(k)
    }

    pub fn piles(&self) -> &PilesState {
        &self.timeline.states()[self.cursor()]
    }

    pub fn current_state(&self) -> Snapshot<'_> {
        Snapshot {
            i: self.cursor(),
            piles: self.piles(),
            total: self.total(),
        }
    }

    /// The move that produced the current state, if any.
    pub fn last_move(&self) -> Option<Move> {
        self.cursor()
            .checked_sub(1)
            .and_then(|k| self.timeline.movement(k))
    }

    /// The move [`step`](Self::step) would apply next, if any.
    pub fn next_move(&self) -> Option<Move> {
        self.timeline.movement(self.cursor())
    }

    pub fn can_step(&self) -> bool {
        self.cursor.can_increment()
    }

    pub fn can_step_back(&self) -> bool {
        self.cursor.can_decrement()
    }

    pub fn selectors(&self) -> Selectors {
        Selectors {
            can_step: self.can_step(),
            can_step_back: self.can_step_back(),
        }
    }

    /// Advance one move. Returns `false` (and does nothing) when solved.
    pub fn step(&mut self) -> bool {
        let moved = self.cursor.increment();
        if moved {
            tracing::trace!(cursor = self.cursor(), "stepped forward");
        }
        moved
    }

    /// Go back one move. Returns `false` (and does nothing) at the start.
    pub fn step_back(&mut self) -> bool {
        let moved = self.cursor.decrement();
        if moved {
            tracing::trace!(cursor = self.cursor(), "stepped back");
        }
        moved
    }

    /// Jump to `target` moves applied, clamped to `total`.
    ///
    /// Returns the position actually set. Positions are unsigned, so
    /// negative positions must be clamped to zero by the caller.
    ///
    /// # Example
    ///
    /// ```rust
    /// use fast_hanoi::create_hanoi;
    ///
    /// let mut hanoi = create_hanoi(3).unwrap();
    /// assert_eq!(hanoi.set_to(100), 7);
    ///
    /// let scrubbed: i64 = -4;
    /// let target = usize::try_from(scrubbed).unwrap_or(0);
    /// assert_eq!(hanoi.set_to(target), 0);
    /// ```
    pub fn set_to(&mut self, target: usize) -> usize {
        let set = self.cursor.set_to(target);
        if set != target {
            tracing::debug!(target, clamped = set, "seek target clamped");
        }
        set
    }

    /// Return to the initial configuration.
    pub fn reset(&mut self) {
        self.cursor.reset_to_min();
    }
}
