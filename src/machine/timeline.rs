//! Precomputed solution timeline.
//!
//! A timeline holds every move of the solution together with the pile state
//! after each prefix of those moves, so any position can be read in O(1).

use crate::config::PegConvention;
use crate::core::{apply_move, generate, initial_piles, Disk, Move, Peg, PilesState};
use crate::error::HanoiError;
use serde::Serialize;

/// Moves and pile snapshots for one disk count.
///
/// `states[0]` is the initial configuration and `states[k]` is the
/// configuration after the first `k` moves, so there is always exactly one
/// more state than there are moves.
///
/// # Example
///
/// ```rust
/// use fast_hanoi::config::PegConvention;
/// use fast_hanoi::core::Peg;
/// use fast_hanoi::machine::Timeline;
///
/// let timeline = Timeline::build(2, PegConvention::default()).unwrap();
/// assert_eq!(timeline.total(), 3);
/// assert_eq!(timeline.state(3).unwrap().peg(Peg::Right), &[2, 1]);
/// assert!(timeline.state(4).is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Timeline {
    disks: usize,
    pegs: PegConvention,
    movements: Vec<Move>,
    states: Vec<PilesState>,
}

impl Timeline {
    /// Generate the solution for `disks` and replay it once into snapshots.
    pub fn build(disks: usize, pegs: PegConvention) -> Result<Self, HanoiError> {
        let movements = generate(disks, pegs.source, pegs.target, pegs.auxiliary)?;

        let mut current = initial_piles(disks)?;
        if pegs.source != Peg::Left {
            current = relocate(&current, pegs.source);
        }

        let mut states = Vec::with_capacity(movements.len() + 1);
        for &mv in &movements {
            let next = apply_move(&current, mv)?;
            states.push(std::mem::replace(&mut current, next));
        }
        states.push(current);

        tracing::debug!(disks, total = movements.len(), "built hanoi timeline");

        Ok(Self {
            disks,
            pegs,
            movements,
            states,
        })
    }

    pub fn disks(&self) -> usize {
        self.disks
    }

    pub fn pegs(&self) -> PegConvention {
        self.pegs
    }

    /// Number of moves in the solution.
    pub fn total(&self) -> usize {
        self.movements.len()
    }

    pub fn movements(&self) -> &[Move] {
        &self.movements
    }

    /// All snapshots, from the initial configuration to the solved one.
    pub fn states(&self) -> &[PilesState] {
        &self.states
    }

    /// Snapshot after `k` moves, if `k <= total`.
    pub fn state(&self, k: usize) -> Option<&PilesState> {
        self.states.get(k)
    }

    /// The `k`-th move (0-based), if `k < total`.
    pub fn movement(&self, k: usize) -> Option<Move> {
        self.movements.get(k).copied()
    }
}

/// Move the initial stack from the left peg onto `source`.
fn relocate(initial: &PilesState, source: Peg) -> PilesState {
    let mut layout: [Vec<Disk>; 3] = Default::default();
    layout[source.index()] = initial.peg(Peg::Left).to_vec();
    let [left, middle, right] = layout;
    PilesState::from_pegs(left, middle, right)
}
