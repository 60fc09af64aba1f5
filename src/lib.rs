//! Fast Hanoi: a seekable state machine over the optimal Tower of Hanoi solution
//!
//! The library follows a "pure core, imperative shell" split. The core
//! generates the optimal move sequence and applies moves as pure functions;
//! the machine precomputes every configuration of the solution once and
//! exposes a cursor that can step forward, step back or jump anywhere.
//!
//! Rendering, animation and auto-play timers belong to the caller. The
//! machine only promises that [`step`](machine::HanoiStateMachine::step) is
//! cheap and harmless once the puzzle is solved.
//!
//! # Core Concepts
//!
//! - **Move sequence**: `2^n - 1` moves, materialized for random access
//! - **Piles**: three pegs listed bottom to top, transformed by pure moves
//! - **Timeline**: every pile state of the solution, indexed by moves applied
//! - **Cursor**: a clamped counter into the timeline
//!
//! # Example
//!
//! ```rust
//! use fast_hanoi::core::Peg;
//! use fast_hanoi::create_hanoi;
//!
//! let mut hanoi = create_hanoi(3).unwrap();
//!
//! while hanoi.can_step() {
//!     hanoi.step();
//! }
//!
//! let state = hanoi.current_state();
//! assert_eq!(state.i, state.total);
//! assert_eq!(state.piles.peg(Peg::Right), &[3, 2, 1]);
//!
//! hanoi.set_to(3);
//! assert_eq!(hanoi.piles().peg(Peg::Middle), &[2, 1]);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod machine;
pub mod session;

// Re-export commonly used types
pub use config::HanoiConfig;
pub use crate::core::{BoundedCounter, Move, Peg, PilesState};
pub use error::HanoiError;
pub use machine::{create_hanoi, HanoiStateMachine, Snapshot};
pub use session::{HanoiSession, Phase};
