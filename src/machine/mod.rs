//! The stepping shell around the pure core.
//!
//! A [`HanoiStateMachine`] owns the [`Timeline`] for one disk count and a
//! cursor into it. Changing the disk count means building a new machine;
//! nothing is carried over between disk counts.

mod hanoi;
mod timeline;

pub use hanoi::{create_hanoi, HanoiStateMachine, Selectors, Snapshot};
pub use timeline::Timeline;
