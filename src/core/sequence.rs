//! Generation of the optimal move sequence.
//!
//! The sequence is produced eagerly into a `Vec` so that callers can index
//! any move directly, which seeking relies on.

use super::peg::{Move, Peg};
use crate::error::HanoiError;

/// Largest disk count the library will build a solution for.
///
/// A solution for `n` disks has `2^n - 1` moves and the machine stores a
/// snapshot per move, so this bounds memory rather than correctness.
pub const MAX_SUPPORTED_DISKS: usize = 20;

/// Number of moves in the optimal solution for `n` disks: `2^n - 1`.
///
/// Returns `None` when `2^n` does not fit in a `usize`.
///
/// # Example
///
/// ```rust
/// use fast_hanoi::core::solution_length;
///
/// assert_eq!(solution_length(0), Some(0));
/// assert_eq!(solution_length(3), Some(7));
/// assert_eq!(solution_length(10), Some(1023));
/// assert_eq!(solution_length(usize::BITS as usize), None);
/// ```
pub fn solution_length(n: usize) -> Option<usize> {
    let shift = u32::try_from(n).ok()?;
    1usize.checked_shl(shift).map(|total| total - 1)
}

/// Generate the canonical move sequence moving `n` disks from `src` to
/// `dest`, using `temp` as the auxiliary peg.
///
/// This is a pure function of its arguments; results for the same inputs
/// are always identical.
///
/// # Example
///
/// ```rust
/// use fast_hanoi::core::{generate, Peg};
///
/// let moves = generate(2, Peg::Left, Peg::Right, Peg::Middle).unwrap();
/// let pairs: Vec<(usize, usize)> = moves
///     .iter()
///     .map(|m| (m.from().index(), m.to().index()))
///     .collect();
///
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
/// ```
pub fn generate(n: usize, src: Peg, dest: Peg, temp: Peg) -> Result<Vec<Move>, HanoiError> {
    if n == 0 {
        return Err(HanoiError::invalid("disk count must be at least 1"));
    }
    if n > MAX_SUPPORTED_DISKS {
        return Err(HanoiError::invalid(format!(
            "disk count {n} exceeds the supported maximum of {MAX_SUPPORTED_DISKS}"
        )));
    }
    if src == dest || src == temp || dest == temp {
        return Err(HanoiError::invalid(format!(
            "pegs must be distinct, got src={src} dest={dest} temp={temp}"
        )));
    }

    let mut moves = Vec::with_capacity(solution_length(n).unwrap_or_default());
    collect_moves(n, src, dest, temp, &mut moves);
    Ok(moves)
}

fn collect_moves(n: usize, src: Peg, dest: Peg, temp: Peg, out: &mut Vec<Move>) {
    if n == 1 {
        out.push(Move::between(src, dest));
        return;
    }
    collect_moves(n - 1, src, temp, dest, out);
    out.push(Move::between(src, dest));
    collect_moves(n - 1, temp, dest, src, out);
}
