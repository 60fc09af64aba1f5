//! Pegs, disks and the moves between them.

use crate::error::HanoiError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Size of a disk. Sizes run from 1 (smallest) to `n` (largest).
pub type Disk = u32;

/// One of the three pegs, identified on the wire by its index.
///
/// # Example
///
/// ```rust
/// use fast_hanoi::core::Peg;
///
/// assert_eq!(Peg::Right.index(), 2);
/// assert_eq!(Peg::try_from(1).unwrap(), Peg::Middle);
/// assert!(Peg::try_from(3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Peg {
    Left,
    Middle,
    Right,
}

impl Peg {
    /// All pegs in index order.
    pub const ALL: [Peg; 3] = [Peg::Left, Peg::Middle, Peg::Right];

    pub fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Middle => 1,
            Self::Right => 2,
        }
    }
}

impl From<Peg> for u8 {
    fn from(peg: Peg) -> Self {
        peg.index() as u8
    }
}

impl TryFrom<u8> for Peg {
    type Error = HanoiError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Middle),
            2 => Ok(Self::Right),
            other => Err(HanoiError::invalid(format!(
                "peg index {other} is outside 0..=2"
            ))),
        }
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Relocation of the top disk of `from` onto `to`.
///
/// A move always joins two different pegs; there is no way to build one
/// that doesn't, including through deserialization.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoveRepr")]
pub struct Move {
    from: Peg,
    to: Peg,
}

#[derive(Deserialize)]
struct MoveRepr {
    from: Peg,
    to: Peg,
}

impl TryFrom<MoveRepr> for Move {
    type Error = HanoiError;

    fn try_from(repr: MoveRepr) -> Result<Self, Self::Error> {
        Move::new(repr.from, repr.to)
    }
}

impl Move {
    /// Create a move, rejecting `from == to`.
    pub fn new(from: Peg, to: Peg) -> Result<Self, HanoiError> {
        if from == to {
            return Err(HanoiError::invalid(format!(
                "move must join two different pegs, got {from} -> {to}"
            )));
        }
        Ok(Self { from, to })
    }

    /// Callers guarantee `from != to`.
    pub(crate) fn between(from: Peg, to: Peg) -> Self {
        debug_assert_ne!(from, to);
        Self { from, to }
    }

    pub fn from(&self) -> Peg {
        self.from
    }

    pub fn to(&self) -> Peg {
        self.to
    }

    /// The same move played in the opposite direction.
    pub fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peg_indices_round_trip() {
        for peg in Peg::ALL {
            assert_eq!(Peg::try_from(u8::from(peg)).unwrap(), peg);
        }
    }

    #[test]
    fn peg_rejects_unknown_index() {
        assert!(matches!(
            Peg::try_from(7),
            Err(HanoiError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn move_rejects_same_peg() {
        let result = Move::new(Peg::Middle, Peg::Middle);
        assert!(matches!(result, Err(HanoiError::InvalidArgument { .. })));
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let mv = Move::new(Peg::Left, Peg::Right).unwrap();
        let back = mv.reversed();

        assert_eq!(back.from(), Peg::Right);
        assert_eq!(back.to(), Peg::Left);
        assert_eq!(back.reversed(), mv);
    }

    #[test]
    fn move_serializes_as_peg_indices() {
        let mv = Move::new(Peg::Left, Peg::Right).unwrap();
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(json, r#"{"from":0,"to":2}"#);

        let parsed: Move = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, mv);
    }

    #[test]
    fn move_deserialization_rejects_same_peg() {
        let result: Result<Move, _> = serde_json::from_str(r#"{"from":1,"to":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn move_displays_as_index_pair() {
        let mv = Move::new(Peg::Middle, Peg::Left).unwrap();
        assert_eq!(mv.to_string(), "(1, 0)");
    }
}
