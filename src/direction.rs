//! Facings, move requests, and the displacement table that links them.

use crate::error::OrientationError;
use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Signed per-axis delta applied to a turtle's cell. `y` is always 0 here.
pub type Displacement = IVec3;

/// The cardinal direction a turtle currently points toward.
///
/// Variants are declared in turn order: a right turn moves one step down this
/// list (wrapping from `Left` back to `Forward`), a left turn one step up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    /// Looks along `-Z`.
    Forward,
    /// Looks along `+X`.
    Right,
    /// Looks along `+Z`.
    Backward,
    /// Looks along `-X`.
    Left,
}

impl Facing {
    /// All facings in clockwise turn order, indexed by [`Facing::code`].
    pub const CYCLE: [Facing; 4] = [Facing::Forward, Facing::Right, Facing::Backward, Facing::Left];

    /// Numeric encoding used for turn arithmetic: Forward=0, Right=1, Backward=2, Left=3.
    pub const fn code(self) -> u8 {
        match self {
            Facing::Forward => 0,
            Facing::Right => 1,
            Facing::Backward => 2,
            Facing::Left => 3,
        }
    }

    /// The facing after one right turn.
    pub const fn turned_right(self) -> Facing {
        Self::CYCLE[((self.code() + 1) % 4) as usize]
    }

    /// The facing after one left turn.
    pub const fn turned_left(self) -> Facing {
        Self::CYCLE[((self.code() + 3) % 4) as usize]
    }

    /// The facing after two turns in either direction.
    pub const fn opposite(self) -> Facing {
        Self::CYCLE[((self.code() + 2) % 4) as usize]
    }

    /// Unit step taken by a forward move while holding this facing.
    pub const fn forward_delta(self) -> Displacement {
        match self {
            Facing::Forward => IVec3::new(0, 0, -1),
            Facing::Backward => IVec3::new(0, 0, 1),
            Facing::Left => IVec3::new(-1, 0, 0),
            Facing::Right => IVec3::new(1, 0, 0),
        }
    }

    fn as_str(self) -> &'static str {
        match self {
            Facing::Forward => "Forward",
            Facing::Right => "Right",
            Facing::Backward => "Backward",
            Facing::Left => "Left",
        }
    }
}

impl TryFrom<u8> for Facing {
    type Error = OrientationError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::CYCLE
            .get(code as usize)
            .copied()
            .ok_or(OrientationError::InvalidEncoding(code))
    }
}

impl From<Facing> for u8 {
    fn from(facing: Facing) -> Self {
        facing.code()
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Facing {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::CYCLE
            .into_iter()
            .find(|facing| facing.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OrientationError::UnknownDirection(s.to_owned()))
    }
}

/// A request issued to a turtle: a translation (`Forward`/`Backward`) or a
/// turn (`Left`/`Right`).
///
/// Shares its variant names with [`Facing`] on the wire but is a different axis;
/// the two are never interchangeable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDirection {
    Forward,
    Backward,
    Left,
    Right,
}

impl MoveDirection {
    pub const ALL: [MoveDirection; 4] = [
        MoveDirection::Forward,
        MoveDirection::Backward,
        MoveDirection::Left,
        MoveDirection::Right,
    ];

    /// `true` for `Forward` and `Backward`.
    pub const fn is_translation(self) -> bool {
        matches!(self, MoveDirection::Forward | MoveDirection::Backward)
    }

    /// `true` for `Left` and `Right`.
    pub const fn is_turn(self) -> bool {
        !self.is_translation()
    }

    fn as_str(self) -> &'static str {
        match self {
            MoveDirection::Forward => "Forward",
            MoveDirection::Backward => "Backward",
            MoveDirection::Left => "Left",
            MoveDirection::Right => "Right",
        }
    }
}

impl fmt::Display for MoveDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MoveDirection {
    type Err = OrientationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OrientationError::UnknownDirection(s.to_owned()))
    }
}

/// Computes the cell delta produced by translating one unit while holding `facing`.
///
/// Backward motion is the exact negation of forward motion. Turns are rejected with
/// [`OrientationError::InvalidArgument`]; use [`Turtle::rotate_left`](crate::Turtle::rotate_left)
/// or [`Turtle::rotate_right`](crate::Turtle::rotate_right) for those.
pub fn compute_displacement(
    facing: Facing,
    movement: MoveDirection,
) -> Result<Displacement, OrientationError> {
    match movement {
        MoveDirection::Forward => Ok(facing.forward_delta()),
        MoveDirection::Backward => Ok(-facing.forward_delta()),
        MoveDirection::Left | MoveDirection::Right => {
            Err(OrientationError::InvalidArgument(movement))
        }
    }
}
