//! Turtle state and the operations that move and turn it.

use crate::direction::{Displacement, Facing, MoveDirection, compute_displacement};
use crate::error::OrientationError;
use glam::IVec3;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Cells per chunk edge, as a shift amount (16 cells).
pub const CHUNK_SHIFT: i32 = 4;

/// Returns the chunk coordinates containing `cell`.
///
/// Uses an arithmetic shift so negative cells floor toward `-inf` (cell `-1` is in chunk `-1`).
pub fn chunk_of(cell: IVec3) -> IVec3 {
    cell >> CHUNK_SHIFT
}

/// A grid-aligned turtle.
///
/// The caller holding the canonical copy owns it; turning and moving take `&mut self`,
/// so only one writer can touch the facing at a time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turtle {
    /// Numeric identifier assigned by the backend.
    pub id: u64,

    /// Unique external identifier, serialized as a hyphenated string.
    pub uuid: Uuid,

    /// The cell the turtle occupies. `y` is vertical.
    pub position: IVec3,

    /// Where the turtle is looking.
    pub facing: Facing,
}

impl Turtle {
    pub fn new(id: u64, uuid: Uuid, position: IVec3, facing: Facing) -> Self {
        Self {
            id,
            uuid,
            position,
            facing,
        }
    }

    /// Advances the facing one step clockwise (Forward → Right → Backward → Left → Forward).
    pub fn rotate_right(&mut self) {
        self.facing = self.facing.turned_right();
    }

    /// Advances the facing one step counter-clockwise.
    pub fn rotate_left(&mut self) {
        self.facing = self.facing.turned_left();
    }

    /// The displacement a translation would produce from the current facing.
    pub fn displacement(&self, movement: MoveDirection) -> Result<Displacement, OrientationError> {
        compute_displacement(self.facing, movement)
    }

    /// Translates the turtle one cell. Turns are rejected and leave the turtle untouched.
    pub fn step(&mut self, movement: MoveDirection) -> Result<(), OrientationError> {
        let delta = self.displacement(movement)?;
        self.position += delta;
        debug!(turtle = self.id, %movement, position = ?self.position, "stepped");
        Ok(())
    }

    /// Applies a move the way a turtle executes it after the remote command succeeded:
    /// translations change the position, turns change the facing.
    pub fn apply(&mut self, movement: MoveDirection) {
        match movement {
            MoveDirection::Left => self.rotate_left(),
            MoveDirection::Right => self.rotate_right(),
            MoveDirection::Forward | MoveDirection::Backward => {
                self.position += movement_delta(self.facing, movement);
            }
        }
        debug!(
            turtle = self.id,
            %movement,
            position = ?self.position,
            facing = %self.facing,
            "applied move"
        );
    }

    /// The cell directly ahead.
    pub fn front_cell(&self) -> IVec3 {
        self.position + self.facing.forward_delta()
    }

    pub fn above_cell(&self) -> IVec3 {
        self.position + IVec3::Y
    }

    pub fn below_cell(&self) -> IVec3 {
        self.position - IVec3::Y
    }

    /// Cells a turtle can inspect without moving, in scan order: below, front, above.
    pub fn inspection_cells(&self) -> [IVec3; 3] {
        [self.below_cell(), self.front_cell(), self.above_cell()]
    }

    /// Chunk coordinates of the turtle's current cell.
    pub fn chunk(&self) -> IVec3 {
        chunk_of(self.position)
    }
}

// Translation-only; callers have already matched out the turns.
fn movement_delta(facing: Facing, movement: MoveDirection) -> Displacement {
    if movement == MoveDirection::Backward {
        -facing.forward_delta()
    } else {
        facing.forward_delta()
    }
}
