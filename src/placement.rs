//! Render placement for a facing-dependent turtle model.
//!
//! The model's pivot sits on a cell corner, so each facing needs its own horizontal offset
//! plus a yaw about the vertical axis to line the mesh up with the cell it occupies.

use crate::direction::Facing;
use crate::turtle::Turtle;
use glam::{EulerRot, IVec3, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::{FRAC_PI_2, PI};

/// Where the model and camera sit relative to the turtle's integer cell.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Height of the model pivot above the cell floor.
    pub vertical_offset: f32,
    /// Offset from the cell's minimum corner to the camera focus point.
    pub focus_offset: Vec3,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            vertical_offset: 0.5,
            focus_offset: Vec3::splat(0.5),
        }
    }
}

/// Horizontal offsets and yaw that align the model with a cell for one facing.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacementParameters {
    pub start_x: f32,
    pub start_z: f32,
    /// Rotation about `+Y`, in radians.
    pub rot_y: f32,
}

impl PlacementParameters {
    /// World-space translation of the model for a turtle standing in `cell`.
    pub fn model_translation(&self, cell: IVec3, config: &PlacementConfig) -> Vec3 {
        Vec3::new(
            self.start_x + cell.x as f32,
            cell.y as f32 + config.vertical_offset,
            self.start_z + cell.z as f32,
        )
    }

    pub fn model_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.rot_y, 0.0, 0.0)
    }
}

/// Returns the placement parameters for `facing`.
///
/// Total over [`Facing`]; every facing yields a distinct result.
pub fn placement_for(facing: Facing) -> PlacementParameters {
    let (start_x, start_z, rot_y) = match facing {
        Facing::Forward => (0.5, -0.5, -FRAC_PI_2),
        Facing::Backward => (-0.5, 0.5, FRAC_PI_2),
        Facing::Left => (-0.5, -0.5, 0.0),
        Facing::Right => (0.5, 0.5, PI),
    };
    PlacementParameters {
        start_x,
        start_z,
        rot_y,
    }
}

/// The point a camera should orbit for a turtle standing in `cell`.
pub fn camera_focus(cell: IVec3, config: &PlacementConfig) -> Vec3 {
    cell.as_vec3() + config.focus_offset
}

/// Everything the render layer needs to reposition the model after a move or turn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelTransform {
    pub translation: Vec3,
    pub rotation: Quat,
    pub focus: Vec3,
}

impl ModelTransform {
    pub fn for_turtle(turtle: &Turtle, config: &PlacementConfig) -> Self {
        let params = placement_for(turtle.facing);
        Self {
            translation: params.model_translation(turtle.position, config),
            rotation: params.model_rotation(),
            focus: camera_focus(turtle.position, config),
        }
    }
}
