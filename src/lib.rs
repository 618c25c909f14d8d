//! # turtle-heading
//!
//! The orientation algebra for a grid-aligned turtle that occupies an integer cell and
//! faces one of four cardinal directions.
//!
//! It answers three questions for the layers around it: which cell delta a move produces
//! from the current facing, which facing a left or right turn leads to, and where a
//! facing-dependent model must be placed and rotated to line up with its cell. Network,
//! store, and render code feed it typed [`Facing`] / [`MoveDirection`] values and consume
//! plain `glam` vectors.

pub mod direction;
pub mod error;
pub mod interpreter;
pub mod placement;
pub mod turtle;

pub use direction::*;
pub use error::*;
pub use interpreter::*;
pub use placement::*;
pub use turtle::*;
