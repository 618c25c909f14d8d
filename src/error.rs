use crate::direction::MoveDirection;
use thiserror::Error;

/// Failures raised by the orientation algebra.
///
/// None of these are recoverable by retrying: they signal a caller passing the
/// wrong kind of value, and the caller is expected to validate before calling in.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrientationError {
    /// A turn (`Left`/`Right`) was passed where a translation was expected.
    #[error("invalid argument: {0} is a turn, not a translation")]
    InvalidArgument(MoveDirection),

    /// A numeric facing code outside `0..=3` was decoded.
    #[error("invalid facing encoding {0}")]
    InvalidEncoding(u8),

    /// A string tag from the wire did not name any direction.
    #[error("unknown direction tag {0:?}")]
    UnknownDirection(String),
}
