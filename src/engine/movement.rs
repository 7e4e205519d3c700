use crate::error::MoveError;
use crate::world::{Direction, Room};

/// Follows one branch out of `room`. A missing branch leaves the caller where it was.
pub fn try_move(room: &Room, direction: Direction) -> Result<&Room, MoveError> {
    room.child(direction).ok_or(MoveError::NoPath(direction))
}
