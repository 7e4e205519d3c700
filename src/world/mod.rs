mod mansion;
mod model;

pub use mansion::mansion;
pub use model::{Direction, Room};
