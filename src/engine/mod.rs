mod command;
mod movement;
mod output;
mod render;

pub use command::{Choice, parse_choice};
pub use movement::try_move;
pub use output::{Output, OutputBlock};
pub use render::{END_OF_EXPLORATION, LEAF_TEXT, PROMPT, QUIT_TEXT, render_room};
