mod display_renderer;
mod display_state;

pub use display_renderer::{DisplayRenderer, RenderOutcome};
pub use display_state::{DisplayState, Slot};

/// Clears from the cursor to the end of the line.
pub const CLEAR_TO_END_OF_LINE: &str = "\x1b[K";

/// Moves the cursor to the start of the previous line.
pub const CURSOR_TO_PREVIOUS_LINE: &str = "\x1b[F";
