//! Driver-side runtime settings
//!
//! The simulator itself has no notion of pausing; the driver owns that
//! flag and decides each frame whether to advance one step or none.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    pub paused: bool, // true = frames are rendered without stepping
}

impl Engine {
    pub fn new(start_paused: bool) -> Self {
        Self { paused: start_paused }
    }
}
