//! Platform collaborators
//!
//! The simulation core never talks to a window, keyboard or OS timer
//! directly. It is driven through these interfaces:
//! - `surface`: circle outline draw calls
//! - `input`: per-frame key state and quit signal
//! - `time`: frame pacing and dt

pub mod input;
pub mod surface;
pub mod time;

pub use input::{DemoPilot, InputSource, InputState, ScriptedInput};
pub use surface::{Color, DrawCall, NullSurface, RecordingSurface, Surface, WHITE};
pub use time::{Clock, FixedClock, WallClock};
