//! Presentation layer handling terminal UI and user input.
//!
//! This module draws the tip form using ratatui and maps
//! keyboard input onto form edits.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
