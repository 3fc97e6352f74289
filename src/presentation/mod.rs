//! Presentation layer handling terminal UI and user input.
//!
//! This module draws the calculator with ratatui, maps keyboard and mouse
//! events to actions, and owns the theme palettes and keypad geometry.

pub mod input;
pub mod keypad;
pub mod palette;
pub mod ui;

pub use input::*;
pub use ui::*;
