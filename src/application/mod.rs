//! Application layer managing calculator state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer:
//! the input/display controller, the theme manager, the visible surface,
//! and the capability traits they are written against.

pub mod calculator;
pub mod ports;
pub mod screen;
pub mod state;
pub mod theme;

pub use calculator::*;
pub use ports::*;
pub use screen::*;
pub use state::*;
pub use theme::*;
