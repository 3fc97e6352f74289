//! Infrastructure layer providing external service integrations.
//!
//! This module contains the preference stores, configuration resolution
//! and logging setup.

pub mod config;
pub mod logging;
pub mod persistence;

pub use config::*;
pub use logging::*;
pub use persistence::*;
