//! tcalc - Terminal Calculator Library
//!
//! A keyboard and mouse driven arithmetic calculator for the terminal, with a
//! persisted light/dark theme.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
