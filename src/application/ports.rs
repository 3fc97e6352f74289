//! Capability interfaces the controller and theme manager talk through.
//!
//! Keeping the visible surface and the preference store behind these traits
//! lets the input logic run against in-memory doubles in tests.

use crate::domain::{StorageResult, ThemePreference};

/// A surface that shows the calculator buffer and reflects the theme.
pub trait Renderer {
    /// Shows `text`, scrolled so its last character is visible.
    fn render(&mut self, text: &str);

    /// Applies the palette and toggle icon for `theme`.
    fn apply_theme(&mut self, theme: ThemePreference);
}

/// Durable string key-value storage.
pub trait Storage {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
