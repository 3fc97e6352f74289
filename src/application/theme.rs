//! Light/dark theme preference with durable storage.

use super::ports::{Renderer, Storage};
use crate::domain::{StorageResult, ThemePreference};
use tracing::{info, warn};

/// Storage key holding `"light"` or `"dark"`.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Tracks the active theme and persists every change.
pub struct ThemeManager<S: Storage> {
    storage: S,
    current: ThemePreference,
}

impl<S: Storage> ThemeManager<S> {
    /// Reads the saved preference and applies it without writing storage.
    ///
    /// A missing value, an unreadable store, or an unknown literal all
    /// fall back to the light theme.
    pub fn load_on_startup<R: Renderer + ?Sized>(storage: S, renderer: &mut R) -> Self {
        let stored = match storage.get(THEME_STORAGE_KEY) {
            Ok(value) => value,
            Err(err) => {
                warn!(error = %err, "Could not read theme preference, using light");
                None
            }
        };

        let current = ThemePreference::from_stored(stored.as_deref());
        renderer.apply_theme(current);
        info!(theme = %current, "Theme loaded");

        Self { storage, current }
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    /// Switches theme, applies it, then saves it.
    ///
    /// # Errors
    ///
    /// Returns the storage error if the new preference could not be saved.
    /// The new theme is applied and kept in memory regardless.
    pub fn toggle<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> StorageResult<ThemePreference> {
        self.current = self.current.toggled();
        renderer.apply_theme(self.current);
        info!(theme = %self.current, "Theme toggled");

        self.storage
            .set(THEME_STORAGE_KEY, self.current.as_str())
            .map(|()| self.current)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }
}
