use std::sync::{PoisonError, RwLock};

use crate::config::AppSettings;

/// Shared, mutable view of the application settings.
#[derive(Debug, Default)]
pub struct SettingsService {
    settings: RwLock<AppSettings>,
}

impl SettingsService {
    pub fn new(settings: AppSettings) -> Self {
        Self { settings: RwLock::new(settings) }
    }

    /// Snapshot of the current settings.
    pub fn get(&self) -> AppSettings {
        self.settings.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Apply `change` to the settings and return the new snapshot.
    pub fn update(&self, change: impl FnOnce(&mut AppSettings)) -> AppSettings {
        let mut settings = self.settings.write().unwrap_or_else(PoisonError::into_inner);
        change(&mut settings);
        settings.clone()
    }
}
