//! Holds the active settings for a site.

use std::path::PathBuf;

use super::{
    ConfigError,
    I18nSettings,
    loader,
};

/// Owns the validated settings and the site root they were loaded from.
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// Current settings
    current_settings: I18nSettings,

    /// Site root directory
    site_root: Option<PathBuf>,
}

impl ConfigManager {
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: I18nSettings::default(), site_root: None }
    }

    /// Load settings from the site root, falling back to defaults when
    /// there is no config file.
    ///
    /// # Errors
    /// - File read error
    /// - JSON parse error
    /// - Validation error
    pub fn load_settings(&mut self, site_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings for site root: {:?}", site_root);

        let settings = if let Some(root) = &site_root {
            loader::load_from_site_root(root)?.map_or_else(I18nSettings::default, |s| {
                tracing::debug!("Loaded site settings: {:?}", s);
                s
            })
        } else {
            I18nSettings::default()
        };

        settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = settings;
        self.site_root = site_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    #[must_use]
    pub const fn get_settings(&self) -> &I18nSettings {
        &self.current_settings
    }

    #[must_use]
    pub const fn site_root(&self) -> Option<&PathBuf> {
        self.site_root.as_ref()
    }

    /// Translations directory resolved against the site root.
    ///
    /// Absolute paths are returned as-is. `None` means the bundled
    /// dictionaries should be used.
    #[must_use]
    pub fn translations_dir(&self) -> Option<PathBuf> {
        let dir = self.current_settings.translations_dir.as_deref()?;
        Some(self.site_root.as_deref().map_or_else(|| dir.to_path_buf(), |root| root.join(dir)))
    }
}
