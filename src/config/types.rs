use std::path::PathBuf;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "keySeparator")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Renders validation errors as a numbered list.
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct I18nSettings {
    /// Directory holding `<locale>.json` files, relative to the site root.
    /// If unset, the dictionaries bundled with the crate are used.
    pub translations_dir: Option<PathBuf>,

    pub key_separator: String,

    /// Require a path segment boundary after the locale prefix, so that
    /// `/nlfoo` resolves to the default locale instead of `nl`.
    pub strict_locale_prefix: bool,

    /// Fall back to the default locale when a key resolves to a nested
    /// group instead of a string.
    pub fallback_on_branch: bool,
}

impl Default for I18nSettings {
    fn default() -> Self {
        Self {
            translations_dir: None,
            key_separator: ".".to_string(),
            strict_locale_prefix: false,
            fallback_on_branch: false,
        }
    }
}

impl I18nSettings {
    /// # Errors
    /// - Empty separator
    /// - Empty translations directory
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if let Some(dir) = &self.translations_dir
            && dir.as_os_str().is_empty()
        {
            errors.push(ValidationError::new(
                "translationsDir",
                "The directory cannot be empty. Please specify a path (e.g., \"src/i18n\"), or remove this field",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[googletest::test]
    fn test_default_settings_are_valid() {
        let settings = I18nSettings::default();

        expect_that!(settings.key_separator.as_str(), eq("."));
        expect_that!(settings.strict_locale_prefix, eq(false));
        expect_that!(settings.fallback_on_branch, eq(false));
        expect_that!(settings.validate().is_ok(), eq(true));
    }

    #[googletest::test]
    fn test_deserialize_partial_uses_defaults() {
        let settings: I18nSettings =
            serde_json::from_str(r#"{"strictLocalePrefix": true, "translationsDir": "src/i18n"}"#)
                .unwrap();

        expect_that!(settings.strict_locale_prefix, eq(true));
        expect_that!(settings.key_separator.as_str(), eq("."));
        assert_eq!(settings.translations_dir, Some(PathBuf::from("src/i18n")));
    }

    #[rstest]
    #[case::empty_separator(r#"{"keySeparator": ""}"#, "keySeparator")]
    #[case::empty_dir(r#"{"translationsDir": ""}"#, "translationsDir")]
    fn test_validate_rejects(#[case] json: &str, #[case] field: &str) {
        let settings: I18nSettings = serde_json::from_str(json).unwrap();

        let errors = settings.validate().unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field_path, field);
    }

    #[googletest::test]
    fn test_validation_errors_are_numbered() {
        let settings = I18nSettings {
            key_separator: String::new(),
            translations_dir: Some(PathBuf::new()),
            ..I18nSettings::default()
        };

        let err = ConfigError::ValidationErrors(settings.validate().unwrap_err());

        expect_that!(err.to_string(), contains_substring("1. keySeparator"));
        expect_that!(err.to_string(), contains_substring("2. translationsDir"));
    }
}
