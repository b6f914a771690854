use std::path::PathBuf;

use thiserror::Error;

use crate::locale::Locale;
use crate::tree::TreeError;

/// Errors that may occur while building a [`TranslationStore`](super::TranslationStore)
#[derive(Error, Debug)]
pub enum StoreError {
    /// A supported locale has no translation document
    #[error("No translations provided for locale '{0}'")]
    MissingLocale(Locale),
    /// Error when failing to read a translation file
    #[error("Failed to read translation file {}: {source}", .path.display())]
    Io {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// Error when a translation document is not valid JSON
    #[error("Failed to parse translations for locale '{locale}': {source}")]
    Parse {
        /// Locale of the document
        locale: Locale,
        /// JSON syntax error
        source: serde_json::Error,
    },
    /// Error when a translation document is valid JSON but not a translation tree
    #[error("Invalid translations for locale '{locale}': {source}")]
    Tree {
        /// Locale of the document
        locale: Locale,
        /// Conversion error
        source: TreeError,
    },
}
