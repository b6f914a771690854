use std::path::Path;

use serde_json::Value;

use super::{
    StoreError,
    TranslationStore,
};
use crate::locale::{
    LOCALES,
    Locale,
};

/// English dictionary compiled into the crate.
const BUNDLED_EN: &str = include_str!("../../i18n/en.json");
/// Dutch dictionary compiled into the crate.
const BUNDLED_NL: &str = include_str!("../../i18n/nl.json");

impl TranslationStore {
    /// Creates a store from JSON text, one document per locale.
    ///
    /// # Errors
    /// - A document is not valid JSON
    /// - A document is not a valid translation tree
    /// - A supported locale has no document
    pub fn from_json_strs(docs: &[(Locale, &str)]) -> Result<Self, StoreError> {
        let values = docs
            .iter()
            .map(|&(locale, text)| {
                serde_json::from_str::<Value>(text)
                    .map(|json| (locale, json))
                    .map_err(|source| StoreError::Parse { locale, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_json_values(values)
    }

    /// Loads `<dir>/<locale>.json` for every supported locale.
    ///
    /// # Errors
    /// - A file is missing or unreadable
    /// - A file is not a valid translation document
    pub fn load_from_dir(dir: &Path) -> Result<Self, StoreError> {
        tracing::debug!(dir = %dir.display(), "Loading translations");

        let contents = LOCALES
            .iter()
            .map(|&locale| {
                let path = dir.join(format!("{}.json", locale.code()));
                tracing::debug!(%locale, path = %path.display(), "Reading translation file");
                std::fs::read_to_string(&path)
                    .map(|text| (locale, text))
                    .map_err(|source| StoreError::Io { path, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let docs: Vec<(Locale, &str)> =
            contents.iter().map(|(locale, text)| (*locale, text.as_str())).collect();

        Self::from_json_strs(&docs)
    }

    /// Creates a store from the dictionaries compiled into the crate.
    ///
    /// # Errors
    /// Only if the bundled dictionaries are invalid.
    pub fn bundled() -> Result<Self, StoreError> {
        Self::from_json_strs(&[(Locale::En, BUNDLED_EN), (Locale::Nl, BUNDLED_NL)])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::tree::TranslationNode;

    fn leaf<'a>(store: &'a TranslationStore, locale: Locale, key: &str) -> Option<&'a str> {
        store.tree(locale).get(key.split('.')).and_then(TranslationNode::as_leaf)
    }

    #[googletest::test]
    fn test_bundled_dictionaries_load() {
        let store = TranslationStore::bundled().unwrap();

        expect_that!(leaf(&store, Locale::En, "nav.home"), some(eq("Home")));
        expect_that!(leaf(&store, Locale::Nl, "nav.about"), some(eq("Over mij")));
    }

    #[googletest::test]
    fn test_bundled_dictionaries_only_miss_known_keys() {
        let store = TranslationStore::bundled().unwrap();

        assert_eq!(store.missing_keys(Locale::Nl, "."), vec!["contact.success"]);
    }

    #[rstest]
    fn test_from_json_strs_invalid_json() {
        let result = TranslationStore::from_json_strs(&[(Locale::En, "{}"), (Locale::Nl, "{")]);

        assert!(matches!(result, Err(StoreError::Parse { locale: Locale::Nl, .. })));
    }

    #[rstest]
    fn test_load_from_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en.json"), r#"{"nav": {"home": "Home"}}"#).unwrap();
        fs::write(temp_dir.path().join("nl.json"), r#"{"nav": {}}"#).unwrap();

        let store = TranslationStore::load_from_dir(temp_dir.path()).unwrap();

        assert_eq!(leaf(&store, Locale::En, "nav.home"), Some("Home"));
        assert_eq!(leaf(&store, Locale::Nl, "nav.home"), None);
    }

    #[rstest]
    fn test_load_from_dir_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("en.json"), "{}").unwrap();

        let result = TranslationStore::load_from_dir(temp_dir.path());

        let Err(StoreError::Io { path, .. }) = result else {
            panic!("expected an I/O error");
        };
        assert_eq!(path, temp_dir.path().join("nl.json"));
    }
}
