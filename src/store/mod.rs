//! Per-locale translation trees.
//!
//! A [`TranslationStore`] is built once at startup and then shared by
//! reference. Nothing mutates it after construction.

/// Store construction errors
mod error;
/// Loading from JSON text, directories and the bundled dictionaries
mod loader;

use std::collections::HashMap;

use serde_json::Value;

pub use error::StoreError;

use crate::locale::{
    DEFAULT_LOCALE,
    Locale,
};
use crate::translator::Translator;
use crate::tree::TranslationNode;

/// Immutable translation trees, one per supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationStore {
    /// English tree
    en: TranslationNode,
    /// Dutch tree
    nl: TranslationNode,
}

impl TranslationStore {
    /// Creates a store from one tree per locale.
    ///
    /// # Errors
    /// Returns [`StoreError::MissingLocale`] if a supported locale has no tree.
    pub fn new(mut trees: HashMap<Locale, TranslationNode>) -> Result<Self, StoreError> {
        let mut take =
            |locale: Locale| trees.remove(&locale).ok_or(StoreError::MissingLocale(locale));

        Ok(Self { en: take(Locale::En)?, nl: take(Locale::Nl)? })
    }

    /// Creates a store from parsed JSON documents.
    ///
    /// Later documents for the same locale replace earlier ones.
    ///
    /// # Errors
    /// - A document is not a valid translation tree
    /// - A supported locale has no document
    pub fn from_json_values<I>(docs: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = (Locale, Value)>,
    {
        let trees = docs
            .into_iter()
            .map(|(locale, json)| {
                TranslationNode::from_json(&json)
                    .map(|tree| (locale, tree))
                    .map_err(|source| StoreError::Tree { locale, source })
            })
            .collect::<Result<HashMap<_, _>, _>>()?;

        Self::new(trees)
    }

    /// Translation tree of `locale`.
    #[must_use]
    pub const fn tree(&self, locale: Locale) -> &TranslationNode {
        match locale {
            Locale::En => &self.en,
            Locale::Nl => &self.nl,
        }
    }

    /// Creates a translator bound to `locale`, splitting keys on `.`.
    #[must_use]
    pub fn translator(&self, locale: Locale) -> Translator<'_> {
        Translator::new(self, locale)
    }

    /// Keys that have a string in the default locale but not in `locale`.
    ///
    /// Each key is checked by walking its segments in `locale`'s tree, the
    /// same way a [`Translator`] would, and reported joined with
    /// `separator`. The result is sorted and always empty for the default
    /// locale.
    #[must_use]
    pub fn missing_keys(&self, locale: Locale, separator: &str) -> Vec<String> {
        let tree = self.tree(locale);

        let mut missing: Vec<String> = self
            .tree(DEFAULT_LOCALE)
            .leaf_paths()
            .into_iter()
            .filter(|path| tree.get(path).and_then(TranslationNode::as_leaf).is_none())
            .map(|path| path.join(separator))
            .collect();
        missing.sort();
        missing
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::test_utils::create_store;

    #[googletest::test]
    fn test_new_requires_every_locale() {
        let trees = HashMap::from([(Locale::En, TranslationNode::default())]);

        let result = TranslationStore::new(trees);

        assert!(matches!(result, Err(StoreError::MissingLocale(Locale::Nl))));
    }

    #[googletest::test]
    fn test_tree_returns_locale_tree() {
        let store = create_store(json!({ "a": "en" }), json!({ "a": "nl" }));

        expect_that!(store.tree(Locale::En).get(["a"]).and_then(TranslationNode::as_leaf), some(eq("en")));
        expect_that!(store.tree(Locale::Nl).get(["a"]).and_then(TranslationNode::as_leaf), some(eq("nl")));
    }

    #[googletest::test]
    fn test_from_json_values_reports_locale_of_bad_tree() {
        let result = TranslationStore::from_json_values([
            (Locale::En, json!({ "a": "b" })),
            (Locale::Nl, json!({ "count": 1 })),
        ]);

        assert!(matches!(result, Err(StoreError::Tree { locale: Locale::Nl, .. })));
    }

    #[googletest::test]
    fn test_from_json_values_later_document_wins() {
        let store = TranslationStore::from_json_values([
            (Locale::En, json!({ "a": "first" })),
            (Locale::Nl, json!({})),
            (Locale::En, json!({ "a": "second" })),
        ])
        .unwrap();

        expect_that!(store.tree(Locale::En).get(["a"]).and_then(TranslationNode::as_leaf), some(eq("second")));
    }

    #[googletest::test]
    fn test_missing_keys() {
        let store = create_store(
            json!({ "nav": { "home": "Home", "about": "About" }, "title": "Site" }),
            json!({ "nav": { "home": "Home", "extra": "Extra" }, "title": { "main": "Site" } }),
        );

        assert_eq!(store.missing_keys(Locale::Nl, "."), vec!["nav.about", "title"]);
        expect_that!(store.missing_keys(Locale::En, ".").is_empty(), eq(true));
    }

    #[googletest::test]
    fn test_missing_keys_key_containing_separator() {
        // `a.b` in en is a single key, so nl's nested `a` -> `b` is a different key
        let store = create_store(json!({ "a.b": "x" }), json!({ "a": { "b": "y" } }));

        assert_eq!(store.missing_keys(Locale::Nl, "."), vec!["a.b"]);
    }
}
