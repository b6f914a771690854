//! Key lookup with default-locale fallback.

use crate::config::I18nSettings;
use crate::locale::{
    DEFAULT_LOCALE,
    Locale,
};
use crate::store::TranslationStore;
use crate::tree::TranslationNode;

/// Default key path separator.
pub const DEFAULT_SEPARATOR: &str = ".";

/// Looks up keys for a single locale.
///
/// Every call walks the trees from the root. Nothing is cached, and a
/// lookup never fails: a key that cannot be resolved is returned as-is.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    /// Trees to look keys up in
    store: &'a TranslationStore,
    /// Locale consulted first
    locale: Locale,
    /// Key path separator
    separator: &'a str,
    /// Fall back when the requested locale resolves the key to a group
    fallback_on_branch: bool,
}

impl<'a> Translator<'a> {
    #[must_use]
    pub const fn new(store: &'a TranslationStore, locale: Locale) -> Self {
        Self { store, locale, separator: DEFAULT_SEPARATOR, fallback_on_branch: false }
    }

    /// Creates a translator using the separator and fallback mode from `settings`.
    #[must_use]
    pub fn from_settings(
        store: &'a TranslationStore,
        locale: Locale,
        settings: &'a I18nSettings,
    ) -> Self {
        Self::new(store, locale)
            .with_separator(&settings.key_separator)
            .with_fallback_on_branch(settings.fallback_on_branch)
    }

    /// Splits keys on `separator` instead of `.`.
    ///
    /// An empty separator never matches a key.
    #[must_use]
    pub const fn with_separator(mut self, separator: &'a str) -> Self {
        self.separator = separator;
        self
    }

    /// Treat a key that resolves to a group in the requested locale as
    /// missing, so the default locale is consulted.
    #[must_use]
    pub const fn with_fallback_on_branch(mut self, enabled: bool) -> Self {
        self.fallback_on_branch = enabled;
        self
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Translates `key`, falling back to the default locale and then to `key` itself.
    #[must_use]
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).map_or_else(|| key.to_string(), str::to_string)
    }

    /// Resolves `key` to a string, or `None` if neither locale has one.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&'a str> {
        let segments = || key.split(self.separator);

        match self.store.tree(self.locale).get(segments()) {
            Some(TranslationNode::Leaf(value)) => return Some(value.as_str()),
            Some(TranslationNode::Branch(_)) if !self.fallback_on_branch => {
                tracing::trace!(locale = %self.locale, key, "Key resolves to a group, not a string");
                return None;
            }
            _ => {}
        }

        tracing::trace!(locale = %self.locale, key, "Falling back to {DEFAULT_LOCALE}");

        let value =
            self.store.tree(DEFAULT_LOCALE).get(segments()).and_then(TranslationNode::as_leaf);
        if value.is_none() {
            tracing::trace!(locale = %self.locale, key, "No translation found");
        }
        value
    }
}

/// Returns a lookup function bound to `locale`.
///
/// # Examples
/// ```
/// use site_i18n::{Locale, TranslationStore, get_translation};
///
/// let store = TranslationStore::from_json_strs(&[
///     (Locale::En, r#"{"nav": {"home": "Home"}}"#),
///     (Locale::Nl, r#"{"nav": {}}"#),
/// ])
/// .unwrap();
///
/// let t = get_translation(&store, Locale::Nl);
/// assert_eq!(t("nav.home"), "Home");
/// assert_eq!(t("nav.blog"), "nav.blog");
/// ```
pub fn get_translation(store: &TranslationStore, locale: Locale) -> impl Fn(&str) -> String {
    let translator = store.translator(locale);
    move |key: &str| translator.t(key)
}
