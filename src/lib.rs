//! site-i18n
//!
//! Translation lookup for a static site published in English and Dutch.
//!
//! Translations live in one nested JSON document per locale. Keys are
//! dotted paths into those documents. A key missing from the requested
//! locale falls back to the default locale, and then to the key itself.
//!
//! ```
//! use site_i18n::{TranslationStore, get_locale_from_url, get_translation};
//!
//! let store = TranslationStore::bundled().unwrap();
//! let t = get_translation(&store, get_locale_from_url("/nl/contact"));
//!
//! assert_eq!(t("contact.form.submit"), "Verstuur bericht");
//! assert_eq!(t("contact.success"), "Thanks, your message has been sent.");
//! assert_eq!(t("contact.unknown"), "contact.unknown");
//! ```

pub mod config;
pub mod locale;
pub mod resolver;
pub mod store;
#[cfg(test)]
mod test_utils;
pub mod translator;
pub mod tree;

pub use locale::{
    DEFAULT_LOCALE,
    LANGUAGE_NAMES,
    LOCALES,
    Locale,
    UnknownLocale,
};
pub use resolver::{
    LocaleResolver,
    PrefixMatch,
    UrlPath,
    get_locale_from_url,
    relative_locale_url,
};
pub use store::{
    StoreError,
    TranslationStore,
};
pub use translator::{
    Translator,
    get_translation,
};
pub use tree::{
    TranslationNode,
    TreeError,
};
