//! Supported locales and their display metadata.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

/// A locale the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// English
    En,
    /// Dutch
    Nl,
}

/// Locale consulted when a key is missing from the requested one.
pub const DEFAULT_LOCALE: Locale = Locale::En;

/// All supported locales, in language switcher order.
pub const LOCALES: [Locale; 2] = [Locale::En, Locale::Nl];

/// Display name of each supported locale.
pub static LANGUAGE_NAMES: LazyLock<HashMap<Locale, &'static str>> =
    LazyLock::new(|| LOCALES.iter().map(|&locale| (locale, locale.display_name())).collect());

/// Returned when a string does not name a supported locale.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown locale '{0}' (supported: en, nl)")]
pub struct UnknownLocale(pub String);

impl Locale {
    /// Lowercase locale code, also used as the translation file stem.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Nl => "nl",
        }
    }

    /// Name of the language in that language.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Nl => "Nederlands",
        }
    }

    #[must_use]
    pub const fn is_default(self) -> bool {
        matches!(self, DEFAULT_LOCALE)
    }

    /// URL path prefix reserved for this locale.
    ///
    /// The default locale is served from the site root and has no prefix.
    #[must_use]
    pub const fn url_prefix(self) -> Option<&'static str> {
        match self {
            Self::En => None,
            Self::Nl => Some("/nl"),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LOCALES
            .iter()
            .copied()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| UnknownLocale(s.to_string()))
    }
}
