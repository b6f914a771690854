//! Locale detection from URL paths.

use crate::config::I18nSettings;
use crate::locale::{
    DEFAULT_LOCALE,
    LOCALES,
    Locale,
};

/// Anything that exposes a URL path component.
pub trait UrlPath {
    /// The path component, e.g. `/nl/about`.
    fn url_path(&self) -> &str;
}

impl UrlPath for str {
    fn url_path(&self) -> &str {
        self
    }
}

impl UrlPath for String {
    fn url_path(&self) -> &str {
        self
    }
}

impl UrlPath for url::Url {
    fn url_path(&self) -> &str {
        self.path()
    }
}

impl<T: UrlPath + ?Sized> UrlPath for &T {
    fn url_path(&self) -> &str {
        (**self).url_path()
    }
}

/// How a locale prefix is matched against a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrefixMatch {
    /// Plain string prefix: `/nlfoo` matches `/nl`.
    #[default]
    Literal,
    /// Prefix followed by the end of the path or a `/`.
    Segment,
}

/// Derives the locale of a page from its URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleResolver {
    /// Prefix matching mode
    mode: PrefixMatch,
}

impl LocaleResolver {
    #[must_use]
    pub const fn new(mode: PrefixMatch) -> Self {
        Self { mode }
    }

    #[must_use]
    pub const fn from_settings(settings: &I18nSettings) -> Self {
        if settings.strict_locale_prefix {
            Self::new(PrefixMatch::Segment)
        } else {
            Self::new(PrefixMatch::Literal)
        }
    }

    #[must_use]
    pub const fn mode(self) -> PrefixMatch {
        self.mode
    }

    /// Returns the locale whose prefix starts the path, or the default locale.
    #[must_use]
    pub fn resolve<U: UrlPath + ?Sized>(self, url: &U) -> Locale {
        let path = url.url_path();

        LOCALES
            .iter()
            .copied()
            .find(|locale| locale.url_prefix().is_some_and(|prefix| self.matches(path, prefix)))
            .unwrap_or(DEFAULT_LOCALE)
    }

    /// Whether `path` starts with `prefix` under the current mode.
    fn matches(self, path: &str, prefix: &str) -> bool {
        match self.mode {
            PrefixMatch::Literal => path.starts_with(prefix),
            PrefixMatch::Segment => path.strip_prefix(prefix).is_some_and(is_segment_end),
        }
    }
}

/// Whether the remainder after a prefix begins a new path segment.
fn is_segment_end(rest: &str) -> bool {
    rest.is_empty() || rest.starts_with('/')
}

/// Resolves the locale of `url` using literal prefix matching.
///
/// # Examples
/// ```
/// use site_i18n::{Locale, get_locale_from_url};
///
/// assert_eq!(get_locale_from_url("/nl/about"), Locale::Nl);
/// assert_eq!(get_locale_from_url("/about"), Locale::En);
/// ```
#[must_use]
pub fn get_locale_from_url<U: UrlPath + ?Sized>(url: &U) -> Locale {
    LocaleResolver::default().resolve(url)
}

/// Rewrites `path` so it points at the same page in `locale`.
///
/// An existing locale prefix is replaced. The default locale is served
/// without a prefix.
///
/// # Examples
/// ```
/// use site_i18n::{Locale, relative_locale_url};
///
/// assert_eq!(relative_locale_url(Locale::Nl, "/about"), "/nl/about");
/// assert_eq!(relative_locale_url(Locale::En, "/nl/about"), "/about");
/// ```
#[must_use]
pub fn relative_locale_url(locale: Locale, path: &str) -> String {
    let page = strip_locale_prefix(path).trim_start_matches('/');

    locale.url_prefix().map_or_else(|| format!("/{page}"), |prefix| format!("{prefix}/{page}"))
}

/// Removes a locale prefix that ends at a segment boundary.
fn strip_locale_prefix(path: &str) -> &str {
    LOCALES
        .iter()
        .filter_map(|locale| locale.url_prefix())
        .find_map(|prefix| path.strip_prefix(prefix).filter(|rest| is_segment_end(rest)))
        .unwrap_or(path)
}
