//! Helpers shared by the unit tests.

use serde_json::Value;

use crate::locale::Locale;
use crate::store::TranslationStore;

/// Create a store from one JSON document per locale.
///
/// # Panics
/// If either document is not a valid translation tree.
#[allow(clippy::unwrap_used)]
pub(crate) fn create_store(en: Value, nl: Value) -> TranslationStore {
    TranslationStore::from_json_values([(Locale::En, en), (Locale::Nl, nl)]).unwrap()
}
