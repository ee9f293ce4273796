//! Locale fallback.

use icu_locale_core::LanguageIdentifier;
use icu_locale_core::subtags::Variants;

/// Less specific forms of a locale tag, most specific first.
///
/// Variants, then region, then script are dropped in turn. Tags that are not
/// well-formed BCP 47 have no parents. The tag itself is never included,
/// but a tag with non-canonical casing (`EN-us`) yields its canonical form
/// first.
///
/// # Example
///
/// ```
/// use lexi::resolver::parent_locales;
///
/// assert_eq!(parent_locales("zh-Hant-TW"), vec!["zh-Hant", "zh"]);
/// assert_eq!(parent_locales("en-US"), vec!["en"]);
/// assert!(parent_locales("en").is_empty());
/// ```
pub fn parent_locales(locale: &str) -> Vec<String> {
    let Ok(mut id) = locale.parse::<LanguageIdentifier>() else {
        return Vec::new();
    };

    let mut parents: Vec<String> = Vec::new();
    let mut push = |id: &LanguageIdentifier| {
        let tag = id.to_string();
        if tag != locale && !parents.contains(&tag) {
            parents.push(tag);
        }
    };

    push(&id);
    if !id.variants.is_empty() {
        id.variants = Variants::new();
        push(&id);
    }
    if id.region.is_some() {
        id.region = None;
        push(&id);
    }
    if id.script.is_some() {
        id.script = None;
        push(&id);
    }
    parents
}
