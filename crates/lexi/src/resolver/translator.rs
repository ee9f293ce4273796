//! Key lookup and entry resolution.

use std::sync::Arc;

use bon::Builder;
use strsim::levenshtein;

use crate::interpreter::{Diagnostic, Interpolator};
use crate::resolver::{ResolutionChain, parent_locales};
use crate::types::{Entry, TranslationKey, Values};

/// Resolves keys for one locale through a [`ResolutionChain`].
///
/// Candidate locales are tried in order: the target locale, its parent
/// locales (`en-US` -> `en`), then the fallback locale and its parents. For
/// each candidate the chain is scanned front to back and the first entry
/// wins.
///
/// Literal entries are interpolated with the caller's values; formatter
/// entries are called with the values and their output is returned as-is.
/// A key with no entry resolves to `{{locale:key}}`.
///
/// # Example
///
/// ```
/// use lexi::{Dictionary, Translator, values};
///
/// let overrides = Dictionary::new().with("en", "accept", "Sure");
/// let defaults = Dictionary::new()
///     .with("en", "accept", "Yes")
///     .with("en", "greet", "Hello, {name}!");
///
/// let translator = Translator::builder()
///     .chain(vec![overrides, defaults])
///     .locale("en-GB")
///     .build();
///
/// assert_eq!(translator.translate("accept", &values! {}), "Sure");
/// assert_eq!(translator.translate("greet", &values! { "name" => "Ada" }), "Hello, Ada!");
/// assert_eq!(translator.translate("missing", &values! {}), "{{en-GB:missing}}");
/// ```
#[derive(Builder, Clone)]
pub struct Translator {
    /// Dictionaries searched in priority order.
    #[builder(into)]
    chain: ResolutionChain,

    /// Target locale.
    #[builder(into)]
    locale: String,

    /// Locale tried after the target locale and its parents.
    #[builder(into)]
    fallback_locale: Option<String>,

    /// Interpolator for literal entries; its sink also receives missing-key
    /// diagnostics.
    #[builder(default)]
    interpolator: Interpolator,
}

impl Translator {
    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn fallback_locale(&self) -> Option<&str> {
        self.fallback_locale.as_deref()
    }

    pub fn chain(&self) -> &ResolutionChain {
        &self.chain
    }

    /// Translate a key with values.
    pub fn translate<K>(&self, key: &K, values: &Values) -> String
    where
        K: TranslationKey + ?Sized,
    {
        let key = key.as_key();
        match self.lookup(key) {
            Some(Entry::Literal(template)) => self.interpolator.interpolate(template, values),
            Some(Entry::Formatter(formatter)) => formatter(values),
            None => {
                self.interpolator.sink().report(&Diagnostic::MissingKey {
                    locale: self.locale.clone(),
                    key: key.to_string(),
                    suggestions: self.suggestions(key),
                });
                missing_key_marker(&self.locale, key)
            }
        }
    }

    /// Translate a key that takes no values.
    pub fn t<K>(&self, key: &K) -> String
    where
        K: TranslationKey + ?Sized,
    {
        self.translate(key, &Values::new())
    }

    /// Find the entry a key resolves to, if any.
    pub fn lookup(&self, key: &str) -> Option<&Entry> {
        self.candidate_locales()
            .iter()
            .find_map(|locale| self.chain.lookup(locale, key))
    }

    /// Whether some candidate locale defines `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.lookup(key).is_some()
    }

    /// Locales searched for a key, in order, without duplicates.
    pub fn candidate_locales(&self) -> Vec<String> {
        let mut candidates = vec![self.locale.clone()];
        candidates.extend(parent_locales(&self.locale));
        if let Some(fallback) = &self.fallback_locale {
            candidates.push(fallback.clone());
            candidates.extend(parent_locales(fallback));
        }
        let mut unique: Vec<String> = Vec::with_capacity(candidates.len());
        for locale in candidates {
            if !unique.contains(&locale) {
                unique.push(locale);
            }
        }
        unique
    }

    /// Borrow this translator as a plain translate function.
    pub fn as_fn(&self) -> impl Fn(&str, &Values) -> String + '_ {
        move |key: &str, values: &Values| self.translate(key, values)
    }

    /// Turn a shared translator into an owned translate function.
    pub fn into_fn(self: Arc<Self>) -> impl Fn(&str, &Values) -> String + Send + Sync {
        move |key: &str, values: &Values| self.translate(key, values)
    }

    /// Known keys within edit distance of `key`, closest first.
    fn suggestions(&self, key: &str) -> Vec<String> {
        let max_distance = if key.len() <= 3 { 1 } else { 2 };
        let mut known: Vec<&str> = self
            .candidate_locales()
            .iter()
            .flat_map(|locale| self.chain.known_keys(locale))
            .collect();
        known.sort_unstable();
        known.dedup();

        let mut suggestions: Vec<(usize, String)> = known
            .into_iter()
            .filter_map(|candidate| {
                let dist = levenshtein(key, candidate);
                if dist <= max_distance && dist > 0 {
                    Some((dist, candidate.to_string()))
                } else {
                    None
                }
            })
            .collect();
        suggestions.sort_by_key(|(dist, _)| *dist);
        suggestions.into_iter().take(3).map(|(_, s)| s).collect()
    }
}

/// The marker returned for a key with no entry: `{{locale:key}}`.
pub fn missing_key_marker(locale: &str, key: &str) -> String {
    format!("{{{{{locale}:{key}}}}}")
}
