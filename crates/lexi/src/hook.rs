//! Locale-bound translation layer.
//!
//! A [`TranslationHook`] owns the library's default dictionary and hands out
//! translators whose chain puts caller extensions first. The last translator
//! is memoized and rebuilt only when the locale changes or a different
//! extension list is passed.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use bon::Builder;

use crate::interpreter::Interpolator;
use crate::locale_context::LocaleContext;
use crate::resolver::{Dictionary, ResolutionChain, Translator};

/// Caller-supplied dictionaries, highest priority first.
///
/// Memoization compares lists by identity: pass the same `Arc` to reuse the
/// cached translator, a new one to rebuild it.
pub type ExtensionList = Arc<[Arc<Dictionary>]>;

struct Memo {
    locale: String,
    extensions: Option<ExtensionList>,
    translator: Arc<Translator>,
}

impl Memo {
    fn matches(&self, locale: &str, extensions: Option<&ExtensionList>) -> bool {
        let same_extensions = match (&self.extensions, extensions) {
            (None, None) => true,
            (Some(cached), Some(current)) => Arc::ptr_eq(cached, current),
            _ => false,
        };
        same_extensions && self.locale == locale
    }
}

/// Binds a locale and caller extensions to a memoized [`Translator`].
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use lexi::{Dictionary, ExtensionList, TranslationHook, values};
///
/// let hook = TranslationHook::builder()
///     .defaults(Dictionary::new().with("en", "close", "Close").with("en", "open", "Open"))
///     .build();
/// let extensions: ExtensionList = Arc::new([Arc::new(Dictionary::new().with("en", "close", "Dismiss"))]);
///
/// let translator = hook.use_translation("en", Some(&extensions));
/// assert_eq!(translator.t("close"), "Dismiss");
/// assert_eq!(translator.t("open"), "Open");
///
/// let again = hook.use_translation("en", Some(&extensions));
/// assert!(Arc::ptr_eq(&translator, &again));
/// ```
#[derive(Builder)]
pub struct TranslationHook {
    /// The library's built-in dictionary, always last in the chain.
    #[builder(into)]
    defaults: Arc<Dictionary>,

    /// Locale tried when the active locale has no entry.
    #[builder(into)]
    fallback_locale: Option<String>,

    /// Interpolator handed to every translator.
    #[builder(default)]
    interpolator: Interpolator,

    #[builder(skip)]
    memo: Mutex<Option<Memo>>,

    #[builder(skip)]
    builds: AtomicUsize,
}

impl TranslationHook {
    /// Get the translator for `locale` and `extensions`, rebuilding it only
    /// if either differs from the previous call.
    pub fn use_translation(
        &self,
        locale: &str,
        extensions: Option<&ExtensionList>,
    ) -> Arc<Translator> {
        let mut memo = self.memo.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(cached) = memo.as_ref()
            && cached.matches(locale, extensions)
        {
            return Arc::clone(&cached.translator);
        }

        let translator = Arc::new(self.build_translator(locale, extensions));
        self.builds.fetch_add(1, Ordering::Relaxed);
        *memo = Some(Memo {
            locale: locale.to_string(),
            extensions: extensions.cloned(),
            translator: Arc::clone(&translator),
        });
        translator
    }

    /// Get the translator for the context's current locale.
    pub fn use_context(
        &self,
        context: &LocaleContext,
        extensions: Option<&ExtensionList>,
    ) -> Arc<Translator> {
        self.use_translation(&context.locale(), extensions)
    }

    /// How many translators this hook has built.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }

    pub fn defaults(&self) -> &Arc<Dictionary> {
        &self.defaults
    }

    fn build_translator(&self, locale: &str, extensions: Option<&ExtensionList>) -> Translator {
        let mut chain: ResolutionChain = extensions
            .map(|list| list.iter().cloned().collect())
            .unwrap_or_default();
        chain.push(Arc::clone(&self.defaults));

        Translator::builder()
            .chain(chain)
            .locale(locale)
            .maybe_fallback_locale(self.fallback_locale.clone())
            .interpolator(self.interpolator.clone())
            .build()
    }
}
