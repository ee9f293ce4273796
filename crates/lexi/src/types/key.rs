/// A value usable as a translation key.
///
/// Keys are plain strings at runtime. Implementing this trait for an enum
/// restricts callers to a known key set at compile time:
///
/// ```
/// use lexi::TranslationKey;
///
/// enum DialogKey {
///     Accept,
///     Reject,
/// }
///
/// impl TranslationKey for DialogKey {
///     fn as_key(&self) -> &str {
///         match self {
///             DialogKey::Accept => "accept",
///             DialogKey::Reject => "reject",
///         }
///     }
/// }
///
/// assert_eq!(DialogKey::Reject.as_key(), "reject");
/// ```
pub trait TranslationKey {
    /// The key string looked up in dictionaries.
    fn as_key(&self) -> &str;
}

impl TranslationKey for str {
    fn as_key(&self) -> &str {
        self
    }
}

impl TranslationKey for String {
    fn as_key(&self) -> &str {
        self
    }
}

impl<K: TranslationKey + ?Sized> TranslationKey for &K {
    fn as_key(&self) -> &str {
        (**self).as_key()
    }
}
