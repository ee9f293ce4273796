//! Ambient locale shared by a component tree.
//!
//! `LocaleContext` is an explicit service, not a process-wide static: create
//! one, share it through `Arc`, and drop it (or call
//! [`LocaleContext::clear_observers`]) to tear it down.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

type Observer = Arc<dyn Fn(&str) + Send + Sync>;

/// Handle returned by [`LocaleContext::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

/// The current locale plus observers notified when it changes.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use lexi::LocaleContext;
///
/// let context = LocaleContext::new("en");
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = seen.clone();
/// let subscription = context.subscribe(move |locale| sink.lock().unwrap().push(locale.to_string()));
///
/// context.set_locale("de");
/// context.set_locale("de");
/// assert_eq!(*seen.lock().unwrap(), vec!["de".to_string()]);
///
/// assert!(context.unsubscribe(subscription));
/// ```
pub struct LocaleContext {
    locale: RwLock<String>,
    observers: RwLock<Vec<(Subscription, Observer)>>,
    next_id: AtomicU64,
}

impl LocaleContext {
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: RwLock::new(locale.into()),
            observers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// The current locale.
    pub fn locale(&self) -> String {
        self.locale
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Change the locale. Observers run only when the value changes, after
    /// the new locale is visible.
    pub fn set_locale(&self, locale: impl Into<String>) {
        let locale = locale.into();
        {
            let mut current = self.locale.write().unwrap_or_else(PoisonError::into_inner);
            if *current == locale {
                return;
            }
            current.clone_from(&locale);
        }

        let observers: Vec<Observer> = self
            .observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, observer)| Arc::clone(observer))
            .collect();
        for observer in observers {
            observer(&locale);
        }
    }

    /// Register an observer called with the new locale on every change.
    pub fn subscribe(&self, observer: impl Fn(&str) + Send + Sync + 'static) -> Subscription {
        let subscription = Subscription(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((subscription, Arc::new(observer)));
        subscription
    }

    /// Remove an observer. Returns false if it was already removed.
    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        let mut observers = self.observers.write().unwrap_or_else(PoisonError::into_inner);
        let before = observers.len();
        observers.retain(|(id, _)| *id != subscription);
        observers.len() != before
    }

    pub fn observer_count(&self) -> usize {
        self.observers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Remove every observer.
    pub fn clear_observers(&self) {
        self.observers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl Default for LocaleContext {
    fn default() -> Self {
        Self::new("en")
    }
}
