//! Ordered dictionary lists.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::resolver::Dictionary;
use crate::types::Entry;

/// An ordered list of dictionaries searched front to back.
///
/// Earlier dictionaries shadow later ones. An entry is taken whole from the
/// first dictionary that defines the key for a locale; entries are never
/// merged across dictionaries.
#[derive(Debug, Clone, Default)]
pub struct ResolutionChain {
    dictionaries: Vec<Arc<Dictionary>>,
}

impl ResolutionChain {
    pub fn new(dictionaries: Vec<Arc<Dictionary>>) -> Self {
        Self { dictionaries }
    }

    /// Append a dictionary with the lowest priority so far.
    pub fn push(&mut self, dictionary: Arc<Dictionary>) {
        self.dictionaries.push(dictionary);
    }

    /// Find the first entry for `key` in `locale`, in chain order.
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&Entry> {
        self.dictionaries
            .iter()
            .find_map(|dictionary| dictionary.get(locale, key))
    }

    /// Every key defined for `locale` by any dictionary, sorted.
    pub fn known_keys(&self, locale: &str) -> BTreeSet<&str> {
        self.dictionaries
            .iter()
            .flat_map(|dictionary| dictionary.keys(locale))
            .collect()
    }

    pub fn dictionaries(&self) -> &[Arc<Dictionary>] {
        &self.dictionaries
    }

    pub fn len(&self) -> usize {
        self.dictionaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dictionaries.is_empty()
    }
}

impl FromIterator<Arc<Dictionary>> for ResolutionChain {
    fn from_iter<I: IntoIterator<Item = Arc<Dictionary>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Dictionary>> for ResolutionChain {
    fn from(dictionaries: Vec<Dictionary>) -> Self {
        dictionaries.into_iter().map(Arc::new).collect()
    }
}

impl From<Vec<Arc<Dictionary>>> for ResolutionChain {
    fn from(dictionaries: Vec<Arc<Dictionary>>) -> Self {
        Self::new(dictionaries)
    }
}
