//! Translation resolver.
//!
//! This module provides dictionaries, the ordered resolution chain searched
//! for a key, locale fallback, and the [`Translator`] that turns a key and a
//! value bag into a display string.

mod chain;
mod dictionary;
mod error;
mod locale;
mod translator;

pub use chain::ResolutionChain;
pub use dictionary::Dictionary;
pub use error::LoadError;
pub use locale::parent_locales;
pub use translator::{Translator, missing_key_marker};
