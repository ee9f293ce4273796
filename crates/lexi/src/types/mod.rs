mod entry;
mod key;
mod value;

pub use entry::{Entry, FormatterFn};
pub use key::TranslationKey;
pub use value::{Value, Values};
