//! Plural category selection.
//!
//! Categories come from a fixed bucketing of the numeric value and do not
//! depend on the locale:
//!
//! | value        | category |
//! |--------------|----------|
//! | `0`          | `zero`   |
//! | `1`          | `one`    |
//! | `2`          | `two`    |
//! | `2 < n < 5`  | `few`    |
//! | `n >= 5`     | `many`   |
//! | anything else| `other`  |

use std::fmt;

/// A plural category name used as a plural option key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PluralCategory {
    Zero,
    One,
    Two,
    Few,
    Many,
    Other,
}

impl PluralCategory {
    /// The option name for this category.
    pub fn as_str(self) -> &'static str {
        match self {
            PluralCategory::Zero => "zero",
            PluralCategory::One => "one",
            PluralCategory::Two => "two",
            PluralCategory::Few => "few",
            PluralCategory::Many => "many",
            PluralCategory::Other => "other",
        }
    }
}

impl fmt::Display for PluralCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Get the plural category for a number.
///
/// # Examples
///
/// ```
/// use lexi::interpreter::{plural_category, PluralCategory};
///
/// assert_eq!(plural_category(0.0), PluralCategory::Zero);
/// assert_eq!(plural_category(3.0), PluralCategory::Few);
/// assert_eq!(plural_category(12.0), PluralCategory::Many);
/// assert_eq!(plural_category(1.5), PluralCategory::Other);
/// ```
pub fn plural_category(n: f64) -> PluralCategory {
    if n == 0.0 {
        PluralCategory::Zero
    } else if n == 1.0 {
        PluralCategory::One
    } else if n == 2.0 {
        PluralCategory::Two
    } else if n > 2.0 && n < 5.0 {
        PluralCategory::Few
    } else if n >= 5.0 {
        PluralCategory::Many
    } else {
        PluralCategory::Other
    }
}
