pub mod check;
pub mod hook;
pub mod interpreter;
pub mod locale_context;
pub mod parser;
pub mod resolver;
pub mod types;

pub use hook::{ExtensionList, TranslationHook};
pub use interpreter::{
    CollectingSink, Diagnostic, DiagnosticSink, ExpectedKind, Interpolator, MissingValue,
    NullSink, TracingSink, interpolate,
};
pub use locale_context::{LocaleContext, Subscription};
pub use resolver::{Dictionary, LoadError, ResolutionChain, Translator};
pub use types::{Entry, TranslationKey, Value, Values};

/// Creates a [`Values`] bag from key-value pairs.
///
/// Values are converted via `Into<Value>`, so integers, floats and strings
/// can be passed directly.
///
/// # Example
///
/// ```
/// use lexi::{values, Value};
///
/// let v = values! { "count" => 3, "name" => "Alice" };
/// assert_eq!(v.len(), 2);
/// assert_eq!(v["count"].as_number(), Some(3));
/// assert_eq!(v["name"].as_string(), Some("Alice"));
/// ```
#[macro_export]
macro_rules! values {
    {} => {
        $crate::Values::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Values::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
