//! Message template scanner.
//!
//! This module provides the cursor-based scanner the interpreter uses to
//! recognize placeholders, category constructs and escapes, plus template
//! analysis for external tooling.

pub mod ast;
mod analysis;
mod scan;

pub use analysis::placeholders;
pub use ast::*;
pub use scan::{
    find_trailing_construct, parse_options, substitute_hash, tokenize, unescape_literals,
    unescape_quotes,
};
