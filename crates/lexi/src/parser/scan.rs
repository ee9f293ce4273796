//! Cursor-based scanner for message templates using winnow.
//!
//! Recognizes:
//! - Trailing category constructs: `{name, select, ...}` / `{name, plural, ...}`
//!   that end exactly at the end of the message
//! - Option blocks: `name{text}` pairs, where text stops at the first
//!   unescaped `}` (option bodies do not nest)
//! - Simple placeholders: `{name}`
//! - Escaped literals: `'{'` `'}'` `'#'`

use super::ast::{ConstructKind, OptionBranch, Options, Token, TrailingConstruct};
use winnow::ascii::multispace0;
use winnow::combinator::{alt, delimited};
use winnow::prelude::*;
use winnow::token::{none_of, one_of, take_while};

/// Find the leftmost `kind` construct that extends to the end of `message`.
///
/// The message must end with the construct's closing `}`; text after a
/// construct is never part of one.
pub fn find_trailing_construct(message: &str, kind: ConstructKind) -> Option<TrailingConstruct<'_>> {
    if !message.ends_with('}') {
        return None;
    }
    let body_end = message.len() - 1;

    for (start, _) in message.match_indices('{') {
        let mut input = &message[start..];
        let Ok(identifier) = construct_header(&mut input, kind.keyword()) else {
            continue;
        };
        let header_end = message.len() - input.len();
        if header_end > body_end {
            continue;
        }
        return Some(TrailingConstruct {
            start,
            identifier,
            kind,
            options: &message[header_end..body_end],
        });
    }
    None
}

/// Parse an option block into `name{text}` branches.
///
/// Anything between branches that does not form a branch is skipped.
pub fn parse_options(source: &str) -> Options<'_> {
    let mut branches = Vec::new();
    let mut rest = source;
    while !rest.is_empty() {
        let mut input = rest;
        if let Ok(branch) = option_branch(&mut input) {
            branches.push(branch);
            rest = input;
        } else {
            rest = skip_char(rest);
        }
    }
    Options { branches }
}

/// Split text into literals, escaped literals and simple placeholders.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = text;
    let mut literal_start: Option<usize> = None;

    while !rest.is_empty() {
        let offset = text.len() - rest.len();
        let mut input = rest;
        if let Ok(token) = token(&mut input) {
            if let Some(start) = literal_start.take() {
                tokens.push(Token::Literal(&text[start..offset]));
            }
            tokens.push(token);
            rest = input;
        } else {
            literal_start.get_or_insert(offset);
            rest = skip_char(rest);
        }
    }

    if let Some(start) = literal_start {
        tokens.push(Token::Literal(&text[start..]));
    }
    tokens
}

/// Replace every unescaped `#` with `number`. Escaped `'#'` is kept raw.
pub fn substitute_hash(text: &str, number: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(c) = rest.chars().next() {
        let mut input = rest;
        if let Ok(raw) = escaped_literal.take().parse_next(&mut input) {
            output.push_str(raw);
            rest = input;
        } else {
            if c == '#' {
                output.push_str(number);
            } else {
                output.push(c);
            }
            rest = &rest[c.len_utf8()..];
        }
    }
    output
}

/// Collapse doubled single quotes: `''` -> `'`.
pub fn unescape_quotes(text: &str) -> String {
    text.replace("''", "'")
}

/// Unescape literal braces and hash: `'{'` -> `{`, `'}'` -> `}`, `'#'` -> `#`.
pub fn unescape_literals(text: &str) -> String {
    text.replace("'{'", "{")
        .replace("'}'", "}")
        .replace("'#'", "#")
}

/// Parse `{ identifier , keyword ,` with optional whitespace.
fn construct_header<'i>(input: &mut &'i str, keyword: &'static str) -> ModalResult<&'i str> {
    let (_, _, identifier, _, _, _, _, _, _) = (
        '{',
        multispace0,
        identifier,
        multispace0,
        ',',
        multispace0,
        keyword,
        multispace0,
        ',',
    )
        .parse_next(input)?;
    Ok(identifier)
}

/// Parse a single option: `name{text}`.
fn option_branch<'i>(input: &mut &'i str) -> ModalResult<OptionBranch<'i>> {
    let (_, name, _, text) = (
        multispace0,
        identifier,
        multispace0,
        delimited('{', option_text, '}'),
    )
        .parse_next(input)?;
    Ok(OptionBranch { name, text })
}

/// Option text runs to the next `}` that is not part of an escaped literal.
fn option_text<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    let start = *input;
    loop {
        let mut probe = *input;
        if escaped_literal(&mut probe).is_err() {
            probe = *input;
            if not_closing_brace(&mut probe).is_err() {
                break;
            }
        }
        *input = probe;
    }
    Ok(&start[..start.len() - input.len()])
}

/// Consume one character that is not `}`.
fn not_closing_brace(input: &mut &str) -> ModalResult<char> {
    none_of('}').parse_next(input)
}

/// Parse an escaped literal: `'{'`, `'}'` or `'#'`.
fn escaped_literal(input: &mut &str) -> ModalResult<char> {
    delimited('\'', one_of(['{', '}', '#']), '\'').parse_next(input)
}

/// Parse an escaped literal or a simple placeholder.
fn token<'i>(input: &mut &'i str) -> ModalResult<Token<'i>> {
    alt((
        escaped_literal.take().map(Token::Escaped),
        placeholder.map(Token::Placeholder),
    ))
    .parse_next(input)
}

/// Parse a simple placeholder: `{identifier}`.
fn placeholder<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    delimited('{', identifier, '}').parse_next(input)
}

/// Parse an identifier (ASCII word characters).
fn identifier<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., is_word).parse_next(input)
}

/// Check if a character can appear in an identifier.
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Advance past one character.
fn skip_char(rest: &str) -> &str {
    let width = rest.chars().next().map_or(0, char::len_utf8);
    &rest[width..]
}
