//! Progression tokenizer using winnow combinators.
//!
//! Grammar: chord symbols separated by whitespace; `[A B ...]` is an
//! alternative group kept as a list. No nesting — a `[` inside a group is
//! literal symbol text. A missing `]` consumes the rest of the input as
//! one group, with a warning rather than an error.

use winnow::prelude::*;
use winnow::token::take_while;

use crate::feedback::Diagnostic;
use crate::token::ChordToken;

type PResult<T> = winnow::ModalResult<T>;

/// Symbol characters outside a group: anything but whitespace or brackets.
fn parse_symbol(input: &mut &str) -> PResult<String> {
    take_while(1.., |c: char| !c.is_whitespace() && c != '[' && c != ']')
        .parse_next(input)
        .map(|s: &str| s.to_string())
}

/// Parse a `[ ... ]` alternative group.
///
/// Returns the collected symbols and whether the closing `]` was found.
/// Inside a group only whitespace and `]` delimit symbols, so an inner
/// `[` stays literal.
fn parse_group(input: &mut &str) -> PResult<(Vec<String>, bool)> {
    '['.parse_next(input)?;

    let mut names = Vec::new();
    loop {
        *input = input.trim_start();
        if input.is_empty() {
            return Ok((names, false));
        }
        if input.starts_with(']') {
            ']'.parse_next(input)?;
            return Ok((names, true));
        }
        let symbol: &str =
            take_while(1.., |c: char| !c.is_whitespace() && c != ']').parse_next(input)?;
        names.push(symbol.to_string());
    }
}

/// Single left-to-right scan over bare progression text.
///
/// Token indices reflect encounter order. Empty groups are dropped and a
/// stray `]` is skipped; neither aborts the scan.
pub fn tokenize(text: &str, diagnostics: &mut Vec<Diagnostic>) -> Vec<ChordToken> {
    let mut input = text;
    let mut tokens = Vec::new();

    loop {
        input = input.trim_start();
        if input.is_empty() {
            break;
        }

        if input.starts_with('[') {
            // parse_group cannot fail after the '[' matched
            if let Ok((names, terminated)) = parse_group.parse_next(&mut input) {
                if !terminated {
                    diagnostics.push(Diagnostic::warning(
                        "unterminated '[' group, consumed remainder of progression",
                    ));
                }
                if names.is_empty() {
                    diagnostics.push(Diagnostic::info("empty '[]' group dropped"));
                } else {
                    let index = tokens.len();
                    tokens.push(ChordToken::group(names, index));
                }
            }
        } else if let Some(rest) = input.strip_prefix(']') {
            diagnostics.push(Diagnostic::info("stray ']' skipped"));
            input = rest;
        } else if let Ok(name) = parse_symbol.parse_next(&mut input) {
            let index = tokens.len();
            tokens.push(ChordToken::single(name, index));
        } else {
            break;
        }
    }

    tokens
}
