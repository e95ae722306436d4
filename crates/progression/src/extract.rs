//! Locating the progression literal inside a larger snippet.
//!
//! Progressions often arrive embedded in generated text, e.g.
//! `let prog = "<C G Am F> x2";` or a fenced snippet with `//` comments.
//! This module strips comments, pulls out the first quoted literal, and
//! unwraps the optional `< ... >` wrapper so the scanner only ever sees
//! bare progression text.

use crate::feedback::Diagnostic;

/// Quote characters that may delimit an embedded progression literal.
const QUOTE_CHARS: [char; 3] = ['"', '\'', '`'];

/// Remove `//` line comments. Everything from `//` to end of line goes.
pub fn strip_line_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    for (i, line) in source.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match line.find("//") {
            Some(pos) => out.push_str(&line[..pos]),
            None => out.push_str(line),
        }
    }
    out
}

/// Extract the first quote-delimited literal, if any.
///
/// Returns the content between the first quote character and its matching
/// closer. An assignment prefix (`prog = "..."`) needs no special handling:
/// the first quote wins. Without any quote the whole text is the
/// progression. An unterminated quote consumes to end of input.
pub fn extract_literal<'a>(text: &'a str, diagnostics: &mut Vec<Diagnostic>) -> &'a str {
    let Some(open) = text.find(&QUOTE_CHARS[..]) else {
        return text;
    };
    let quote = text[open..].chars().next().unwrap_or('"');
    let body_start = open + quote.len_utf8();
    match text[body_start..].find(quote) {
        Some(close) => &text[body_start..body_start + close],
        None => {
            diagnostics.push(Diagnostic::warning(format!(
                "unterminated {quote} literal, using remainder of input"
            )));
            &text[body_start..]
        }
    }
}

/// Unwrap an optional `< ... >` progression wrapper.
///
/// Only the wrapped content is tokenized; anything outside the angle
/// brackets (typically a trailing repeat count like `x2`) is ignored.
pub fn unwrap_angle<'a>(text: &'a str, diagnostics: &mut Vec<Diagnostic>) -> &'a str {
    let Some(open) = text.find('<') else {
        return text;
    };
    let body_start = open + 1;
    match text[body_start..].find('>') {
        Some(close) => &text[body_start..body_start + close],
        None => {
            diagnostics.push(Diagnostic::warning(
                "unterminated '<' wrapper, using remainder of input",
            ));
            &text[body_start..]
        }
    }
}
