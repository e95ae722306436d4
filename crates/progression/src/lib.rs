//! Chord progression mini-language parser.
//!
//! Turns compact progression text into an ordered list of chord tokens.
//! Single chords are whitespace-separated; `[C Em]` keeps alternatives as
//! a group; the whole progression may be wrapped in `< ... >` (a trailing
//! repeat count outside the wrapper is ignored); `//` starts a line
//! comment; and the literal may be embedded in a larger snippet behind
//! one of three quoting styles.
//!
//! The parser is generous: malformed input degrades (unterminated
//! brackets consume to end of input, missing progressions yield an empty
//! token list) and every assumption is reported as a diagnostic.
//!
//! # Example
//!
//! ```
//! use progression::{parse, ChordTokenKind};
//!
//! let result = parse(r#"prog = "<[C Em] G // turnaround omitted
//! Am F>""#);
//!
//! let tokens = result.value;
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(
//!     tokens[0].kind,
//!     ChordTokenKind::Group(vec!["C".into(), "Em".into()])
//! );
//! assert_eq!(tokens[1].kind, ChordTokenKind::Single("G".into()));
//! ```

pub mod extract;
pub mod feedback;
pub mod scan;
pub mod token;

pub use feedback::{Diagnostic, DiagnosticLevel, ParseResult};
pub use token::{ChordToken, ChordTokenKind};

/// Parse progression source into chord tokens.
///
/// Pipeline: strip `//` comments, pull the first quoted literal out of
/// the surrounding snippet (if any), unwrap the `< ... >` wrapper, then
/// scan. Never fails; an input with no progression in it parses to an
/// empty token list.
pub fn parse(source: &str) -> ParseResult<Vec<ChordToken>> {
    let mut diagnostics = Vec::new();

    let stripped = extract::strip_line_comments(source);
    let literal = extract::extract_literal(&stripped, &mut diagnostics);
    let body = extract::unwrap_angle(literal, &mut diagnostics);
    let tokens = scan::tokenize(body, &mut diagnostics);

    ParseResult::new(tokens, diagnostics)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_source_yields_no_tokens() {
        assert!(parse("").value.is_empty());
    }

    #[test]
    fn four_singles() {
        let tokens = parse("C G Am F").value;
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[2].kind, ChordTokenKind::Single("Am".into()));
        assert_eq!(tokens[2].index, 2);
    }

    #[test]
    fn comment_excluded() {
        let tokens = parse("C G // Am F").value;
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn embedded_assignment_with_repeat_suffix() {
        let tokens = parse("const prog = '<C F G>4';").value;
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[2].kind, ChordTokenKind::Single("G".into()));
    }

    #[test]
    fn only_first_quoted_construct_used() {
        let tokens = parse("a = \"C G\" b = \"Dm Em A7\"").value;
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn unterminated_group_warns_but_parses() {
        let result = parse("[Dm G");
        assert_eq!(result.value.len(), 1);
        assert!(result.value[0].is_group());
        assert_eq!(result.warnings().count(), 1);
    }

    #[test]
    fn missing_progression_construct_is_empty() {
        // quoted construct present but blank
        assert!(parse("prog = \"\"").value.is_empty());
    }
}
