//! Static chord-voicing database.
//!
//! The resolver's second source: concrete instrument voicings keyed by
//! normalized root + canonical suffix. Colloquial suffix spellings go
//! through an alias table first; a symbol with no exact alias simply
//! contributes nothing, leaving the theory lookup as the only source.
//!
//! Roots are spelled with sharps; flat inputs are reconciled through the
//! pitch-class round trip in [`lookup`].

use crate::pitch::{note_name, parse_root, PitchClassSet};

/// One catalogued voicing: guitar-register MIDI tones for a chord shape.
pub struct Voicing {
    pub root: &'static str,
    pub suffix: &'static str,
    pub midi: &'static [u8],
}

const fn v(root: &'static str, suffix: &'static str, midi: &'static [u8]) -> Voicing {
    Voicing { root, suffix, midi }
}

/// Open and common barre shapes. Not exhaustive — missing entries fall
/// back to the theory lookup alone.
static VOICINGS: &[Voicing] = &[
    // Major triads
    v("C", "major", &[48, 52, 55, 60, 64]),
    v("A", "major", &[45, 52, 57, 61, 64]),
    v("G", "major", &[43, 47, 50, 55, 59, 67]),
    v("E", "major", &[40, 47, 52, 56, 59, 64]),
    v("D", "major", &[50, 57, 62, 66]),
    v("F", "major", &[41, 48, 53, 57, 60, 65]),
    v("C#", "major", &[49, 56, 61, 65, 68]),
    // Minor triads
    v("A", "minor", &[45, 52, 57, 60, 64]),
    v("E", "minor", &[40, 47, 52, 55, 59, 64]),
    v("D", "minor", &[50, 57, 62, 65]),
    v("B", "minor", &[47, 54, 59, 62, 66]),
    v("C#", "minor", &[49, 56, 61, 64, 68]),
    // Dominant sevenths
    v("C", "7", &[48, 52, 58, 60, 64]),
    v("G", "7", &[43, 47, 50, 55, 59, 65]),
    v("A", "7", &[45, 52, 55, 61, 64]),
    v("E", "7", &[40, 47, 50, 56, 59, 64]),
    v("D", "7", &[50, 57, 60, 66]),
    v("B", "7", &[47, 51, 57, 59, 66]),
    // Major sevenths
    v("C", "maj7", &[48, 52, 55, 59, 64]),
    v("G", "maj7", &[43, 47, 50, 55, 59, 66]),
    v("A", "maj7", &[45, 52, 56, 61, 64]),
    v("D", "maj7", &[50, 57, 61, 66]),
    v("F", "maj7", &[53, 57, 60, 64]),
    // Minor sevenths
    v("A", "min7", &[45, 52, 55, 60, 64]),
    v("E", "min7", &[40, 47, 50, 55, 59, 64]),
    v("D", "min7", &[50, 57, 60, 65]),
    v("B", "min7", &[47, 50, 57, 59, 66]),
    // Half-diminished
    v("B", "m7b5", &[47, 50, 57, 59, 65]),
    v("E", "m7b5", &[40, 50, 55, 58]),
    // Altered dominants (7 b9/#9 b13 family)
    v("C", "alt", &[48, 58, 64, 68]),
    v("G", "alt", &[43, 53, 59, 63]),
    // Suspensions
    v("D", "sus4", &[50, 57, 62, 67]),
    v("A", "sus2", &[45, 52, 57, 59, 64]),
    // Sixths
    v("C", "6", &[48, 52, 57, 60, 64]),
];

/// Colloquial suffix → the database's canonical vocabulary.
///
/// Exact match only: a suffix absent from this table means the voicing
/// source is skipped for that symbol.
static SUFFIX_ALIASES: &[(&str, &str)] = &[
    ("", "major"),
    ("maj", "major"),
    ("M", "major"),
    ("m", "minor"),
    ("min", "minor"),
    ("-", "minor"),
    ("7", "7"),
    ("dom7", "7"),
    ("maj7", "maj7"),
    ("M7", "maj7"),
    ("^", "maj7"),
    ("^7", "maj7"),
    ("Δ", "maj7"),
    ("m7", "min7"),
    ("min7", "min7"),
    ("-7", "min7"),
    ("m7b5", "m7b5"),
    ("-7b5", "m7b5"),
    ("ø", "m7b5"),
    ("7alt", "alt"),
    ("alt", "alt"),
    ("7b13", "alt"),
    ("sus", "sus4"),
    ("sus4", "sus4"),
    ("sus2", "sus2"),
    ("6", "6"),
];

fn canonical_suffix(suffix: &str) -> Option<&'static str> {
    SUFFIX_ALIASES
        .iter()
        .find(|(alias, _)| *alias == suffix)
        .map(|(_, canonical)| *canonical)
}

/// Voicing tones for a chord symbol, as a pitch-class set.
///
/// Root normalization goes through the pitch class and back out in the
/// sharp convention, so "Db" finds the "C#" entry. Unknown root, alias,
/// or missing database entry all yield the empty set.
pub fn lookup(symbol: &str) -> PitchClassSet {
    let Some((root_pc, suffix)) = parse_root(symbol.trim()) else {
        return PitchClassSet::EMPTY;
    };
    let Some(canonical) = canonical_suffix(suffix) else {
        return PitchClassSet::EMPTY;
    };

    let root = note_name(root_pc);
    VOICINGS
        .iter()
        .find(|entry| entry.root == root && entry.suffix == canonical)
        .map(|entry| PitchClassSet::from_midi_notes(entry.midi))
        .unwrap_or(PitchClassSet::EMPTY)
}
