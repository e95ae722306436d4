//! Generic music-theory lookup: chord symbols and scale names to
//! pitch-class sets.
//!
//! This is the first of the resolver's two sources. It knows the common
//! chord vocabulary as interval templates and the common scales/modes as
//! interval tables; anything it does not recognize resolves to the empty
//! set, never an error.

use crate::pitch::{parse_root, PitchClassSet};

/// Chord suffix templates, matched exactly against the text after the
/// root. Order is immaterial; entries are grouped by chord family.
static CHORD_SUFFIXES: &[(&str, &[u8])] = &[
    ("m(maj7)", &[0, 3, 7, 11]),
    ("mmaj7", &[0, 3, 7, 11]),
    ("maj9", &[0, 4, 7, 11, 2]),
    ("maj7", &[0, 4, 7, 11]),
    ("m7b5", &[0, 3, 6, 10]),
    ("min7", &[0, 3, 7, 10]),
    ("dim7", &[0, 3, 6, 9]),
    ("add9", &[0, 4, 7, 2]),
    ("sus2", &[0, 2, 7]),
    ("sus4", &[0, 5, 7]),
    ("sus", &[0, 5, 7]),
    ("7b13", &[0, 4, 10, 1, 3, 8]),
    ("7alt", &[0, 4, 10, 1, 3, 8]),
    ("alt", &[0, 4, 10, 1, 3, 8]),
    ("7b9", &[0, 4, 7, 10, 1]),
    ("7#9", &[0, 4, 7, 10, 3]),
    ("dim", &[0, 3, 6]),
    ("aug", &[0, 4, 8]),
    ("m9", &[0, 3, 7, 10, 2]),
    ("m7", &[0, 3, 7, 10]),
    ("m6", &[0, 3, 7, 9]),
    ("-7", &[0, 3, 7, 10]),
    ("min", &[0, 3, 7]),
    ("maj", &[0, 4, 7]),
    ("M7", &[0, 4, 7, 11]),
    ("^7", &[0, 4, 7, 11]),
    ("^", &[0, 4, 7, 11]),
    ("Δ", &[0, 4, 7, 11]),
    ("ø", &[0, 3, 6, 10]),
    ("°7", &[0, 3, 6, 9]),
    ("°", &[0, 3, 6]),
    ("o7", &[0, 3, 6, 9]),
    ("o", &[0, 3, 6]),
    ("+", &[0, 4, 8]),
    ("m", &[0, 3, 7]),
    ("-", &[0, 3, 7]),
    ("9", &[0, 4, 7, 10, 2]),
    ("13", &[0, 4, 7, 10, 2, 9]),
    ("11", &[0, 4, 7, 10, 2, 5]),
    ("7", &[0, 4, 7, 10]),
    ("6", &[0, 4, 7, 9]),
    ("5", &[0, 7]),
    ("", &[0, 4, 7]),
];

/// Scale interval tables, keyed by normalized scale name.
static SCALES: &[(&str, &[u8])] = &[
    ("major", &[0, 2, 4, 5, 7, 9, 11]),
    ("minor", &[0, 2, 3, 5, 7, 8, 10]),
    ("dorian", &[0, 2, 3, 5, 7, 9, 10]),
    ("phrygian", &[0, 1, 3, 5, 7, 8, 10]),
    ("lydian", &[0, 2, 4, 6, 7, 9, 11]),
    ("mixolydian", &[0, 2, 4, 5, 7, 9, 10]),
    ("locrian", &[0, 1, 3, 5, 6, 8, 10]),
    ("harmonic minor", &[0, 2, 3, 5, 7, 8, 11]),
    ("melodic minor", &[0, 2, 3, 5, 7, 9, 11]),
    ("major pentatonic", &[0, 2, 4, 7, 9]),
    ("minor pentatonic", &[0, 3, 5, 7, 10]),
    ("blues", &[0, 3, 5, 6, 7, 10]),
];

/// Chord symbol → pitch classes.
///
/// Splits the symbol into root and suffix, then matches the suffix
/// exactly against the template table. An unparseable root or unknown
/// suffix yields the empty set.
pub fn chord_pitch_classes(symbol: &str) -> PitchClassSet {
    let Some((root, suffix)) = parse_root(symbol.trim()) else {
        return PitchClassSet::EMPTY;
    };

    for (name, intervals) in CHORD_SUFFIXES {
        if suffix == *name {
            return PitchClassSet::from_intervals(root, intervals);
        }
    }

    PitchClassSet::EMPTY
}

/// Map a human modality name onto the scale table's vocabulary.
///
/// Case- and whitespace-insensitive; the Ionian/Aeolian church names
/// collapse onto major/minor. Unknown names return `None`.
pub fn normalize_modality(modality: &str) -> Option<&'static str> {
    let folded = modality.trim().to_ascii_lowercase();
    let folded = folded.split_whitespace().collect::<Vec<_>>().join(" ");

    let canonical = match folded.as_str() {
        "major" | "ionian" | "maj" => "major",
        "minor" | "aeolian" | "min" | "natural minor" => "minor",
        "dorian" => "dorian",
        "phrygian" => "phrygian",
        "lydian" => "lydian",
        "mixolydian" => "mixolydian",
        "locrian" => "locrian",
        "harmonic minor" => "harmonic minor",
        "melodic minor" => "melodic minor",
        "major pentatonic" | "pentatonic major" | "pentatonic" => "major pentatonic",
        "minor pentatonic" | "pentatonic minor" => "minor pentatonic",
        "blues" | "blues scale" => "blues",
        _ => return None,
    };
    Some(canonical)
}

/// `(key, modality)` → scale pitch classes.
///
/// An unresolvable key or modality yields the empty set; callers treat
/// that as "no scale constraint".
pub fn scale_pitch_classes(key: &str, modality: &str) -> PitchClassSet {
    let Some((root, rest)) = parse_root(key.trim()) else {
        return PitchClassSet::EMPTY;
    };
    // Reject keys with trailing junk ("Cmaj" is a chord, not a key root)
    if !rest.is_empty() {
        return PitchClassSet::EMPTY;
    }

    let Some(scale_name) = normalize_modality(modality) else {
        return PitchClassSet::EMPTY;
    };

    for (name, intervals) in SCALES {
        if scale_name == *name {
            return PitchClassSet::from_intervals(root, intervals);
        }
    }

    PitchClassSet::EMPTY
}
