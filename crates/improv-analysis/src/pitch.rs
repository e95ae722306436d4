//! Pitch classes and pitch-class sets.

/// Note names in the sharp spelling convention. This is also the
/// vocabulary the voicing database keys its roots with, so flat inputs
/// are normalized through here.
const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Display name for a pitch class, sharp convention.
pub fn note_name(pitch_class: u8) -> &'static str {
    NOTE_NAMES_SHARP[(pitch_class % 12) as usize]
}

/// Pitch class of a MIDI pitch, or `None` outside the valid 0–127 range.
///
/// Never fails for real MIDI input; the guard keeps classification from
/// ever panicking on garbage from the pitch detector.
pub fn midi_pitch_class(pitch: u8) -> Option<u8> {
    if pitch > 127 {
        return None;
    }
    Some(pitch % 12)
}

/// Parse a note-name root like "C", "F#", "Bb" into a pitch class.
///
/// Accepts a single trailing `#` or `b` accidental; anything else is
/// rejected with `None`.
pub fn parse_root(name: &str) -> Option<(u8, &str)> {
    let mut chars = name.char_indices();
    let (_, letter) = chars.next()?;
    let base: i32 = match letter.to_ascii_uppercase() {
        'C' => 0,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = &name[letter.len_utf8()..];
    let (accidental, consumed) = match rest.chars().next() {
        Some('#') => (1, 1),
        Some('b') => (-1, 1),
        _ => (0, 0),
    };

    let pc = (base + accidental).rem_euclid(12) as u8;
    Some((pc, &rest[consumed..]))
}

/// A set over the 12 pitch classes, stored as a bitmask.
///
/// Derived data: built once from a chord or scale definition and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    pub const EMPTY: PitchClassSet = PitchClassSet(0);

    /// Build from semitone intervals above a root.
    pub fn from_intervals(root: u8, intervals: &[u8]) -> Self {
        let mut mask = 0u16;
        for &interval in intervals {
            mask |= 1 << ((root + interval) % 12);
        }
        PitchClassSet(mask)
    }

    /// Build from concrete MIDI tones (octaves collapse away).
    pub fn from_midi_notes(notes: &[u8]) -> Self {
        let mut mask = 0u16;
        for &note in notes {
            mask |= 1 << (note % 12);
        }
        PitchClassSet(mask)
    }

    pub fn contains(self, pitch_class: u8) -> bool {
        self.0 & (1 << (pitch_class % 12)) != 0
    }

    pub fn union(self, other: PitchClassSet) -> PitchClassSet {
        PitchClassSet(self.0 | other.0)
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Member names in pitch-class order, sharp spelling.
    pub fn names(self) -> Vec<&'static str> {
        (0..12)
            .filter(|&pc| self.contains(pc))
            .map(note_name)
            .collect()
    }
}
