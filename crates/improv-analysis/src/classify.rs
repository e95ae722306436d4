//! Per-note harmonic classification against the chord timeline, the
//! active scale, and the beat grid.

use serde::{Deserialize, Serialize};

use crate::beat::{classify_beat, BeatPosition};
use crate::pitch::{midi_pitch_class, note_name};
use crate::resolver::Resolver;
use crate::timeline::TimelineSlot;
use crate::types::NoteEvent;

/// Everything derived about one played note. Pure function of the note
/// and the analysis context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteContext {
    /// Pitch class name, sharp spelling; empty when the pitch could not
    /// be named (out-of-range input, guarded)
    pub pitch_class: String,
    /// Owning timeline slot; `None` only when the timeline is empty
    pub slot_index: Option<usize>,
    /// Chord names active at this note's start time
    pub chords: Vec<String>,
    pub is_chord_tone: bool,
    pub is_scale_tone: bool,
    pub is_strong_beat: bool,
    pub beat_index: u64,
    pub beat_in_bar: u32,
}

/// Find the slot containing `time_s`, falling back to the last slot for
/// notes that trail past the end of the timeline.
fn slot_for(timeline: &[TimelineSlot], time_s: f64) -> Option<&TimelineSlot> {
    timeline
        .iter()
        .find(|slot| slot.contains(time_s))
        .or_else(|| timeline.last())
}

/// Classify a single note.
///
/// Chord tones are the union across every alternative chord in the
/// slot's group: matching any alternative counts. An unnameable pitch
/// yields both flags false, never a panic.
pub fn classify_note(
    note: &NoteEvent,
    timeline: &[TimelineSlot],
    resolver: &mut Resolver,
    tempo_bpm: f64,
    beats_per_bar: u32,
) -> NoteContext {
    let start = note.start_s();
    let slot = slot_for(timeline, start);

    let BeatPosition {
        beat_index,
        beat_in_bar,
        is_strong,
    } = classify_beat(start, tempo_bpm, beats_per_bar);

    let chords: Vec<String> = slot.map(|s| s.chords.clone()).unwrap_or_default();

    let (pitch_class, is_chord_tone, is_scale_tone) = match midi_pitch_class(note.pitch) {
        Some(pc) => {
            let mut chord_tones = crate::pitch::PitchClassSet::EMPTY;
            for name in &chords {
                chord_tones = chord_tones.union(resolver.chord_tones(name));
            }
            let is_chord_tone = !chord_tones.is_empty() && chord_tones.contains(pc);
            let is_scale_tone = resolver.scale_tones().contains(pc);
            (note_name(pc).to_string(), is_chord_tone, is_scale_tone)
        }
        None => (String::new(), false, false),
    };

    NoteContext {
        pitch_class,
        slot_index: slot.map(|s| s.index),
        chords,
        is_chord_tone,
        is_scale_tone,
        is_strong_beat: is_strong,
        beat_index,
        beat_in_bar,
    }
}

/// Classify every note of the take in input order.
pub fn classify_notes(
    notes: &[NoteEvent],
    timeline: &[TimelineSlot],
    resolver: &mut Resolver,
    tempo_bpm: f64,
    beats_per_bar: u32,
) -> Vec<NoteContext> {
    notes
        .iter()
        .map(|note| classify_note(note, timeline, resolver, tempo_bpm, beats_per_bar))
        .collect()
}
