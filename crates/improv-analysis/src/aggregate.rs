//! Rolling per-note classifications and contour statistics up into the
//! final result bundle.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classify::NoteContext;
use crate::contour::{ContourAnalysis, IntervalHistogram};
use crate::types::AnalysisResponse;

/// Whole-take harmonic ratios. Every denominator is guarded: a zero
/// count yields a 0 ratio, never NaN or infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarmonicMetrics {
    pub chord_tone_ratio: f64,
    pub scale_tone_ratio: f64,
    /// Among notes landing on strong beats, the fraction that are chord tones
    pub strong_beat_chord_tone_ratio: f64,
    pub outside_scale_ratio: f64,
}

/// Per distinct chord (or alternative group) label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordSummary {
    pub label: String,
    pub note_count: usize,
    pub chord_tone_count: usize,
    pub chord_tone_ratio: f64,
}

fn guarded_ratio(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64
    }
}

/// Compute whole-take metrics from the per-note contexts.
pub fn harmonic_metrics(contexts: &[NoteContext]) -> HarmonicMetrics {
    let total = contexts.len();
    let chord_tones = contexts.iter().filter(|c| c.is_chord_tone).count();
    let scale_tones = contexts.iter().filter(|c| c.is_scale_tone).count();
    let outside = total - scale_tones;

    let strong: Vec<_> = contexts.iter().filter(|c| c.is_strong_beat).collect();
    let strong_chord_tones = strong.iter().filter(|c| c.is_chord_tone).count();

    HarmonicMetrics {
        chord_tone_ratio: guarded_ratio(chord_tones, total),
        scale_tone_ratio: guarded_ratio(scale_tones, total),
        strong_beat_chord_tone_ratio: guarded_ratio(strong_chord_tones, strong.len()),
        outside_scale_ratio: guarded_ratio(outside, total),
    }
}

/// Label for a slot's chord list: alternatives joined with '/', or
/// "Unknown" when no chord was in effect.
fn chord_label(chords: &[String]) -> String {
    if chords.is_empty() {
        "Unknown".to_string()
    } else {
        chords.join("/")
    }
}

/// Group notes by their slot's chord label, in first-appearance order.
pub fn per_chord_summaries(contexts: &[NoteContext]) -> Vec<ChordSummary> {
    let mut order: Vec<String> = Vec::new();
    let mut counts: BTreeMap<String, (usize, usize)> = BTreeMap::new();

    for context in contexts {
        let label = chord_label(&context.chords);
        let entry = counts.entry(label.clone()).or_insert_with(|| {
            order.push(label);
            (0, 0)
        });
        entry.0 += 1;
        if context.is_chord_tone {
            entry.1 += 1;
        }
    }

    order
        .into_iter()
        .map(|label| {
            let (note_count, chord_tone_count) = counts[&label];
            ChordSummary {
                chord_tone_ratio: guarded_ratio(chord_tone_count, note_count),
                label,
                note_count,
                chord_tone_count,
            }
        })
        .collect()
}

/// The interval histogram as the ordered map the response carries.
pub fn interval_distribution(intervals: &IntervalHistogram) -> BTreeMap<String, usize> {
    BTreeMap::from([
        ("small".to_string(), intervals.small),
        ("medium".to_string(), intervals.medium),
        ("large".to_string(), intervals.large),
    ])
}

/// Assemble the complete response bundle.
pub fn build_response(contexts: Vec<NoteContext>, contour: ContourAnalysis) -> AnalysisResponse {
    AnalysisResponse {
        metrics: harmonic_metrics(&contexts),
        per_chord: per_chord_summaries(&contexts),
        interval_distribution: interval_distribution(&contour.intervals),
        contour,
        note_contexts: contexts,
    }
}
