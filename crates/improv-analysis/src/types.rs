//! Request and response types for one analysis call.

use progression::ChordToken;
use serde::{Deserialize, Serialize};

use crate::aggregate::{ChordSummary, HarmonicMetrics};
use crate::classify::NoteContext;
use crate::contour::ContourAnalysis;

/// A single recorded note, produced externally by pitch detection.
///
/// Times are in milliseconds from the start of the take.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteEvent {
    /// MIDI pitch 0–127
    pub pitch: u8,
    /// MIDI velocity 0–127
    pub velocity: u8,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl NoteEvent {
    pub fn start_s(&self) -> f64 {
        self.start_ms / 1000.0
    }

    pub fn duration_s(&self) -> f64 {
        self.duration_ms / 1000.0
    }

    pub fn end_s(&self) -> f64 {
        (self.start_ms + self.duration_ms) / 1000.0
    }
}

/// Self-reported player level, passed through to the prose summarizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

/// The progression either as raw mini-language source or pre-parsed tokens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProgressionInput {
    Source(String),
    Tokens(Vec<ChordToken>),
}

/// One analysis request. Everything the pipeline needs; no ambient state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub notes: Vec<NoteEvent>,
    pub progression: ProgressionInput,
    /// BPM, clamped into 30..=260 before beat math
    pub tempo: f64,
    /// "N/D", numerator defaults to 4 when unparseable
    pub time_signature: String,
    /// Key root name: "C", "Db", "F#"
    pub key: String,
    /// Human modality name: "Major", "dorian", "minor pentatonic", ...
    pub modality: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skill_level: Option<SkillLevel>,
}

/// The complete result bundle. Fully serializable and acyclic; a caller
/// always receives every field, whatever the input looked like.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub metrics: HarmonicMetrics,
    pub per_chord: Vec<ChordSummary>,
    pub contour: ContourAnalysis,
    /// Interval histogram keyed by size class ("small"/"medium"/"large")
    pub interval_distribution: std::collections::BTreeMap<String, usize>,
    pub note_contexts: Vec<NoteContext>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn note_event_time_conversions() {
        let note = NoteEvent {
            pitch: 60,
            velocity: 90,
            start_ms: 1500.0,
            duration_ms: 250.0,
        };
        assert_eq!(note.start_s(), 1.5);
        assert_eq!(note.duration_s(), 0.25);
        assert_eq!(note.end_s(), 1.75);
    }

    #[test]
    fn progression_input_deserializes_untagged() {
        let from_source: ProgressionInput = serde_json::from_str("\"C G Am F\"").unwrap();
        assert!(matches!(from_source, ProgressionInput::Source(_)));

        let from_tokens: ProgressionInput =
            serde_json::from_str(r#"[{"kind":{"single":"C"},"index":0}]"#).unwrap();
        match from_tokens {
            ProgressionInput::Tokens(tokens) => assert_eq!(tokens.len(), 1),
            other => panic!("expected tokens, got {other:?}"),
        }
    }
}
